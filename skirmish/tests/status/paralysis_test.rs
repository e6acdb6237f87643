#[cfg(test)]
mod paralysis_tests {
    use skirmish::{
        battle::{
            CombatManager,
            CombatOptions,
            RandomizeBaseDamage,
            Side,
        },
        dex::Dex,
    };
    use skirmish_test_utils::{
        ScriptedPlayer,
        assert_new_logs_eq,
        controlled_options,
        creature_data,
        get_controlled_rng,
        make_side,
        test_data_store,
    };

    fn sides(dex: &Dex) -> (Side, Side) {
        let side_1 = make_side(
            dex,
            "1",
            &[creature_data("Bulby", "Bulbasaur", 50, &["Thunder Wave", "Splash"])],
            ScriptedPlayer::new().with_moves(["Thunder Wave", "Splash", "Splash"]),
        )
        .unwrap();
        let side_2 = make_side(
            dex,
            "2",
            &[creature_data("Charmy", "Charmander", 50, &["Splash"])],
            ScriptedPlayer::new().with_moves(["Splash"; 3]),
        )
        .unwrap();
        (side_1, side_2)
    }

    fn start(
        dex: &Dex,
        options: CombatOptions,
        side_1: &mut Side,
        side_2: &mut Side,
    ) -> CombatManager {
        let mut manager = CombatManager::new(options, dex).unwrap();
        manager.reset(side_1, side_2).unwrap();
        manager.step_round(side_1, side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "switch|mon:Bulby,1|species:Bulbasaur|health:105/105",
                "switch|mon:Charmy,2|species:Charmander|health:99/99",
                "turn|turn:1",
                "move|mon:Charmy,2|name:Splash|target:Bulby,1",
                "move|mon:Bulby,1|name:Thunder Wave|target:Charmy,2",
                "status|mon:Charmy,2|status:par",
            ],
        );
        manager
    }

    #[test]
    fn paralysis_halves_speed_and_can_block_action() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex);
        let mut manager = start(
            &dex,
            controlled_options(RandomizeBaseDamage::Max),
            &mut side_1,
            &mut side_2,
        );

        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 1)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:2",
                "move|mon:Bulby,1|name:Splash|target:Charmy,2",
                "move|mon:Charmy,2|name:Splash|target:Bulby,1",
            ],
        );

        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 0)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:3",
                "move|mon:Bulby,1|name:Splash|target:Charmy,2",
                "cant|mon:Charmy,2|from:status:par",
            ],
        );
        assert_eq!(side_2.active().unwrap().pp("Splash"), Some(37));
    }

    #[test]
    fn speed_penalty_can_be_disabled() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex);
        let mut options = controlled_options(RandomizeBaseDamage::Max);
        options.engine.paralysis_speed_penalty = false;
        let mut manager = start(&dex, options, &mut side_1, &mut side_2);

        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 1)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:2",
                "move|mon:Charmy,2|name:Splash|target:Bulby,1",
                "move|mon:Bulby,1|name:Splash|target:Charmy,2",
            ],
        );
    }
}
