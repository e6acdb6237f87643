#[cfg(test)]
mod freeze_tests {
    use skirmish::{
        battle::{
            CombatManager,
            RandomizeBaseDamage,
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

    #[test]
    fn frozen_creature_thaws_on_lucky_roll() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let mut side_1 = make_side(
            &dex,
            "1",
            &[creature_data("Alpha", "Dummy", 50, &["Ice Beam", "Splash"])],
            ScriptedPlayer::new().with_moves(["Ice Beam", "Splash"]),
        )
        .unwrap();
        let mut side_2 = make_side(
            &dex,
            "2",
            &[creature_data("Beta", "Dummy", 50, &["Splash"])],
            ScriptedPlayer::new().with_moves(["Splash"; 2]),
        )
        .unwrap();
        let mut manager =
            CombatManager::new(controlled_options(RandomizeBaseDamage::Max), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.new_logs().for_each(drop);

        // Hit, no critical hit, then stay frozen.
        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(2, 1), (3, 1)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:1",
                "move|mon:Alpha,1|name:Ice Beam|target:Beta,2",
                "damage|mon:Beta,2|health:114/155",
                "status|mon:Beta,2|status:frz",
                "move|mon:Beta,2|name:Splash|target:Alpha,1",
            ],
        );

        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 0)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:2",
                "move|mon:Alpha,1|name:Splash|target:Beta,2",
                "move|mon:Beta,2|name:Splash|target:Alpha,1",
                "curestatus|mon:Beta,2|status:frz",
            ],
        );
    }
}
