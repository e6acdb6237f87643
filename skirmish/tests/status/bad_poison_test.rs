#[cfg(test)]
mod bad_poison_tests {
    use skirmish::{
        battle::{
            CombatManager,
            CombatOptions,
        },
        dex::Dex,
    };
    use skirmish_test_utils::{
        ScriptedPlayer,
        assert_new_logs_eq,
        creature_data,
        make_side,
        test_data_store,
    };

    #[test]
    fn bad_poison_damage_grows_each_round() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let mut side_1 = make_side(
            &dex,
            "1",
            &[creature_data("Charmy", "Charmander", 100, &["Toxic", "Splash"])],
            ScriptedPlayer::new().with_moves(["Toxic", "Splash", "Splash"]),
        )
        .unwrap();
        let mut side_2 = make_side(
            &dex,
            "2",
            &[creature_data("Bulby", "Bulbasaur", 100, &["Splash"])],
            ScriptedPlayer::new().with_moves(["Splash"; 3]),
        )
        .unwrap();
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.new_logs().for_each(drop);

        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:1",
                "move|mon:Charmy,1|name:Toxic|target:Bulby,2",
                "status|mon:Bulby,2|status:bpsn",
                "move|mon:Bulby,2|name:Splash|target:Charmy,1",
                "damage|mon:Bulby,2|health:188/200|from:status:bpsn",
            ],
        );
        assert_eq!(side_2.participant().toxic_counter(), 2);

        manager.step_round(&mut side_1, &mut side_2).unwrap();
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        let residual = manager
            .new_logs()
            .filter(|log| log.ends_with("from:status:bpsn"))
            .map(|log| log.to_owned())
            .collect::<Vec<_>>();
        pretty_assertions::assert_eq!(
            residual,
            vec![
                "damage|mon:Bulby,2|health:163/200|from:status:bpsn",
                "damage|mon:Bulby,2|health:126/200|from:status:bpsn",
            ]
        );
        assert_eq!(side_2.participant().toxic_counter(), 4);
    }
}
