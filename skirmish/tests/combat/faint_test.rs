#[cfg(test)]
mod faint_tests {
    use assert_matches::assert_matches;
    use skirmish::{
        battle::{
            CombatManager,
            RandomizeBaseDamage,
        },
        dex::Dex,
    };
    use skirmish_test_utils::{
        ScriptedPlayer,
        assert_error_message,
        assert_new_logs_eq,
        controlled_options,
        creature_data,
        get_controlled_rng,
        make_side,
        test_data_store,
    };

    #[test]
    fn fainted_creature_is_replaced_and_side_loses_when_out() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let mut side_1 = make_side(
            &dex,
            "1",
            &[creature_data("Alpha", "Dummy", 50, &["Hyper Strike"])],
            ScriptedPlayer::new().with_moves(["Hyper Strike"; 3]),
        )
        .unwrap();
        let mut side_2 = make_side(
            &dex,
            "2",
            &[
                creature_data("Birdy", "Pidgey", 5, &["Splash"]),
                creature_data("Squirt", "Squirtle", 5, &["Splash"]),
            ],
            ScriptedPlayer::new().with_moves(["Splash"; 3]),
        )
        .unwrap();
        let mut manager =
            CombatManager::new(controlled_options(RandomizeBaseDamage::Max), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "switch|mon:Alpha,1|species:Dummy|health:155/155",
                "switch|mon:Birdy,2|species:Pidgey|health:19/19",
            ],
        );

        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 1)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:1",
                "move|mon:Alpha,1|name:Hyper Strike|target:Birdy,2",
                "damage|mon:Birdy,2|health:0/19",
                "faint|mon:Birdy,2",
                "switch|mon:Squirt,2|species:Squirtle|health:19/19",
            ],
        );
        assert_eq!(side_2.participant().active(), Some(1));

        get_controlled_rng(&mut manager)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 1)]);
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:2",
                "move|mon:Alpha,1|name:Hyper Strike|target:Squirt,2",
                "damage|mon:Squirt,2|health:0/19",
                "faint|mon:Squirt,2",
            ],
        );
        assert!(side_2.is_defeated());
        assert!(!side_2.has_usable_creature());
        assert!(!side_1.is_defeated());

        assert_error_message(
            manager.step_round(&mut side_1, &mut side_2),
            "side 2 has no active creature",
        );
    }

    #[test]
    fn side_may_decline_replacement() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let mut side_1 = make_side(
            &dex,
            "1",
            &[creature_data("Alpha", "Dummy", 50, &["Hyper Strike"])],
            ScriptedPlayer::new().with_moves(["Hyper Strike"]),
        )
        .unwrap();
        let mut side_2 = make_side(
            &dex,
            "2",
            &[
                creature_data("Birdy", "Pidgey", 5, &["Splash"]),
                creature_data("Squirt", "Squirtle", 5, &["Splash"]),
            ],
            ScriptedPlayer::new()
                .with_moves(["Splash"])
                .with_choices([Some(0), None]),
        )
        .unwrap();
        let mut manager =
            CombatManager::new(controlled_options(RandomizeBaseDamage::Max), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert!(side_2.is_defeated());
        assert!(side_2.has_usable_creature());
    }

    #[test]
    fn fainted_creature_cannot_be_sent_in() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let mut side_1 = make_side(
            &dex,
            "1",
            &[creature_data("Alpha", "Dummy", 50, &["Hyper Strike"])],
            ScriptedPlayer::new().with_moves(["Hyper Strike"]),
        )
        .unwrap();
        let mut side_2 = make_side(
            &dex,
            "2",
            &[
                creature_data("Birdy", "Pidgey", 5, &["Splash"]),
                creature_data("Squirt", "Squirtle", 5, &["Splash"]),
            ],
            ScriptedPlayer::new()
                .with_moves(["Splash"])
                .with_choices([Some(0), Some(0)]),
        )
        .unwrap();
        let mut manager =
            CombatManager::new(controlled_options(RandomizeBaseDamage::Max), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        assert_matches!(manager.step_round(&mut side_1, &mut side_2), Err(err) => {
            assert_eq!(err.to_string(), "Birdy is fainted and cannot be sent in");
        });
    }
}
