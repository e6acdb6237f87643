#[cfg(test)]
mod switch_tests {
    use skirmish::{
        battle::{
            CombatManager,
            CombatOptions,
            Side,
        },
        dex::Dex,
    };
    use skirmish_data::{
        Boost,
        Status,
    };
    use skirmish_test_utils::{
        ScriptedPlayer,
        assert_error_message,
        assert_new_logs_eq,
        creature_data,
        make_side,
        test_data_store,
    };

    fn sides(dex: &Dex, choices: Vec<Option<usize>>) -> (Side, Side) {
        let side_1 = make_side(
            dex,
            "1",
            &[
                creature_data("Alpha", "Dummy", 50, &["Swords Dance"]),
                creature_data("Gamma", "Dummy", 50, &["Splash"]),
            ],
            ScriptedPlayer::new()
                .with_moves(["Swords Dance", "Splash"])
                .with_choices(choices),
        )
        .unwrap();
        let side_2 = make_side(
            dex,
            "2",
            &[creature_data("Beta", "Charmander", 50, &["Toxic", "Splash"])],
            ScriptedPlayer::new().with_moves(["Toxic", "Splash"]),
        )
        .unwrap();
        (side_1, side_2)
    }

    #[test]
    fn reset_requires_initial_creature() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, vec![None]);
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        assert_error_message(
            manager.reset(&mut side_1, &mut side_2),
            "side 1 did not send out a creature",
        );
    }

    #[test]
    fn reset_rejects_unknown_roster_index() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, vec![Some(5)]);
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        assert_error_message(
            manager.reset(&mut side_1, &mut side_2),
            "creature 5 on side 1 not found",
        );
    }

    #[test]
    fn switching_clears_battle_state_but_keeps_status() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, Vec::new());
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.new_logs().for_each(drop);

        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_eq!(side_1.participant().boost(Boost::Atk), 2);
        assert_eq!(side_1.participant().toxic_counter(), 2);
        assert_eq!(side_1.active().unwrap().status(), Some(Status::BadPoison));
        manager.new_logs().for_each(drop);

        manager.switch(&mut side_1, 1).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &["switch|mon:Gamma,1|species:Dummy|health:155/155"],
        );
        assert_eq!(side_1.participant().boost(Boost::Atk), 0);
        assert_eq!(side_1.participant().toxic_counter(), 0);
        assert_eq!(side_1.roster()[0].status(), Some(Status::BadPoison));

        assert_error_message(manager.switch(&mut side_1, 1), "Gamma is already active");
    }

    #[test]
    fn reset_starts_a_new_match() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, Vec::new());
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_eq!(manager.round(), 1);

        manager.reset(&mut side_1, &mut side_2).unwrap();
        assert_eq!(manager.round(), 0);
        assert_eq!(manager.full_log().count(), 2);
        assert_eq!(side_1.participant().boost(Boost::Atk), 0);
    }
}
