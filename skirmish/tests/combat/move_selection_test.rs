#[cfg(test)]
mod move_selection_tests {
    use skirmish::{
        battle::{
            CombatManager,
            CombatOptions,
            Side,
        },
        dex::Dex,
        error::NotFoundError,
    };
    use skirmish_data::MoveData;
    use skirmish_test_utils::{
        ScriptedPlayer,
        assert_error_message,
        assert_new_logs_eq,
        creature_data,
        make_side,
        test_data_store,
    };

    fn sides(dex: &Dex, script: &[&str]) -> (Side, Side) {
        let side_1 = make_side(
            dex,
            "1",
            &[creature_data("Alpha", "Dummy", 50, &["Focus", "Splash"])],
            ScriptedPlayer::new().with_moves(script.iter().copied()),
        )
        .unwrap();
        let side_2 = make_side(
            dex,
            "2",
            &[creature_data("Beta", "Dummy", 50, &["Splash"])],
            ScriptedPlayer::new().with_moves(["Splash"; 4]),
        )
        .unwrap();
        (side_1, side_2)
    }

    fn focus() -> MoveData {
        serde_json::from_str(
            r#"{
                "name": "Focus",
                "category": "Status",
                "type": "Normal",
                "pp": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn selected_move_spends_pp() {
        let mut data = test_data_store().unwrap();
        data.add_move(focus());
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, &["Splash"]);
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();

        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_eq!(side_1.active().unwrap().pp("Splash"), Some(39));
        assert_eq!(side_1.active().unwrap().pp("Focus"), Some(1));
        assert_eq!(side_2.active().unwrap().pp("Splash"), Some(39));
    }

    #[test]
    fn exhausted_move_fails_round() {
        let mut data = test_data_store().unwrap();
        data.add_move(focus());
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, &["Focus", "focus"]);
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.new_logs().for_each(drop);

        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:1",
                "move|mon:Alpha,1|name:Focus|target:Beta,2",
                "move|mon:Beta,2|name:Splash|target:Alpha,1",
            ],
        );
        assert_error_message(
            manager.step_round(&mut side_1, &mut side_2),
            "Alpha,1 cannot use focus: Alpha has no PP left for Focus",
        );
    }

    #[test]
    fn unknown_move_fails_round() {
        let mut data = test_data_store().unwrap();
        data.add_move(focus());
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, &["Surf"]);
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        let result = manager.step_round(&mut side_1, &mut side_2);
        assert!(
            result
                .as_ref()
                .is_err_and(|err| err.downcast_ref::<NotFoundError>().is_some())
        );
        assert_error_message(result, "Alpha,1 cannot use Surf: move Surf on Alpha not found");
    }

    #[test]
    fn failed_selection_leaves_match_unchanged() {
        let data = test_data_store().unwrap();
        let dex = Dex::new(&data);
        let mut side_1 = make_side(
            &dex,
            "1",
            &[creature_data("Alpha", "Dummy", 50, &["Splash"])],
            ScriptedPlayer::new().with_moves(["Splash", "Splash"]),
        )
        .unwrap();
        let mut side_2 = make_side(
            &dex,
            "2",
            &[creature_data("Beta", "Dummy", 50, &["Splash"])],
            ScriptedPlayer::new().with_moves(["Surf", "Splash"]),
        )
        .unwrap();
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        manager.new_logs().for_each(drop);

        assert_error_message(
            manager.step_round(&mut side_1, &mut side_2),
            "Beta,2 cannot use Surf: move Surf on Beta not found",
        );
        assert_eq!(manager.round(), 0);
        assert!(!manager.has_new_logs());
        assert_eq!(side_1.active().unwrap().pp("Splash"), Some(40));
        assert_eq!(side_2.active().unwrap().pp("Splash"), Some(40));

        manager.step_round(&mut side_1, &mut side_2).unwrap();
        assert_eq!(manager.round(), 1);
        assert_new_logs_eq(
            &mut manager,
            &[
                "turn|turn:1",
                "move|mon:Alpha,1|name:Splash|target:Beta,2",
                "move|mon:Beta,2|name:Splash|target:Alpha,1",
            ],
        );
        assert_eq!(side_1.active().unwrap().pp("Splash"), Some(39));
        assert_eq!(side_2.active().unwrap().pp("Splash"), Some(39));
    }

    #[test]
    fn player_errors_are_propagated() {
        let mut data = test_data_store().unwrap();
        data.add_move(focus());
        let dex = Dex::new(&data);
        let (mut side_1, mut side_2) = sides(&dex, &[]);
        let mut manager = CombatManager::new(CombatOptions::default(), &dex).unwrap();
        manager.reset(&mut side_1, &mut side_2).unwrap();
        assert_error_message(
            manager.step_round(&mut side_1, &mut side_2),
            "side 1 failed to select a move: script has no moves left",
        );
    }
}
