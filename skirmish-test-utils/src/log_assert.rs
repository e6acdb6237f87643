use skirmish::battle::CombatManager;

/// Asserts that new logs in the combat manager are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(manager: &mut CombatManager, want: &[&str]) {
    let got = manager.new_logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}
