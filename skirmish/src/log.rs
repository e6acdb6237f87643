use std::{
    fmt::Display,
    mem,
};

use itertools::Itertools;

/// A single event in the [`EventLog`].
///
/// Use the [`battle_event`] macro to construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleEvent(String);

impl BattleEvent {
    pub fn from_parts(parts: &[&dyn Display]) -> Self {
        Self(parts.iter().join("|"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Constructs a [`BattleEvent`] from pipe-delimited parts.
///
/// ```
/// use skirmish::battle_event;
///
/// let event = battle_event!("damage", "mon:Squirtle,2", "health:80/100");
/// assert_eq!(event.as_str(), "damage|mon:Squirtle,2|health:80/100");
/// ```
#[macro_export]
macro_rules! battle_event {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::BattleEvent::from_parts(&[$(&$arg),*])
    }};
}

/// A human-readable record of everything that happened in combat.
///
/// The log is output only. Nothing in it is read back during resolution.
#[derive(Debug, Default)]
pub struct EventLog {
    logs: Vec<String>,
    last_read: usize,
    enabled: bool,
}

impl EventLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            logs: Vec::new(),
            last_read: 0,
            enabled,
        }
    }

    /// Pushes a new event, unless the log is disabled.
    pub fn push(&mut self, event: BattleEvent) {
        if self.enabled {
            self.logs.push(event.0)
        }
    }

    pub fn has_new_messages(&self) -> bool {
        self.last_read < self.logs.len()
    }

    /// All events since the log was created or last cleared.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|s| s.as_str())
    }

    /// Reads out any events added since the last call.
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.logs.len());
        self.logs[i..].iter().map(|s| s.as_str())
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.last_read = 0;
    }
}
