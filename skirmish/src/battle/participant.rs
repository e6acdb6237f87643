use skirmish_data::{
    Boost,
    BoostTable,
    Stat,
};

use crate::mons::Creature;

/// The battle-scoped state of the creature a side has on the field.
///
/// Holds which roster entry is active, its stat stages, and the bad poison counter. All of it is
/// cleared whenever the active creature changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Participant {
    active: Option<usize>,
    boosts: BoostTable,
    toxic_counter: u8,
}

impl Participant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster index of the active creature.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn boosts(&self) -> &BoostTable {
        &self.boosts
    }

    pub fn boost(&self, boost: Boost) -> i8 {
        self.boosts.get(boost)
    }

    pub fn toxic_counter(&self) -> u8 {
        self.toxic_counter
    }

    /// Binds a different roster entry (or none), clearing all battle-scoped state.
    pub fn bind(&mut self, active: Option<usize>) {
        self.active = active;
        self.boosts.clear();
        self.toxic_counter = 0;
    }

    /// Adjusts a stat stage, returning the change that actually took place.
    pub fn apply_boost(&mut self, boost: Boost, delta: i8) -> i8 {
        self.boosts.apply(boost, delta)
    }

    pub fn start_toxic_counter(&mut self) {
        self.toxic_counter = 1;
    }

    pub fn advance_toxic_counter(&mut self) {
        self.toxic_counter = self.toxic_counter.saturating_add(1);
    }
}

/// Read-only view of a side's active creature and its participant state.
#[derive(Clone, Copy)]
pub struct ParticipantView<'s> {
    pub side: &'s str,
    pub participant: &'s Participant,
    pub creature: &'s Creature,
}

impl ParticipantView<'_> {
    /// Identifier used in the event log.
    pub fn ident(&self) -> String {
        format!("{},{}", self.creature.name(), self.side)
    }

    pub fn stat(&self, stat: Stat) -> u16 {
        self.creature.stat(stat)
    }

    pub fn boost(&self, boost: Boost) -> i8 {
        self.participant.boost(boost)
    }
}

/// Mutable view of a side's active creature and its participant state.
pub struct ParticipantContext<'s> {
    pub side: &'s str,
    pub participant: &'s mut Participant,
    pub creature: &'s mut Creature,
}

impl ParticipantContext<'_> {
    pub fn as_view(&self) -> ParticipantView<'_> {
        ParticipantView {
            side: self.side,
            participant: &*self.participant,
            creature: &*self.creature,
        }
    }

    pub fn ident(&self) -> String {
        self.as_view().ident()
    }
}
