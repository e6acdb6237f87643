use anyhow::Result;

use crate::{
    battle::{
        Participant,
        ParticipantContext,
        ParticipantView,
        Player,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
    mons::Creature,
};

/// One side of a match: a roster, the participant on the field, and the player deciding for it.
pub struct Side {
    name: String,
    roster: Vec<Creature>,
    participant: Participant,
    player: Box<dyn Player>,
}

impl Side {
    pub fn new<S>(name: S, roster: Vec<Creature>, player: Box<dyn Player>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            roster,
            participant: Participant::new(),
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &[Creature] {
        &self.roster
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    /// The active creature, if any.
    pub fn active(&self) -> Option<&Creature> {
        self.roster.get(self.participant.active()?)
    }

    /// Whether the side has no creature on the field.
    ///
    /// A side that did not send in a replacement after a faint has lost.
    pub fn is_defeated(&self) -> bool {
        self.active().is_none()
    }

    /// Whether any creature on the roster can still fight.
    pub fn has_usable_creature(&self) -> bool {
        self.roster.iter().any(|creature| creature.is_alive())
    }

    pub fn view(&self) -> Option<ParticipantView<'_>> {
        let creature = self.active()?;
        Some(ParticipantView {
            side: &self.name,
            participant: &self.participant,
            creature,
        })
    }

    pub fn context(&mut self) -> Option<ParticipantContext<'_>> {
        let creature = self.roster.get_mut(self.participant.active()?)?;
        Some(ParticipantContext {
            side: &self.name,
            participant: &mut self.participant,
            creature,
        })
    }

    /// Sends in the creature at the given roster index, clearing all stat stages.
    pub fn switch_in(&mut self, index: usize) -> Result<()> {
        let creature = self
            .roster
            .get(index)
            .wrap_not_found_error(format_args!("creature {index} on side {}", self.name))?;
        if !creature.is_alive() {
            return Err(general_error(format!(
                "{} is fainted and cannot be sent in",
                creature.name()
            )));
        }
        if self.participant.active() == Some(index) {
            return Err(general_error(format!(
                "{} is already active",
                creature.name()
            )));
        }
        self.participant.bind(Some(index));
        Ok(())
    }

    /// Removes the active creature from the field.
    pub fn withdraw(&mut self) {
        self.participant.bind(None);
    }

    /// Restores every creature on the roster and clears the field.
    pub fn reset_roster(&mut self) {
        self.withdraw();
        for creature in &mut self.roster {
            creature.reset();
        }
    }

    pub(crate) fn request_move(&mut self, opponent: &ParticipantView<'_>) -> Result<String> {
        let creature = self
            .roster
            .get(self.participant.active().wrap_expectation("no active creature")?)
            .wrap_expectation("active creature missing from roster")?;
        let own = ParticipantView {
            side: &self.name,
            participant: &self.participant,
            creature,
        };
        self.player
            .select_move(&own, opponent)
            .wrap_error_with_format(format_args!("side {} failed to select a move", self.name))
    }

    pub(crate) fn request_next_creature(
        &mut self,
        opponent: Option<&ParticipantView<'_>>,
    ) -> Result<Option<usize>> {
        self.player
            .choose_next_creature(&self.roster, opponent)
            .wrap_error_with_format(format_args!(
                "side {} failed to choose a creature",
                self.name
            ))
    }
}
