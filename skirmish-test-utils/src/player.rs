use std::collections::VecDeque;

use anyhow::{
    Result,
    anyhow,
};
use skirmish::{
    battle::{
        ParticipantView,
        Player,
    },
    mons::Creature,
};

/// A [`Player`] that follows a fixed script.
///
/// Moves are used in the order given. Replacement choices are consumed in order too; once they run
/// out, the first creature that can still fight is sent in.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPlayer {
    moves: VecDeque<String>,
    choices: VecDeque<Option<usize>>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves.extend(moves.into_iter().map(|name| name.into()));
        self
    }

    pub fn with_choices<I>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        self.choices.extend(choices);
        self
    }

    pub fn boxed(self) -> Box<dyn Player> {
        Box::new(self)
    }
}

impl Player for ScriptedPlayer {
    fn select_move(
        &mut self,
        _: &ParticipantView<'_>,
        _: &ParticipantView<'_>,
    ) -> Result<String> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow!("script has no moves left"))
    }

    fn choose_next_creature(
        &mut self,
        roster: &[Creature],
        _: Option<&ParticipantView<'_>>,
    ) -> Result<Option<usize>> {
        match self.choices.pop_front() {
            Some(choice) => Ok(choice),
            None => Ok(roster.iter().position(|creature| creature.is_alive())),
        }
    }
}
