use anyhow::Result;

use crate::{
    battle::ParticipantView,
    mons::Creature,
};

/// The decision policy behind a side.
///
/// Called synchronously by the combat manager. A player that blocks (for example, waiting on
/// interactive input) blocks the round.
pub trait Player {
    /// Names the move the active creature uses this round.
    fn select_move(
        &mut self,
        own: &ParticipantView<'_>,
        opponent: &ParticipantView<'_>,
    ) -> Result<String>;

    /// Picks the roster index of the next creature to send out.
    ///
    /// `opponent` is empty at the start of a match. Returning `None` leaves the side without an
    /// active creature.
    fn choose_next_creature(
        &mut self,
        roster: &[Creature],
        opponent: Option<&ParticipantView<'_>>,
    ) -> Result<Option<usize>>;
}
