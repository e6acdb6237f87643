use skirmish_data::Status;
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::ParticipantContext;

/// Chance for a frozen creature to thaw at the end of a round.
pub const FREEZE_THAW_CHANCE: (u64, u64) = (1, 5);

/// Inflicts a non-volatile status on the participant's creature.
///
/// Ignored if the creature already has a status. Bad poison restarts the participant's counter.
/// Returns whether the status was applied.
pub fn inflict_status(
    context: &mut ParticipantContext<'_>,
    status: Status,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> bool {
    if !context.creature.set_status(status, prng) {
        return false;
    }
    if status == Status::BadPoison {
        context.participant.start_toxic_counter();
    }
    true
}

/// What happened to a participant during its end-of-round status tick.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResidualOutcome {
    /// Damage dealt by the status, with the status that caused it.
    pub damage: Option<(Status, u16)>,
    /// Status that wore off.
    pub cured: Option<Status>,
}

/// Residual damage for a status, or `None` if the status deals no damage.
pub fn residual_damage(status: Status, max_hp: u16, toxic_counter: u8) -> Option<u16> {
    match status {
        Status::Burn | Status::Poison => Some(max_hp / 8),
        Status::BadPoison => Some((max_hp as u32 * toxic_counter as u32 / 16) as u16),
        Status::Freeze | Status::Paralysis | Status::Sleep => None,
    }
}

/// Runs the end-of-round status tick for a participant.
///
/// Fainted creatures are skipped.
pub fn apply_residual(
    context: &mut ParticipantContext<'_>,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> ResidualOutcome {
    let mut outcome = ResidualOutcome::default();
    if !context.creature.is_alive() {
        return outcome;
    }
    let status = match context.creature.status() {
        Some(status) => status,
        None => return outcome,
    };

    if status == Status::BadPoison && context.participant.toxic_counter() == 0 {
        // Switched back in while badly poisoned.
        context.participant.start_toxic_counter();
    }
    if let Some(damage) = residual_damage(
        status,
        context.creature.max_hp(),
        context.participant.toxic_counter(),
    ) {
        outcome.damage = Some((status, context.creature.damage(damage)));
    }
    match status {
        Status::BadPoison => context.participant.advance_toxic_counter(),
        Status::Freeze => {
            let (numerator, denominator) = FREEZE_THAW_CHANCE;
            if rand_util::chance(prng, numerator, denominator) {
                outcome.cured = context.creature.cure_status();
            }
        }
        _ => (),
    }

    if let Some(cured) = context.creature.tick_status_duration() {
        outcome.cured = Some(cured);
    }
    outcome
}
