use skirmish_data::MoveEffect;
use skirmish_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        ParticipantContext,
        inflict_status,
    },
    battle_event,
    log::EventLog,
};

/// Formats the health of the participant's creature for the event log.
pub(crate) fn health(context: &ParticipantContext<'_>) -> String {
    format!(
        "health:{}/{}",
        context.creature.hp(),
        context.creature.max_hp()
    )
}

/// Applies a single move effect to a participant.
///
/// Drain is resolved against damage dealt, so it has no effect here.
pub fn apply_effect(
    context: &mut ParticipantContext<'_>,
    effect: &MoveEffect,
    prng: &mut dyn PseudoRandomNumberGenerator,
    log: &mut EventLog,
) {
    match effect {
        MoveEffect::Status(status) => {
            if inflict_status(context, *status, prng) {
                log.push(battle_event!(
                    "status",
                    format!("mon:{}", context.ident()),
                    format!("status:{status}"),
                ));
            }
        }
        MoveEffect::Boost { boost, amount } => {
            let delta = context.participant.apply_boost(*boost, *amount);
            let event = if *amount < 0 { "unboost" } else { "boost" };
            log.push(battle_event!(
                event,
                format!("mon:{}", context.ident()),
                format!("stat:{boost}"),
                format!("by:{}", delta.unsigned_abs()),
            ));
        }
        MoveEffect::Heal(amount) => {
            let amount = amount.resolve(context.creature.max_hp());
            if context.creature.heal(amount) == 0 {
                return;
            }
            log.push(battle_event!(
                "heal",
                format!("mon:{}", context.ident()),
                health(context),
            ));
        }
        MoveEffect::Drain(_) => (),
    }
}
