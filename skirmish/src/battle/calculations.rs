use anyhow::Result;
use skirmish_data::{
    Accuracy,
    Boost,
    MoveCategory,
    MoveData,
    Stat,
    TypeChart,
};
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        ParticipantView,
        RandomizeBaseDamage,
    },
    error::general_error,
};

/// Same-type attack bonus.
pub const STAB_MODIFIER: f64 = 1.5;
/// Damage multiplier for a critical hit.
pub const CRIT_MODIFIER: f64 = 1.5;
/// Bounds of the random damage roll, in percent.
pub const MIN_DAMAGE_ROLL: u64 = 85;
pub const MAX_DAMAGE_ROLL: u64 = 100;
/// Highest critical hit stage with its own probability.
pub const MAX_CRIT_STAGE: i32 = 3;

/// Multiplier for a stat at the given stage.
pub fn stage_modifier(stage: i8) -> f64 {
    let stage = stage.clamp(-Boost::MAX_STAGE, Boost::MAX_STAGE) as f64;
    if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    }
}

/// Multiplier for accuracy given the attacker's accuracy stage minus the defender's evasion stage.
pub fn accuracy_modifier(delta: i32) -> f64 {
    let delta = delta.clamp(-(Boost::MAX_STAGE as i32), Boost::MAX_STAGE as i32) as f64;
    if delta >= 0.0 {
        (3.0 + delta) / 3.0
    } else {
        3.0 / (3.0 - delta)
    }
}

/// The percent chance to hit, after applying accuracy and evasion stages.
pub fn hit_chance(accuracy: u8, accuracy_stage: i8, evasion_stage: i8) -> u64 {
    let delta = accuracy_stage as i32 - evasion_stage as i32;
    (accuracy as f64 * accuracy_modifier(delta)).floor() as u64
}

/// Rolls for a hit.
///
/// Moves exempt from accuracy checks always hit without a draw.
pub fn does_hit(
    prng: &mut dyn PseudoRandomNumberGenerator,
    accuracy: Accuracy,
    accuracy_stage: i8,
    evasion_stage: i8,
) -> bool {
    match accuracy {
        Accuracy::Exempt => true,
        Accuracy::Chance(accuracy) => {
            rand_util::range(prng, 0, 100) <= hit_chance(accuracy, accuracy_stage, evasion_stage)
        }
    }
}

/// The effective critical hit stage of a move.
pub fn crit_stage(high_crit: bool, crit_boost: i8) -> i32 {
    (high_crit as i32 + crit_boost as i32).clamp(0, MAX_CRIT_STAGE)
}

/// Probability of a critical hit at the given stage, as `(numerator, denominator)`.
pub fn crit_chance(stage: i32) -> Result<(u64, u64)> {
    match stage {
        0 => Ok((1, 16)),
        1 => Ok((1, 8)),
        2 => Ok((1, 2)),
        3 => Ok((1, 1)),
        _ => Err(general_error(format!("invalid critical hit stage {stage}"))),
    }
}

pub fn does_crit(prng: &mut dyn PseudoRandomNumberGenerator, stage: i32) -> Result<bool> {
    let (numerator, denominator) = crit_chance(stage)?;
    Ok(rand_util::chance(prng, numerator, denominator))
}

/// The random damage roll, in percent.
pub fn damage_roll(
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> u64 {
    match randomize {
        RandomizeBaseDamage::Randomize => {
            rand_util::range_inclusive(prng, MIN_DAMAGE_ROLL, MAX_DAMAGE_ROLL)
        }
        RandomizeBaseDamage::Max => MAX_DAMAGE_ROLL,
        RandomizeBaseDamage::Min => MIN_DAMAGE_ROLL,
    }
}

/// A stat with its stage applied.
pub fn effective_stat(view: &ParticipantView<'_>, stat: Stat, boost: Boost) -> f64 {
    view.stat(stat) as f64 * stage_modifier(view.boost(boost))
}

/// Base damage before the critical hit, random roll, and type modifiers.
pub fn base_damage(level: u8, power: u16, stab: f64, attack: f64, defense: f64) -> f64 {
    let level = level as f64;
    (2.0 * level / 5.0 + 2.0) * power as f64 * stab * (attack / defense) / 50.0 + 2.0
}

/// Result of a damage calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Damage {
    pub amount: u16,
    pub crit: bool,
}

/// Calculates the damage a move deals.
///
/// Status moves deal no damage and consume no random draws. Otherwise, the critical hit roll is
/// drawn before the damage roll.
pub fn calculate_damage(
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
    type_chart: &TypeChart,
    move_data: &MoveData,
    attacker: &ParticipantView<'_>,
    defender: &ParticipantView<'_>,
) -> Result<Damage> {
    let (attack, defense) = match move_data.category {
        MoveCategory::Physical => (
            effective_stat(attacker, Stat::Atk, Boost::Atk),
            effective_stat(defender, Stat::Def, Boost::Def),
        ),
        MoveCategory::Special => (
            effective_stat(attacker, Stat::SpAtk, Boost::SpAtk),
            effective_stat(defender, Stat::SpDef, Boost::SpDef),
        ),
        MoveCategory::Status => return Ok(Damage::default()),
    };
    let stab = if attacker.creature.species().has_type(move_data.primary_type) {
        STAB_MODIFIER
    } else {
        1.0
    };
    let base = base_damage(
        attacker.creature.level(),
        move_data.base_power.unwrap_or(0),
        stab,
        attack,
        defense.max(1.0),
    );

    let crit = does_crit(
        prng,
        crit_stage(move_data.high_crit, attacker.boost(Boost::Crit)),
    )?;
    let roll = damage_roll(prng, randomize);
    let type_modifier = type_chart.modifier(move_data.primary_type, defender.creature.types());

    let crit_modifier = if crit { CRIT_MODIFIER } else { 1.0 };
    let damage = (base * crit_modifier * (roll as f64 / 100.0) * type_modifier).floor();
    log::trace!(
        "{} damage: base={base} crit={crit} roll={roll} type={type_modifier} -> {damage}",
        move_data.name
    );
    Ok(Damage {
        amount: damage.clamp(0.0, u16::MAX as f64) as u16,
        crit,
    })
}
