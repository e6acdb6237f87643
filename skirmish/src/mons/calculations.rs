use skirmish_data::{
    Nature,
    Stat,
    StatTable,
};

use crate::error::ValidationError;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;
pub const MAX_IV: u16 = 31;
/// Exclusive upper bound of a single EV.
pub const EV_LIMIT: u16 = 252;
pub const MAX_EV_TOTAL: u32 = 510;
pub const MAX_BASE_STAT: u16 = u8::MAX as u16;

/// Calculates maximum HP.
pub fn max_hp(level: u8, base: u16, iv: u16, ev: u16) -> u16 {
    let level = level as u32;
    let value = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level / 100;
    (value + level + 10) as u16
}

/// Calculates a combat stat before the nature is applied.
pub fn raw_stat(level: u8, base: u16, iv: u16, ev: u16) -> f64 {
    (2.0 * base as f64 + iv as f64 + ev as f64 / 4.0) * level as f64 / 100.0 + 5.0
}

/// Calculates all stats for a creature.
///
/// The HP entry of the result is the maximum HP.
pub fn calculate_stats(
    base_stats: &StatTable,
    ivs: &StatTable,
    evs: &StatTable,
    level: u8,
    nature: Nature,
) -> StatTable {
    let mut stats = StatTable::default();
    stats.hp = max_hp(level, base_stats.hp, ivs.hp, evs.hp);
    for stat in Stat::COMBAT {
        let value = raw_stat(level, base_stats.get(stat), ivs.get(stat), evs.get(stat));
        stats.set(stat, (value * nature.modifier(stat)) as u16);
    }
    stats
}

/// Checks the inputs to [`calculate_stats`], recording every problem found.
pub fn validate_stat_inputs(
    base_stats: &StatTable,
    ivs: &StatTable,
    evs: &StatTable,
    level: u8,
    problems: &mut ValidationError,
) {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        problems.add_problem(format!(
            "level {level} is outside [{MIN_LEVEL}, {MAX_LEVEL}]"
        ));
    }
    for (stat, value) in base_stats.entries() {
        if value > MAX_BASE_STAT {
            problems.add_problem(format!(
                "base {stat} {value} is outside [0, {MAX_BASE_STAT}]"
            ));
        }
    }
    for (stat, value) in ivs.entries() {
        if value > MAX_IV {
            problems.add_problem(format!("{stat} IV {value} is outside [0, {MAX_IV}]"));
        }
    }
    for (stat, value) in evs.entries() {
        if value >= EV_LIMIT {
            problems.add_problem(format!("{stat} EV {value} is outside [0, {EV_LIMIT})"));
        }
    }
    let total = evs.sum();
    if total > MAX_EV_TOTAL {
        problems.add_problem(format!(
            "EV total {total} exceeds {MAX_EV_TOTAL}"
        ));
    }
}
