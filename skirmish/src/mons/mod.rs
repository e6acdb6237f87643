mod calculations;
mod creature;

pub use calculations::{
    EV_LIMIT,
    MAX_BASE_STAT,
    MAX_EV_TOTAL,
    MAX_IV,
    MAX_LEVEL,
    MIN_LEVEL,
    calculate_stats,
    max_hp,
    raw_stat,
    validate_stat_inputs,
};
pub use creature::{
    Creature,
    CreatureData,
    MAX_MOVES,
    MoveSlot,
    StatusDuration,
    random_evs,
    random_ivs,
};
