mod calculations;
mod combat_manager;
mod combat_options;
mod effects;
mod participant;
mod player;
mod side;
mod speed_order;
mod status;

pub use calculations::{
    CRIT_MODIFIER,
    Damage,
    MAX_CRIT_STAGE,
    MAX_DAMAGE_ROLL,
    MIN_DAMAGE_ROLL,
    STAB_MODIFIER,
    accuracy_modifier,
    base_damage,
    calculate_damage,
    crit_chance,
    crit_stage,
    damage_roll,
    does_crit,
    does_hit,
    effective_stat,
    hit_chance,
    stage_modifier,
};
pub use combat_manager::{
    CombatManager,
    PARALYSIS_BLOCK_CHANCE,
};
pub use combat_options::{
    CombatEngineOptions,
    CombatOptions,
    RandomizeBaseDamage,
};
pub use effects::apply_effect;
pub use participant::{
    Participant,
    ParticipantContext,
    ParticipantView,
};
pub use player::Player;
pub use side::Side;
pub use speed_order::{
    PARALYSIS_SPEED_MODIFIER,
    SpeedOrderable,
    compare_priority,
    effective_speed,
};
pub use status::{
    FREEZE_THAW_CHANCE,
    ResidualOutcome,
    apply_residual,
    inflict_status,
    residual_damage,
};
