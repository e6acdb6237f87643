use serde::{
    Deserialize,
    Serialize,
};
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// How the random roll in the damage calculation is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeBaseDamage {
    /// Draw the roll from the generator.
    #[default]
    Randomize,
    /// Always use the maximum roll, without a draw.
    Max,
    /// Always use the minimum roll, without a draw.
    Min,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_true() -> bool {
    true
}

/// Options that change how the combat engine itself behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEngineOptions {
    /// Function for creating the random number generator.
    ///
    /// Primarily useful for tests that need fine-grained control over every random draw.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// How the random roll in the damage calculation is chosen.
    ///
    /// Pinning the roll is useful for discovering the minimum and maximum damage of a move.
    #[serde(default)]
    pub randomize_base_damage: RandomizeBaseDamage,

    /// Should paralysis halve effective speed when ordering actions?
    #[serde(default = "default_true")]
    pub paralysis_speed_penalty: bool,

    /// Should events be recorded in the event log?
    #[serde(default = "default_true")]
    pub record_events: bool,
}

impl Default for CombatEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory(),
            randomize_base_damage: RandomizeBaseDamage::default(),
            paralysis_speed_penalty: true,
            record_events: true,
        }
    }
}

/// Options for a single match.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CombatOptions {
    /// Seed for the random number generator. A random seed is used if absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub engine: CombatEngineOptions,
}
