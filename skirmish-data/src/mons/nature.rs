use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The nature of a creature, which raises one combat stat by 10% and lowers another by 10%.
///
/// Natures that raise and lower the same stat are neutral.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    #[default]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Brave"]
    Brave,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Serious"]
    Serious,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Quiet"]
    Quiet,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Sassy"]
    Sassy,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
}

impl Nature {
    const DELTA: f64 = 0.1;

    /// The raised and lowered stat, in that order.
    fn stat_pair(&self) -> (Stat, Stat) {
        match self {
            Self::Hardy => (Stat::Atk, Stat::Atk),
            Self::Lonely => (Stat::Atk, Stat::Def),
            Self::Brave => (Stat::Atk, Stat::Spe),
            Self::Adamant => (Stat::Atk, Stat::SpAtk),
            Self::Naughty => (Stat::Atk, Stat::SpDef),
            Self::Bold => (Stat::Def, Stat::Atk),
            Self::Docile => (Stat::Def, Stat::Def),
            Self::Relaxed => (Stat::Def, Stat::Spe),
            Self::Impish => (Stat::Def, Stat::SpAtk),
            Self::Lax => (Stat::Def, Stat::SpDef),
            Self::Timid => (Stat::Spe, Stat::Atk),
            Self::Hasty => (Stat::Spe, Stat::Def),
            Self::Serious => (Stat::Spe, Stat::Spe),
            Self::Jolly => (Stat::Spe, Stat::SpAtk),
            Self::Naive => (Stat::Spe, Stat::SpDef),
            Self::Modest => (Stat::SpAtk, Stat::Atk),
            Self::Mild => (Stat::SpAtk, Stat::Def),
            Self::Quiet => (Stat::SpAtk, Stat::Spe),
            Self::Bashful => (Stat::SpAtk, Stat::SpAtk),
            Self::Rash => (Stat::SpAtk, Stat::SpDef),
            Self::Calm => (Stat::SpDef, Stat::Atk),
            Self::Gentle => (Stat::SpDef, Stat::Def),
            Self::Sassy => (Stat::SpDef, Stat::Spe),
            Self::Careful => (Stat::SpDef, Stat::SpAtk),
            Self::Quirky => (Stat::SpDef, Stat::SpDef),
        }
    }

    /// The stat raised by the nature.
    pub fn boosts(&self) -> Stat {
        self.stat_pair().0
    }

    /// The stat lowered by the nature.
    pub fn drops(&self) -> Stat {
        self.stat_pair().1
    }

    pub fn is_neutral(&self) -> bool {
        self.boosts() == self.drops()
    }

    /// The signed fractional adjustment applied to the given stat.
    pub fn delta(&self, stat: Stat) -> f64 {
        if self.is_neutral() {
            0.0
        } else if stat == self.boosts() {
            Self::DELTA
        } else if stat == self.drops() {
            -Self::DELTA
        } else {
            0.0
        }
    }

    /// Multiplier applied to the given stat.
    pub fn modifier(&self, stat: Stat) -> f64 {
        1.0 + self.delta(stat)
    }
}
