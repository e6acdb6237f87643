use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A battle-scoped stat stage that moves can raise or lower.
///
/// Stages are lost when the creature leaves the field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Boost {
    #[string = "atk"]
    #[alias = "P_ATK"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "P_DEF"]
    #[alias = "Defense"]
    Def,
    #[string = "spatk"]
    #[alias = "S_ATK"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spdef"]
    #[alias = "S_DEF"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "SPD"]
    #[alias = "Speed"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "Evasion"]
    Evasion,
    #[string = "crit"]
    #[alias = "Critical"]
    Crit,
}

impl Boost {
    pub const MAX_STAGE: i8 = 6;

    /// Inclusive bounds of the stage.
    pub fn bounds(&self) -> (i8, i8) {
        match self {
            Self::Crit => (0, Self::MAX_STAGE),
            _ => (-Self::MAX_STAGE, Self::MAX_STAGE),
        }
    }

    /// Clamps a stage value into the bounds of this boost.
    pub fn clamp(&self, stage: i32) -> i8 {
        let (min, max) = self.bounds();
        stage.clamp(min as i32, max as i32) as i8
    }
}

/// The stage of every boostable stat.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
    #[serde(default)]
    pub crit: i8,
}

impl BoostTable {
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
            Boost::Crit => self.crit,
        }
    }

    fn get_mut(&mut self, boost: Boost) -> &mut i8 {
        match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
            Boost::Crit => &mut self.crit,
        }
    }

    /// Sets the stage, clamped to the boost's bounds.
    pub fn set(&mut self, boost: Boost, value: i8) {
        *self.get_mut(boost) = boost.clamp(value as i32);
    }

    /// Adjusts the stage by `delta`, clamping the result.
    ///
    /// Returns the change that actually took place.
    pub fn apply(&mut self, boost: Boost, delta: i8) -> i8 {
        let slot = self.get_mut(boost);
        let before = *slot;
        *slot = boost.clamp(before as i32 + delta as i32);
        *slot - before
    }

    /// Returns every stage to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
