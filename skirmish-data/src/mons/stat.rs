use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat.
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
pub enum Stat {
    #[string = "hp"]
    #[alias = "health_points"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    #[alias = "physical_attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    #[alias = "physical_defense"]
    Def,
    #[string = "spa"]
    #[alias = "Special Attack"]
    #[alias = "special_attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Special Defense"]
    #[alias = "special_defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// All stats, HP first.
    pub const ALL: [Stat; 6] = [
        Self::HP,
        Self::Atk,
        Self::Def,
        Self::SpAtk,
        Self::SpDef,
        Self::Spe,
    ];

    /// The five stats used directly in combat.
    pub const COMBAT: [Stat; 5] = [Self::Atk, Self::Def, Self::SpAtk, Self::SpDef, Self::Spe];
}

/// A value for each of the six stats.
///
/// Used for base stats, individual values, effort values, and derived stats alike. Field aliases
/// accept the long-form keys used by older data files.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default, alias = "health_points")]
    pub hp: u16,
    #[serde(default, alias = "physical_attack")]
    pub atk: u16,
    #[serde(default, alias = "physical_defense")]
    pub def: u16,
    #[serde(default, alias = "special_attack")]
    pub spa: u16,
    #[serde(default, alias = "special_defense")]
    pub spd: u16,
    #[serde(default, alias = "speed")]
    pub spe: u16,
}

impl StatTable {
    /// A table with every stat set to the same value.
    pub fn uniform(value: u16) -> Self {
        Self::from_iter(Stat::ALL.map(|stat| (stat, value)))
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        let slot = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *slot = value;
    }

    /// Iterates over every stat and its value, HP first.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// Sum of all values.
    pub fn sum(&self) -> u32 {
        self.entries().map(|(_, value)| value as u32).sum()
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut table = Self::default();
        for (stat, value) in iter {
            table.set(stat, value);
        }
        table
    }
}
