use std::fmt;

use ahash::HashMap;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Electric"]
    Electric,
    #[string = "Grass"]
    Grass,
    #[string = "Ice"]
    Ice,
    #[string = "Fighting"]
    Fighting,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Flying"]
    Flying,
    #[string = "Psychic"]
    Psychic,
    #[string = "Bug"]
    Bug,
    #[string = "Rock"]
    Rock,
    #[string = "Ghost"]
    Ghost,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Steel"]
    Steel,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Every type, in chart order.
    pub const ALL: [Type; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Weak => 0.5,
            Self::Normal => 1.0,
            Self::Strong => 2.0,
        }
    }
}

impl From<f64> for TypeEffectiveness {
    fn from(value: f64) -> Self {
        if value <= 0.0 {
            Self::None
        } else if value <= 0.5 {
            Self::Weak
        } else if value <= 1.0 {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f64(self.multiplier()),
            _ => serializer.serialize_u64(self.multiplier() as u64),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f64(TypeEffectivenessVisitor)
    }
}

/// Attacking type to defending type to effectiveness.
pub type TypeTable = HashMap<Type, HashMap<Type, TypeEffectiveness>>;

/// A type chart, which contains type effectiveness information for every attacking type against
/// every defending type.
///
/// Pairs missing from the chart have normal effectiveness.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable,
}

impl TypeChart {
    /// Creates an empty chart, where every matchup is neutral.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_filled(types: TypeTable) -> Self {
        Self { types }
    }

    /// The conventional eighteen-type chart.
    pub fn standard() -> Self {
        let mut types = TypeTable::default();
        for attack in Type::ALL {
            let (strong, weak, none) = standard_row(attack);
            let row = types.entry(attack).or_default();
            row.extend(strong.iter().map(|t| (*t, TypeEffectiveness::Strong)));
            row.extend(weak.iter().map(|t| (*t, TypeEffectiveness::Weak)));
            row.extend(none.iter().map(|t| (*t, TypeEffectiveness::None)));
        }
        Self { types }
    }

    /// Effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attack: Type, defense: Type) -> TypeEffectiveness {
        self.types
            .get(&attack)
            .and_then(|row| row.get(&defense))
            .copied()
            .unwrap_or_default()
    }

    /// Combined multiplier of an attacking type against all of the defender's types.
    pub fn modifier<I>(&self, attack: Type, defense: I) -> f64
    where
        I: IntoIterator<Item = Type>,
    {
        defense
            .into_iter()
            .map(|defense| self.effectiveness(attack, defense).multiplier())
            .product()
    }
}

type Row = (&'static [Type], &'static [Type], &'static [Type]);

/// Super effective, not very effective, and no effect targets for the attacking type.
fn standard_row(attack: Type) -> Row {
    use Type::*;
    match attack {
        Normal => (&[], &[Rock, Steel], &[Ghost]),
        Fire => (
            &[Grass, Ice, Bug, Steel],
            &[Fire, Water, Rock, Dragon],
            &[],
        ),
        Water => (&[Fire, Ground, Rock], &[Water, Grass, Dragon], &[]),
        Electric => (&[Water, Flying], &[Electric, Grass, Dragon], &[Ground]),
        Grass => (
            &[Water, Ground, Rock],
            &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
            &[],
        ),
        Ice => (
            &[Grass, Ground, Flying, Dragon],
            &[Fire, Water, Ice, Steel],
            &[],
        ),
        Fighting => (
            &[Normal, Ice, Rock, Dark, Steel],
            &[Poison, Flying, Psychic, Bug, Fairy],
            &[Ghost],
        ),
        Poison => (&[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
        Ground => (
            &[Fire, Electric, Poison, Rock, Steel],
            &[Grass, Bug],
            &[Flying],
        ),
        Flying => (&[Grass, Fighting, Bug], &[Electric, Rock, Steel], &[]),
        Psychic => (&[Fighting, Poison], &[Psychic, Steel], &[Dark]),
        Bug => (
            &[Grass, Psychic, Dark],
            &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
            &[],
        ),
        Rock => (
            &[Fire, Ice, Flying, Bug],
            &[Fighting, Ground, Steel],
            &[],
        ),
        Ghost => (&[Psychic, Ghost], &[Dark], &[Normal]),
        Dragon => (&[Dragon], &[Steel], &[Fairy]),
        Dark => (&[Psychic, Ghost], &[Fighting, Dark, Fairy], &[]),
        Steel => (&[Ice, Rock, Fairy], &[Fire, Water, Electric, Steel], &[]),
        Fairy => (
            &[Fighting, Dragon, Dark],
            &[Fire, Poison, Steel],
            &[],
        ),
    }
}
