use std::{
    fmt,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
};
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::Visitor,
};

use crate::{
    Boost,
    Status,
};

/// An amount of HP restored by an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealAmount {
    /// Percentage of a reference value (max HP for heals, damage dealt for drains).
    Percent(u16),
    /// Fixed number of HP.
    Flat(u16),
}

impl HealAmount {
    /// Resolves the amount against a reference value.
    pub fn resolve(&self, reference: u16) -> u16 {
        match self {
            Self::Percent(percent) => {
                let amount = reference as u32 * *percent as u32 / 100;
                amount.min(u16::MAX as u32) as u16
            }
            Self::Flat(amount) => *amount,
        }
    }
}

/// A single effect attached to a move.
///
/// Effects are written as short tags in move data:
///
/// - `BRN`, `PAR`, `SLP`, ...: inflicts a status.
/// - `P_ATK:-1`, `SPD:2`, `CRIT:1`, ...: changes a stat stage.
/// - `HEAL:%:50`, `HEAL:FLAT:20`: restores HP.
/// - `LIFESTEAL:%:50`, `LIFESTEAL:FLAT:10`: restores the user's HP after dealing damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    Status(Status),
    Boost { boost: Boost, amount: i8 },
    Heal(HealAmount),
    Drain(HealAmount),
}

const HEAL: &str = "HEAL";
const LIFESTEAL: &str = "LIFESTEAL";
const PERCENT: &str = "%";
const FLAT: &str = "FLAT";

fn boost_tag(boost: Boost) -> &'static str {
    match boost {
        Boost::Atk => "P_ATK",
        Boost::Def => "P_DEF",
        Boost::SpAtk => "S_ATK",
        Boost::SpDef => "S_DEF",
        Boost::Spe => "SPD",
        Boost::Accuracy => "ACC",
        Boost::Evasion => "EVA",
        Boost::Crit => "CRIT",
    }
}

fn parse_heal_amount(kind: &str, amount: &str) -> Result<HealAmount, Error> {
    let amount = amount
        .parse::<u16>()
        .context(format!("invalid heal amount \"{amount}\""))?;
    if kind == PERCENT {
        Ok(HealAmount::Percent(amount))
    } else if kind.eq_ignore_ascii_case(FLAT) {
        Ok(HealAmount::Flat(amount))
    } else {
        Err(Error::msg(format!("unknown heal kind \"{kind}\"")))
    }
}

impl FromStr for MoveEffect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').map(str::trim).collect::<Vec<_>>();
        match parts.as_slice() {
            [status] => Status::from_str(status)
                .map(Self::Status)
                .map_err(|_| Error::msg(format!("unknown status \"{status}\""))),
            [boost, amount] => {
                let boost = Boost::from_str(boost)
                    .map_err(|_| Error::msg(format!("unknown stat \"{boost}\"")))?;
                let amount = amount
                    .parse::<i8>()
                    .context(format!("invalid stage amount \"{amount}\""))?;
                Ok(Self::Boost { boost, amount })
            }
            [effect, kind, amount] if effect.eq_ignore_ascii_case(HEAL) => {
                parse_heal_amount(kind, amount).map(Self::Heal)
            }
            [effect, kind, amount] if effect.eq_ignore_ascii_case(LIFESTEAL) => {
                parse_heal_amount(kind, amount).map(Self::Drain)
            }
            _ => Err(Error::msg(format!("malformed effect \"{s}\""))),
        }
        .context(format!("failed to parse effect \"{s}\""))
    }
}

impl fmt::Display for MoveEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = |amount: &HealAmount| match amount {
            HealAmount::Percent(n) => format!("{PERCENT}:{n}"),
            HealAmount::Flat(n) => format!("{FLAT}:{n}"),
        };
        match self {
            Self::Status(status) => write!(f, "{}", status.to_string().to_uppercase()),
            Self::Boost { boost, amount } => write!(f, "{}:{amount}", boost_tag(*boost)),
            Self::Heal(heal) => write!(f, "{HEAL}:{}", amount(heal)),
            Self::Drain(heal) => write!(f, "{LIFESTEAL}:{}", amount(heal)),
        }
    }
}

impl Serialize for MoveEffect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct MoveEffectVisitor;

impl<'de> Visitor<'de> for MoveEffectVisitor {
    type Value = MoveEffect;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an effect tag")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        MoveEffect::from_str(v).map_err(|err| E::custom(format!("{err:#}")))
    }
}

impl<'de> Deserialize<'de> for MoveEffect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(MoveEffectVisitor)
    }
}
