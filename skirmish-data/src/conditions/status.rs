use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status condition.
///
/// A creature has at most one at a time, and it persists across switches until cured.
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
pub enum Status {
    #[string = "brn"]
    #[alias = "Burn"]
    #[alias = "Burned"]
    Burn,
    #[string = "frz"]
    #[alias = "Freeze"]
    #[alias = "Frozen"]
    Freeze,
    #[string = "par"]
    #[alias = "Paralysis"]
    #[alias = "Paralyzed"]
    Paralysis,
    #[string = "psn"]
    #[alias = "Poison"]
    #[alias = "Poisoned"]
    Poison,
    #[string = "bpsn"]
    #[alias = "tox"]
    #[alias = "Bad Poison"]
    #[alias = "Bad_Poison"]
    #[alias = "Badly Poisoned"]
    BadPoison,
    #[string = "slp"]
    #[alias = "Sleep"]
    #[alias = "Sleeping"]
    #[alias = "Asleep"]
    Sleep,
}
