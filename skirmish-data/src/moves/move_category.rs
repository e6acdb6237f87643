use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which selects the stats used for damage.
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
pub enum MoveCategory {
    /// Attack against defense.
    #[string = "Physical"]
    #[default]
    Physical,
    /// Special attack against special defense.
    #[string = "Special"]
    Special,
    /// Deals no damage.
    #[string = "Status"]
    Status,
}
