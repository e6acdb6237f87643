use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Data for a species, shared by every creature of that species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Name of the species.
    pub name: String,
    /// Primary type.
    pub primary_type: Type,
    /// Secondary type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_type: Option<Type>,
    /// Base stats, each expected to fit in a byte.
    pub base_stats: StatTable,
}

impl SpeciesData {
    /// The species' types, primary first.
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary_type).chain(self.secondary_type)
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types().any(|t| t == typ)
    }
}
