use anyhow::Result;

use crate::{
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all static data.
///
/// This trait can be implemented for different data sources, such as disk or an in-memory fixture.
/// Lookups are by normalized [`Id`].
pub trait DataStore {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets all species IDs.
    fn all_species_ids(&self) -> Result<Vec<Id>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
}
