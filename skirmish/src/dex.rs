use anyhow::Result;
use skirmish_data::{
    DataStore,
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

use crate::error::{
    WrapOptionError,
    WrapResultError,
};

/// Read-only repository of species and moves, looked up by name.
///
/// Backed by any [`DataStore`], and passed by reference to whatever builds creatures.
#[derive(Clone, Copy)]
pub struct Dex<'d> {
    data: &'d dyn DataStore,
}

impl<'d> Dex<'d> {
    /// Creates a new [`Dex`], backed by the given [`DataStore`].
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self { data }
    }

    /// Looks up a species by name.
    pub fn species(&self, name: &str) -> Result<SpeciesData> {
        self.data
            .get_species(&Id::from(name))
            .wrap_error_with_format(format_args!("failed to look up species {name}"))?
            .wrap_not_found_error(format_args!("species {name}"))
    }

    /// Looks up a move by name.
    pub fn move_data(&self, name: &str) -> Result<MoveData> {
        self.data
            .get_move(&Id::from(name))
            .wrap_error_with_format(format_args!("failed to look up move {name}"))?
            .wrap_not_found_error(format_args!("move {name}"))
    }

    pub fn type_chart(&self) -> Result<TypeChart> {
        self.data.get_type_chart()
    }

    /// IDs of every species in the repository.
    pub fn all_species(&self) -> Result<Vec<Id>> {
        self.data.all_species_ids()
    }
}
