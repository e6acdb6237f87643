use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// An implementation of [`DataStore`] that holds all data in memory.
///
/// Can be filled programmatically or read from a directory laid out as:
///
/// ```text
/// root/
///   type-chart.json   (optional, the standard chart is used otherwise)
///   species/*.json    (one species per file)
///   moves/*.json      (one move per file)
/// ```
#[derive(Debug, Default, Clone)]
pub struct LocalDataStore {
    pub type_chart: TypeChart,
    pub species: HashMap<Id, SpeciesData>,
    pub moves: HashMap<Id, MoveData>,
}

impl LocalDataStore {
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Species directory name.
    pub const SPECIES_DIR: &str = "species";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";

    /// Creates an empty data store using the standard type chart.
    pub fn new() -> Self {
        Self {
            type_chart: TypeChart::standard(),
            ..Default::default()
        }
    }

    /// Reads all data from the given root directory.
    ///
    /// Fails if the path is not a directory or if any file cannot be parsed.
    pub fn from_dir<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self::new();
        let type_chart = root.join(Self::TYPE_CHART_FILE);
        if type_chart.is_file() {
            store.type_chart = read_json(&type_chart).context("failed to read type chart")?;
        }
        for species in read_all_files_in_directory::<SpeciesData>(&root.join(Self::SPECIES_DIR))? {
            store.add_species(species);
        }
        for data in read_all_files_in_directory::<MoveData>(&root.join(Self::MOVES_DIR))? {
            store.add_move(data);
        }
        Ok(store)
    }

    /// Reads all data from the root directory named by the given environment variable.
    pub fn from_env(env_var: &str) -> Result<Self> {
        Self::from_dir(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Adds a species, keyed by its name.
    pub fn add_species(&mut self, species: SpeciesData) {
        self.species.insert(Id::from(species.name.as_str()), species);
    }

    /// Adds a move, keyed by its name.
    pub fn add_move(&mut self, data: MoveData) {
        self.moves.insert(Id::from(data.name.as_str()), data);
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let path_name = path.display().to_string();
    serde_json::from_reader(File::open(path).context(format!("{path_name} could not be opened"))?)
        .context(format!("failed to parse {path_name}"))
}

fn read_all_files_in_directory<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = dir
        .read_dir()
        .context(format!("failed to read {} directory", dir.display()))?
        .filter_map(|entry| Some(entry.ok()?.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<PathBuf>>();
    paths.sort();
    paths.iter().map(|path| read_json(path)).collect()
}

impl DataStore for LocalDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn all_species_ids(&self) -> Result<Vec<Id>> {
        let mut ids = self.species.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        Ok(ids)
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }
}
