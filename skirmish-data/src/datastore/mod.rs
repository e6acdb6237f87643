mod data_store;
mod local;

pub use data_store::DataStore;
pub use local::LocalDataStore;
