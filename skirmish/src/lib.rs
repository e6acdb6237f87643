pub mod battle;
pub mod dex;
pub mod error;
pub mod log;
pub mod mons;
pub mod rng;

pub use skirmish_data as data;
