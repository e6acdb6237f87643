extern crate alloc;

mod common;
mod conditions;
mod datastore;
mod mons;
mod moves;

#[cfg(test)]
pub mod test_util;

pub use common::*;
pub use conditions::*;
pub use datastore::*;
pub use mons::*;
pub use moves::*;
