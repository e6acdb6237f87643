mod accuracy;
mod boost;
mod move_category;
mod move_data;
mod move_effect;

pub use accuracy::Accuracy;
pub use boost::{
    Boost,
    BoostTable,
};
pub use move_category::MoveCategory;
pub use move_data::MoveData;
pub use move_effect::{
    HealAmount,
    MoveEffect,
};
