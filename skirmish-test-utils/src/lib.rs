mod combat;
mod data_store;
mod error_assert;
mod log_assert;
mod player;
mod rng;

pub use combat::{
    controlled_options,
    make_side,
};
pub use data_store::{
    creature_data,
    test_data_store,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_assert::assert_new_logs_eq;
pub use player::ScriptedPlayer;
pub use rng::{
    ControlledRandomNumberGenerator,
    controlled_rng_factory,
    get_controlled_rng,
};
