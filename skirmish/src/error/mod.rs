mod error;
mod skirmish_error;
mod validation_error;

pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use skirmish_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use validation_error::ValidationError;
