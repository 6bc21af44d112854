pub mod config;
pub mod error;
pub mod seed;
pub mod trip;
pub mod validate;

pub use config::Config;
pub use error::*;
pub use trip::*;
pub use validate::{FieldError, ValidationErrors};
