pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod form;
pub mod interface;
pub mod models;

pub use error::{IntegrityError, Result, TrackerError, ValidationError};
pub use models::{Meal, Photo};
