pub mod config;
pub mod error;
pub mod extract;
pub mod import;
pub mod io;
pub mod layout;
pub mod model;
pub mod progress;
pub mod reference;
pub mod sources;
pub mod verify;

pub use error::{PopulationError, Result};
