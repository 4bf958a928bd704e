pub mod analysis;
pub mod coil;
pub mod error;
pub mod layout;
pub mod math;

pub use error::{CoilisError, Result};
