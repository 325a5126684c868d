//! Data model for generated systems.
//!
//! Plain data with no generation logic; that lives in [`crate::generation`].

mod celestial;
mod planet;
mod star;
mod system;

pub use celestial::*;
pub use planet::*;
pub use star::*;
pub use system::*;
