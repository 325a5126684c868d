//! Generation - procedural creation of names, stars, planets and systems.

mod factory;
mod names;
mod planets;
mod stellar;
mod system;

pub use factory::*;
pub use names::*;
pub use planets::*;
pub use stellar::*;
pub use system::*;
