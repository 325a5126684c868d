//! Starsys Core - Procedural Star System Generation
//!
//! Generates small star systems: one to three stars classified by a weighted
//! stellar table, an optional set of planets, and a pronounceable name from a
//! syllable Markov chain.
//!
//! # Architecture
//!
//! - **Components**: plain data handed to renderers ([`System`], [`Star`], [`Planet`])
//! - **Generation**: [`SyllableChain`], [`StellarClassifier`], [`PlanetFactory`]
//!   and the [`SystemGenerator`] that ties them together
//! - **Random**: every draw goes through [`RandomSource`], so a seeded or
//!   scripted source makes any run reproducible
//!
//! # Example
//!
//! ```rust
//! use starsys_core::prelude::*;
//!
//! let generator = SystemGenerator::new();
//! let system = generator.generate_seeded(42);
//!
//! assert!((1..=3).contains(&system.stars.len()));
//! println!("{}", system);
//! ```
//!
//! [`System`]: components::System
//! [`Star`]: components::Star
//! [`Planet`]: components::Planet
//! [`SyllableChain`]: generation::SyllableChain
//! [`StellarClassifier`]: generation::StellarClassifier
//! [`PlanetFactory`]: generation::PlanetFactory
//! [`SystemGenerator`]: generation::SystemGenerator
//! [`RandomSource`]: random::RandomSource

pub mod components;
pub mod config;
pub mod error;
pub mod generation;
pub mod random;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::GeneratorConfig;
    pub use crate::error::GenerationError;
    pub use crate::generation::{
        BodyFactory, PlanetFactory, StellarClassifier, SyllableChain, SystemGenerator,
    };
    pub use crate::random::{seeded_rng, RandomSource, ScriptedRandom};
}
