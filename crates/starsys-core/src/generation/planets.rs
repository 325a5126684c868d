//! Planet creation. Every planet is a gas giant for now.

use crate::components::{Planet, PlanetKind};
use crate::random::RandomSource;

use super::factory::BodyFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetFactory;

impl PlanetFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_planet(&self, name: impl Into<String>) -> Planet {
        Planet::new(name, PlanetKind::GasGiant)
    }
}

impl BodyFactory for PlanetFactory {
    type Body = Planet;

    fn create<R: RandomSource + ?Sized>(&self, name: String, _rng: &mut R) -> Planet {
        self.create_planet(name)
    }
}
