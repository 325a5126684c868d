//! System generation - names a system, rolls its stars and planets
//!
//! Stars are named after the system with capital suffixes (`Aetra A`,
//! `Aetra B`, ...). If a star that cannot share a system is rolled (a neutron
//! star or black hole) the system is that object alone, renamed `Aetra A*`,
//! and star generation stops. Planets only form around a stellar primary and
//! take lowercase suffixes starting at `b`.

use std::cmp::Reverse;

use log::{debug, trace};

use crate::components::{Planet, Star, System, SystemType};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::random::{seeded_rng, RandomSource};

use super::factory::BodyFactory;
use super::names::SyllableChain;
use super::planets::PlanetFactory;
use super::stellar::StellarClassifier;

/// Outcome of rolling a system's stars.
enum StarRoll {
    /// Every star rolled was stellar.
    Members(Vec<Star>),
    /// A non-stellar object was rolled and replaces the whole system.
    Collapsed(Star),
}

/// Builds complete systems from a name chain and two body factories
#[derive(Debug, Clone)]
pub struct SystemGenerator<S = StellarClassifier, P = PlanetFactory> {
    config: GeneratorConfig,
    names: SyllableChain,
    stars: S,
    planets: P,
}

impl Default for SystemGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemGenerator {
    /// Generator with the standard tables and default config.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            names: SyllableChain::standard(),
            stars: StellarClassifier::new(),
            planets: PlanetFactory::new(),
        }
    }

    pub fn with_config(config: GeneratorConfig) -> Result<Self, GenerationError> {
        Self::with_parts(
            config,
            SyllableChain::standard(),
            StellarClassifier::new(),
            PlanetFactory::new(),
        )
    }
}

impl<S, P> SystemGenerator<S, P>
where
    S: BodyFactory<Body = Star>,
    P: BodyFactory<Body = Planet>,
{
    pub fn with_parts(
        config: GeneratorConfig,
        names: SyllableChain,
        stars: S,
        planets: P,
    ) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            config,
            names,
            stars,
            planets,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a system using the thread-local RNG.
    pub fn generate(&self) -> System {
        let mut rng = rand::thread_rng();
        self.generate_with(&mut rng)
    }

    /// Generate the system reproducibly identified by `seed`.
    pub fn generate_seeded(&self, seed: u64) -> System {
        let mut rng = seeded_rng(seed);
        self.generate_with(&mut rng)
    }

    /// Generate a system from an injected random source.
    pub fn generate_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> System {
        let name = self.names.compose(rng, self.config.name_syllables);
        let star_count = rng.next_in_range(self.config.min_stars, self.config.max_stars);
        trace!("{}: rolling {} star(s)", name, star_count);

        let (mut stars, system_type) = match self.roll_stars(&name, star_count, rng) {
            StarRoll::Members(stars) => (stars, star_count_label(star_count)),
            StarRoll::Collapsed(remnant) => {
                let system_type = SystemType::Remnant(remnant.kind);
                (vec![remnant], system_type)
            }
        };

        // Largest first; equal sizes keep creation order.
        stars.sort_by_key(|star| Reverse(star.body.size));

        let planets = if stars[0].is_stellar() {
            self.roll_planets(&name, rng)
        } else {
            Vec::new()
        };

        System {
            name,
            system_type,
            stars,
            planets,
        }
    }

    fn roll_stars<R: RandomSource + ?Sized>(
        &self,
        name: &str,
        count: usize,
        rng: &mut R,
    ) -> StarRoll {
        let mut members = Vec::with_capacity(count);

        for index in 0..count {
            let mut star = self.stars.create(suffixed(name, b'A', index), rng);

            if !star.is_stellar() {
                debug!(
                    "{}: {} rolled as star {} of {}, discarding {} earlier star(s)",
                    name,
                    star.kind,
                    index + 1,
                    count,
                    members.len()
                );
                star.rename(format!("{} A*", name));
                return StarRoll::Collapsed(star);
            }

            members.push(star);
        }

        StarRoll::Members(members)
    }

    fn roll_planets<R: RandomSource + ?Sized>(&self, name: &str, rng: &mut R) -> Vec<Planet> {
        let count = rng.next_in_range(self.config.min_planets, self.config.max_planets);
        trace!("{}: rolling {} planet(s)", name, count);

        let mut planets = Vec::with_capacity(count);
        for index in 0..count {
            planets.push(self.planets.create(suffixed(name, b'b', index), rng));
        }
        planets
    }
}

fn star_count_label(count: usize) -> SystemType {
    match SystemType::from_star_count(count) {
        Some(system_type) => system_type,
        None => unreachable!("star count {count} outside validated config"),
    }
}

/// `"<name> <letter>"`, where the letter is `first` advanced by `index`.
/// Config limits keep the letter within A..=Z / b..=z.
fn suffixed(name: &str, first: u8, index: usize) -> String {
    format!("{} {}", name, (first + index as u8) as char)
}
