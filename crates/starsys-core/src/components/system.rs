//! A generated star system: the value handed to renderers.

use std::fmt;

use serde::{Serialize, Serializer};

use super::planet::Planet;
use super::star::{Star, StarKind};

/// Label describing a system's composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemType {
    Unary,
    Binary,
    Trinary,
    /// The system collapsed to a single remnant of this kind.
    Remnant(StarKind),
}

impl SystemType {
    /// Label for a system of `count` ordinary stars.
    pub fn from_star_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(SystemType::Unary),
            2 => Some(SystemType::Binary),
            3 => Some(SystemType::Trinary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SystemType::Unary => "Unary Star System",
            SystemType::Binary => "Binary Star System",
            SystemType::Trinary => "Trinary Star System",
            SystemType::Remnant(kind) => kind.label(),
        }
    }

    pub fn is_remnant(self) -> bool {
        matches!(self, SystemType::Remnant(_))
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SystemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Stars are ordered largest first; planets in naming order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct System {
    pub name: String,
    pub system_type: SystemType,
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
}

impl System {
    /// The largest star, drawn at the privileged position.
    pub fn primary(&self) -> &Star {
        // Generation always produces at least one star.
        &self.stars[0]
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.system_type)?;
        writeln!(f, "Stars in system:")?;
        for star in &self.stars {
            writeln!(f, "  {}", star)?;
        }
        writeln!(f, "Planets in system:")?;
        for planet in &self.planets {
            writeln!(f, "  {}", planet)?;
        }
        Ok(())
    }
}
