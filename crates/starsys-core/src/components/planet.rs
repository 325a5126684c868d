//! Planets orbiting a system's stars.

use std::fmt;

use serde::Serialize;

use super::celestial::{Body, Celestial};

/// Planet type. Only gas giants are generated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlanetKind {
    #[serde(rename = "Gas Giant")]
    GasGiant,
}

impl PlanetKind {
    pub fn label(self) -> &'static str {
        match self {
            PlanetKind::GasGiant => "Gas Giant",
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    #[serde(flatten)]
    pub body: Celestial,
    pub kind: PlanetKind,
    /// Reserved for later; never set by generation.
    pub habitable: bool,
}

impl Planet {
    pub fn new(name: impl Into<String>, kind: PlanetKind) -> Self {
        Self {
            body: Celestial::pointlike(name),
            kind,
            habitable: false,
        }
    }
}

impl Body for Planet {
    fn celestial(&self) -> &Celestial {
        &self.body
    }

    fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.body.name, self.kind)
    }
}
