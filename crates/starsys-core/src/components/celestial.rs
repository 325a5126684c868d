//! Attributes shared by every renderable body.

use serde::Serialize;

/// Color used when a body type has no color of its own.
pub const DEFAULT_COLOR: &str = "#fff";

/// Name, size and color of a body.
///
/// `size` is a render hint in abstract units. Types without a visual size
/// (neutron stars, black holes, planets for now) use 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Celestial {
    pub name: String,
    pub size: u32,
    pub color: String,
}

impl Celestial {
    pub fn new(name: impl Into<String>, size: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }

    /// Body with no visual size and the default color.
    pub fn pointlike(name: impl Into<String>) -> Self {
        Self::new(name, 0, DEFAULT_COLOR)
    }
}

/// Capability set every body exposes to a renderer.
pub trait Body {
    fn celestial(&self) -> &Celestial;

    /// Human-readable type, e.g. "Main Sequence" or "Gas Giant".
    fn kind_label(&self) -> &'static str;

    fn name(&self) -> &str {
        &self.celestial().name
    }

    fn size(&self) -> u32 {
        self.celestial().size
    }

    fn color(&self) -> &str {
        &self.celestial().color
    }
}
