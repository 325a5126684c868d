//! Stars and stellar remnants.

use std::fmt;

use serde::Serialize;

use super::celestial::{Body, Celestial};

/// Physical type of a stellar object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarKind {
    #[serde(rename = "Main Sequence")]
    MainSequence,
    #[serde(rename = "Neutron Star")]
    NeutronStar,
    #[serde(rename = "White Dwarf")]
    WhiteDwarf,
    #[serde(rename = "Black Hole")]
    BlackHole,
}

impl StarKind {
    /// Remnants that can replace an ordinary star, in draw order.
    pub const SPECIAL: [StarKind; 3] = [
        StarKind::NeutronStar,
        StarKind::WhiteDwarf,
        StarKind::BlackHole,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StarKind::MainSequence => "Main Sequence",
            StarKind::NeutronStar => "Neutron Star",
            StarKind::WhiteDwarf => "White Dwarf",
            StarKind::BlackHole => "Black Hole",
        }
    }

    pub fn is_special(self) -> bool {
        Self::SPECIAL.contains(&self)
    }

    /// Whether this object behaves as an ordinary star when composing a system.
    /// White dwarfs do; neutron stars and black holes do not.
    pub fn is_stellar(self) -> bool {
        matches!(self, StarKind::MainSequence | StarKind::WhiteDwarf)
    }
}

impl fmt::Display for StarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Main-sequence spectral class, commonest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StellarClass {
    M,
    K,
    G,
    F,
    A,
    B,
    O,
}

impl StellarClass {
    pub const ALL: [StellarClass; 7] = [
        StellarClass::M,
        StellarClass::K,
        StellarClass::G,
        StellarClass::F,
        StellarClass::A,
        StellarClass::B,
        StellarClass::O,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StellarClass::M => "M",
            StellarClass::K => "K",
            StellarClass::G => "G",
            StellarClass::F => "F",
            StellarClass::A => "A",
            StellarClass::B => "B",
            StellarClass::O => "O",
        }
    }
}

impl fmt::Display for StellarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one stellar object, before it is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarAttributes {
    pub kind: StarKind,
    /// Present only for main-sequence stars.
    pub class: Option<StellarClass>,
    pub size: u32,
    pub color: &'static str,
}

impl StarAttributes {
    pub fn is_main_sequence(&self) -> bool {
        self.kind == StarKind::MainSequence
    }
}

/// A star (or remnant) belonging to a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Star {
    #[serde(flatten)]
    pub body: Celestial,
    pub kind: StarKind,
    pub class: Option<StellarClass>,
}

impl Star {
    pub fn new(name: impl Into<String>, attributes: StarAttributes) -> Self {
        Self {
            body: Celestial::new(name, attributes.size, attributes.color),
            kind: attributes.kind,
            class: attributes.class,
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.body.name = name.into();
    }

    pub fn stellar_class(&self) -> Option<StellarClass> {
        self.class
    }

    pub fn is_main_sequence(&self) -> bool {
        self.kind == StarKind::MainSequence
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    pub fn is_stellar(&self) -> bool {
        self.kind.is_stellar()
    }
}

impl Body for Star {
    fn celestial(&self) -> &Celestial {
        &self.body
    }

    fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Formats as `name: kind`, plus ` (class)` for main-sequence stars.
impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.body.name, self.kind)?;
        if let Some(class) = self.class {
            write!(f, " ({})", class)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(kind: StarKind) -> StarAttributes {
        StarAttributes {
            kind,
            class: None,
            size: 0,
            color: "#fff",
        }
    }

    #[test]
    fn test_special_and_stellar_flags() {
        assert!(!StarKind::MainSequence.is_special());
        assert!(StarKind::MainSequence.is_stellar());

        assert!(StarKind::WhiteDwarf.is_special());
        assert!(StarKind::WhiteDwarf.is_stellar());

        assert!(StarKind::NeutronStar.is_special());
        assert!(!StarKind::NeutronStar.is_stellar());

        assert!(StarKind::BlackHole.is_special());
        assert!(!StarKind::BlackHole.is_stellar());
    }

    #[test]
    fn test_display_main_sequence_includes_class() {
        let star = Star::new(
            "Aetra A",
            StarAttributes {
                kind: StarKind::MainSequence,
                class: Some(StellarClass::G),
                size: 35,
                color: "#fff4ea",
            },
        );
        assert_eq!(star.to_string(), "Aetra A: Main Sequence (G)");
    }

    #[test]
    fn test_display_remnant_has_no_class() {
        let star = Star::new("Aetra A*", attributes(StarKind::BlackHole));
        assert_eq!(star.to_string(), "Aetra A*: Black Hole");
    }

    #[test]
    fn test_rename_keeps_kind() {
        let mut star = Star::new("Ra A", attributes(StarKind::NeutronStar));
        star.rename("Ra A*");

        assert_eq!(star.name(), "Ra A*");
        assert_eq!(star.kind_label(), "Neutron Star");
        assert_eq!(star.size(), 0);
    }

    #[test]
    fn test_kind_serializes_as_label() {
        let json = serde_json::to_string(&StarKind::WhiteDwarf).unwrap();
        assert_eq!(json, "\"White Dwarf\"");
    }
}
