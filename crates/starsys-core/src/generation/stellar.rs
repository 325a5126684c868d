//! Stellar classification
//!
//! Two independent draws decide a star: the first picks main sequence (90%)
//! or a remnant, the second picks the spectral class from a cumulative table
//! skewed the way real populations are (M commonest, O rarest), or the
//! remnant type uniformly.

use crate::components::{Star, StarAttributes, StarKind, StellarClass, DEFAULT_COLOR};
use crate::random::{draw_unit, RandomSource};

use super::factory::BodyFactory;

/// Probability that a stellar object is a main-sequence star.
pub const MAIN_SEQUENCE_CHANCE: f64 = 0.90;

pub const WHITE_DWARF_SIZE: u32 = 15;
pub const WHITE_DWARF_COLOR: &str = "#f0f4ff";

/// One row of the class table. A draw below `threshold` (and at or above the
/// previous row's) selects the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassRow {
    pub threshold: f64,
    pub class: StellarClass,
    pub size: u32,
    pub color: &'static str,
}

/// Cumulative thresholds in ascending order; the last row closes `[0, 1)`.
pub static CLASS_TABLE: [ClassRow; 7] = [
    ClassRow {
        threshold: 0.765,
        class: StellarClass::M,
        size: 25,
        color: "#ffb56c",
    },
    ClassRow {
        threshold: 0.886,
        class: StellarClass::K,
        size: 30,
        color: "#ffd2a1",
    },
    ClassRow {
        threshold: 0.962,
        class: StellarClass::G,
        size: 35,
        color: "#fff4ea",
    },
    ClassRow {
        threshold: 0.992,
        class: StellarClass::F,
        size: 40,
        color: "#f8f7ff",
    },
    ClassRow {
        threshold: 0.998,
        class: StellarClass::A,
        size: 45,
        color: "#cad7ff",
    },
    ClassRow {
        threshold: 0.9993,
        class: StellarClass::B,
        size: 50,
        color: "#aabfff",
    },
    ClassRow {
        threshold: 1.0,
        class: StellarClass::O,
        size: 70,
        color: "#9bb0ff",
    },
];

/// Stateless classifier; every call is an independent trial.
#[derive(Debug, Clone, Copy, Default)]
pub struct StellarClassifier;

impl StellarClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify<R: RandomSource + ?Sized>(&self, rng: &mut R) -> StarAttributes {
        if draw_unit(rng) < MAIN_SEQUENCE_CHANCE {
            Self::main_sequence(draw_unit(rng))
        } else {
            let index = rng.next_in_range(0, StarKind::SPECIAL.len() - 1);
            Self::remnant(StarKind::SPECIAL[index])
        }
    }

    /// Look up the main-sequence class for a draw in `[0, 1)`.
    pub fn main_sequence(r: f64) -> StarAttributes {
        let row = CLASS_TABLE
            .iter()
            .find(|row| r < row.threshold)
            .unwrap_or(&CLASS_TABLE[CLASS_TABLE.len() - 1]);

        StarAttributes {
            kind: StarKind::MainSequence,
            class: Some(row.class),
            size: row.size,
            color: row.color,
        }
    }

    /// Attributes for a non-main-sequence object. Only white dwarfs have a
    /// visual size; neutron stars and black holes render as points.
    pub fn remnant(kind: StarKind) -> StarAttributes {
        let (size, color) = match kind {
            StarKind::WhiteDwarf => (WHITE_DWARF_SIZE, WHITE_DWARF_COLOR),
            _ => (0, DEFAULT_COLOR),
        };

        StarAttributes {
            kind,
            class: None,
            size,
            color,
        }
    }
}

impl BodyFactory for StellarClassifier {
    type Body = Star;

    fn create<R: RandomSource + ?Sized>(&self, name: String, rng: &mut R) -> Star {
        Star::new(name, self.classify(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded_rng, ScriptedRandom};

    #[test]
    fn test_low_first_draw_is_main_sequence() {
        let mut rng = ScriptedRandom::new().with_units([0.5, 0.5]);
        let attributes = StellarClassifier::new().classify(&mut rng);

        assert!(attributes.is_main_sequence());
        assert_eq!(attributes.class, Some(StellarClass::M));
        assert_eq!(attributes.size, 25);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_high_first_draw_is_remnant() {
        for (index, kind) in StarKind::SPECIAL.iter().enumerate() {
            let mut rng = ScriptedRandom::new()
                .with_units([0.95])
                .with_integers([index]);
            let attributes = StellarClassifier::new().classify(&mut rng);

            assert!(!attributes.is_main_sequence());
            assert_eq!(attributes.kind, *kind);
            assert_eq!(attributes.class, None);
        }
    }

    #[test]
    fn test_main_sequence_cutoff_is_exclusive() {
        let mut rng = ScriptedRandom::new()
            .with_units([MAIN_SEQUENCE_CHANCE])
            .with_integers([1]);
        let attributes = StellarClassifier::new().classify(&mut rng);

        assert_eq!(attributes.kind, StarKind::WhiteDwarf);
    }

    #[test]
    fn test_class_boundaries() {
        let cases = [
            (0.0, StellarClass::M),
            (0.7649, StellarClass::M),
            (0.765, StellarClass::K),
            (0.886, StellarClass::G),
            (0.962, StellarClass::F),
            (0.992, StellarClass::A),
            (0.998, StellarClass::B),
            (0.9993, StellarClass::O),
            (0.999_999, StellarClass::O),
        ];

        for (r, expected) in cases {
            assert_eq!(
                StellarClassifier::main_sequence(r).class,
                Some(expected),
                "draw {r}"
            );
        }
    }

    #[test]
    fn test_table_partitions_unit_interval() {
        let mut previous = 0.0;
        for row in &CLASS_TABLE {
            assert!(row.threshold > previous, "{:?} out of order", row.class);
            previous = row.threshold;
        }
        assert_eq!(previous, 1.0);

        let classes: Vec<StellarClass> = CLASS_TABLE.iter().map(|row| row.class).collect();
        assert_eq!(classes, StellarClass::ALL);
    }

    #[test]
    fn test_sizes_grow_with_class() {
        for pair in CLASS_TABLE.windows(2) {
            assert!(pair[0].size < pair[1].size);
        }
    }

    #[test]
    fn test_remnant_visuals() {
        let white_dwarf = StellarClassifier::remnant(StarKind::WhiteDwarf);
        assert_eq!(white_dwarf.size, WHITE_DWARF_SIZE);
        assert_eq!(white_dwarf.color, WHITE_DWARF_COLOR);

        for kind in [StarKind::NeutronStar, StarKind::BlackHole] {
            let attributes = StellarClassifier::remnant(kind);
            assert_eq!(attributes.size, 0);
            assert_eq!(attributes.color, DEFAULT_COLOR);
        }
    }

    #[test]
    fn test_main_sequence_rate() {
        let classifier = StellarClassifier::new();
        let mut rng = seeded_rng(42);
        let total = 10_000;

        let main_sequence = (0..total)
            .filter(|_| classifier.classify(&mut rng).is_main_sequence())
            .count();
        let rate = main_sequence as f64 / total as f64;

        assert!((rate - 0.90).abs() < 0.02, "rate={rate}");
    }

    #[test]
    fn test_create_names_star() {
        let mut rng = ScriptedRandom::new().with_units([0.1, 0.9]);
        let star = StellarClassifier::new().create("Tera B".to_string(), &mut rng);

        assert_eq!(star.body.name, "Tera B");
        assert_eq!(star.class, Some(StellarClass::G));
    }
}
