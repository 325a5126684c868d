//! Name generation utilities
//!
//! Names are built from syllables by walking a weighted Markov chain: the
//! first syllable is uniform over the vocabulary, each later one is drawn from
//! the transitions of the syllable before it.

use crate::error::GenerationError;
use crate::random::{draw_unit, RandomSource};

/// Tolerance when checking that a syllable's transition weights sum to one.
const WEIGHT_TOLERANCE: f64 = 1e-6;

static SYLLABLES: &[&str] = &["a", "ae", "ar", "mis", "ra", "te", "tra"];

static TRANSITIONS: &[(&str, &[(&str, f64)])] = &[
    ("a", &[("a", 0.2), ("tra", 0.8)]),
    ("ae", &[("ra", 0.2), ("mis", 0.8)]),
    ("ar", &[("te", 0.7), ("a", 0.3)]),
    ("mis", &[("te", 0.4), ("tra", 0.6)]),
    ("ra", &[("mis", 0.7), ("te", 0.3)]),
    ("te", &[("ra", 0.5), ("mis", 0.5)]),
    ("tra", &[("a", 0.4), ("te", 0.6)]),
];

#[derive(Debug, Clone, PartialEq)]
struct Transition {
    next: usize,
    cumulative: f64,
}

/// Weighted syllable chain used to produce pronounceable names
#[derive(Debug, Clone, PartialEq)]
pub struct SyllableChain {
    syllables: Vec<String>,
    /// Outgoing transitions per syllable, same indexing as `syllables`.
    transitions: Vec<Vec<Transition>>,
}

impl Default for SyllableChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl SyllableChain {
    /// The built-in vocabulary: a, ae, ar, mis, ra, te, tra.
    pub fn standard() -> Self {
        Self::assemble(SYLLABLES, TRANSITIONS)
    }

    /// Build a chain from a vocabulary and per-syllable `(next, weight)` lists.
    ///
    /// Every syllable's weights must be finite, non-negative and sum to 1.0,
    /// each syllable may be listed once, and every target must be in the
    /// vocabulary. Syllables may be left without transitions; a name that
    /// reaches one repeats it.
    pub fn new(
        syllables: &[&str],
        transitions: &[(&str, &[(&str, f64)])],
    ) -> Result<Self, GenerationError> {
        if syllables.is_empty() {
            return Err(GenerationError::InvalidTable(
                "vocabulary is empty".to_string(),
            ));
        }

        for (i, (from, edges)) in transitions.iter().enumerate() {
            if !syllables.contains(from) {
                return Err(GenerationError::InvalidTable(format!(
                    "transitions given for unknown syllable '{}'",
                    from
                )));
            }
            if transitions[..i].iter().any(|(earlier, _)| earlier == from) {
                return Err(GenerationError::InvalidTable(format!(
                    "transitions for '{}' given more than once",
                    from
                )));
            }
            if let Some((to, _)) = edges.iter().find(|(to, _)| !syllables.contains(to)) {
                return Err(GenerationError::InvalidTable(format!(
                    "'{}' transitions to unknown syllable '{}'",
                    from, to
                )));
            }
            if edges
                .iter()
                .any(|(_, weight)| !weight.is_finite() || *weight < 0.0)
            {
                return Err(GenerationError::InvalidTable(format!(
                    "'{}' has a negative or non-finite transition weight",
                    from
                )));
            }
            let total: f64 = edges.iter().map(|(_, weight)| weight).sum();
            if !edges.is_empty() && (total - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(GenerationError::InvalidTable(format!(
                    "weights for '{}' sum to {}, expected 1.0",
                    from, total
                )));
            }
        }

        Ok(Self::assemble(syllables, transitions))
    }

    fn assemble(syllables: &[&str], table: &[(&str, &[(&str, f64)])]) -> Self {
        let index_of = |syllable: &str| syllables.iter().position(|s| *s == syllable);

        let transitions: Vec<Vec<Transition>> = syllables
            .iter()
            .map(|syllable| {
                let edges = table
                    .iter()
                    .find(|(from, _)| from == syllable)
                    .map(|(_, edges)| *edges)
                    .unwrap_or(&[]);

                let mut cumulative = 0.0;
                edges
                    .iter()
                    .filter_map(|(to, weight)| {
                        cumulative += weight;
                        index_of(*to).map(|next| Transition { next, cumulative })
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            syllables: syllables.iter().map(|s| s.to_string()).collect(),
            transitions,
        }
    }

    /// The vocabulary, in table order.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.syllables.iter().map(String::as_str)
    }

    /// Generate a name of exactly `syllable_count` syllables, capitalized.
    pub fn generate_name<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        syllable_count: usize,
    ) -> Result<String, GenerationError> {
        if syllable_count < 1 {
            return Err(GenerationError::InvalidArgument(
                "syllable count must be at least 1".to_string(),
            ));
        }
        Ok(self.compose(rng, syllable_count))
    }

    /// Callers guarantee `syllable_count >= 1`.
    pub(crate) fn compose<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        syllable_count: usize,
    ) -> String {
        let mut current = rng.next_in_range(0, self.syllables.len() - 1);
        let mut name = self.syllables[current].clone();

        for _ in 1..syllable_count {
            current = self.next_syllable(current, rng);
            name.push_str(&self.syllables[current]);
        }

        capitalize(&name)
    }

    /// First transition whose cumulative weight reaches the draw wins. With no
    /// match (dead end, or rounding just short of 1.0) the syllable repeats.
    fn next_syllable<R: RandomSource + ?Sized>(&self, current: usize, rng: &mut R) -> usize {
        let r = draw_unit(rng);
        self.transitions[current]
            .iter()
            .find(|t| r <= t.cumulative)
            .map(|t| t.next)
            .unwrap_or(current)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
