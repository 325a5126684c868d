//! Capability shared by everything that turns a name into a body.

use crate::random::RandomSource;

/// Creates one named body per call.
///
/// [`SystemGenerator`](super::SystemGenerator) is generic over a star factory
/// and a planet factory, so either can be swapped without touching it.
pub trait BodyFactory {
    type Body;

    fn create<R: RandomSource + ?Sized>(&self, name: String, rng: &mut R) -> Self::Body;
}
