//! Randomness seam.
//!
//! The simulation never touches a global RNG; every call that needs
//! randomness takes a `&mut impl RandomSource`.  `RngSource` adapts any
//! `rand::Rng`, and tests substitute scripted sources for exact outcomes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform float in `[min, max]`.
    fn float_between(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in `[min, max]`, both ends inclusive.
    fn int_between(&mut self, min: i32, max: i32) -> i32;

    /// Shuffle `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn float_between(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    fn int_between(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}
