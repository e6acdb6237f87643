pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A source of pseudo-random numbers for combat.
///
/// Every random decision in a round (accuracy, critical hits, damage rolls, status durations) is
/// drawn from a single generator, so a match can be replayed exactly from its initial seed.
pub trait PseudoRandomNumberGenerator {
    /// The seed the generator started from.
    fn initial_seed(&self) -> u64;

    /// Advances the generator and returns the next value in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`], for downcasting in tests.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Linear congruential implementation of [`PseudoRandomNumberGenerator`].
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    state: u64,
}

impl RealPseudoRandomNumberGenerator {
    const MULTIPLIER: u64 = 0x5D588B656C078965;
    const INCREMENT: u64 = 0x0000000000269EC3;

    /// Creates a new generator.
    ///
    /// Without a seed, one is generated from the thread-local entropy source. Two generators
    /// created from the same seed produce identical sequences.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed: seed,
            state: seed,
        }
    }

    fn advance(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.state = Self::advance(self.state);
        // The low bits of an LCG have short periods.
        self.state >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
