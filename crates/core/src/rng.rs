//! Deterministic RNG for spawn decisions.
//!
//! A simple LCG (constants from Numerical Recipes) keeps the simulation
//! reproducible from a seed: same seed, same spawn schedule. All randomness
//! in the game (delays, lane picks, Bernoulli draws) flows through this.

/// Simple LCG (Linear Congruential Generator) RNG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in range `[lo, hi]` (inclusive).
    pub fn next_range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        lo + self.next_range(hi - lo + 1)
    }

    /// Generate a uniform f32 in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Use the high 24 bits: f32 has a 24-bit significand.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Bernoulli draw with success probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Current internal state, usable as a seed to continue the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn test_next_range_inclusive_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_range_inclusive(400, 2000);
            assert!((400..=2000).contains(&v));
        }
        // Degenerate range returns the single value.
        assert_eq!(rng.next_range_inclusive(9, 9), 9);
    }

    #[test]
    fn test_next_f32_unit_interval() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            assert!(rng.chance(1.1));
            assert!(!rng.chance(0.0));
        }
    }
}
