//! RNG module - seedable randomness for lane generation
//!
//! Lane terrain, direction and speed are the only stochastic parts of the
//! game. They all draw from a [`RandomSource`] owned by the world, so a fixed
//! seed reproduces the same lane sequence byte-for-byte.
//!
//! [`SimpleRng`] is the default source: a small LCG that is cheap to copy
//! and carries its whole state in one `u32`.

/// A source of uniform random values.
///
/// Only [`RandomSource::next_u32`] is required; the helpers derive from it.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fill an f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// `+1` or `-1` with equal probability.
    fn next_sign(&mut self) -> i8 {
        if self.next_unit() < 0.5 {
            -1
        } else {
            1
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current state; feeding it back into [`SimpleRng::new`] continues the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unit_values_stay_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_sign_produces_both_values() {
        let mut rng = SimpleRng::new(99);
        let mut plus = 0;
        let mut minus = 0;
        for _ in 0..1000 {
            match rng.next_sign() {
                1 => plus += 1,
                -1 => minus += 1,
                other => panic!("unexpected sign {other}"),
            }
        }
        assert!(plus > 100 && minus > 100);
    }

    #[test]
    fn test_state_continues_stream() {
        let mut rng = SimpleRng::new(5);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
