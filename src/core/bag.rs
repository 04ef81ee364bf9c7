//! Piece generation - the 7-bag anti-repeat policy.
//!
//! Each refill cycle holds one of each of the seven shapes; draws remove a
//! uniformly random entry until the bag is empty, then it refills. Over any
//! seven draws from a fresh bag every shape appears exactly once, and no two
//! occurrences of a shape are ever separated by more than twelve draws.
//!
//! Randomness comes from a small seedable LCG so sessions are reproducible.

use arrayvec::ArrayVec;

use crate::types::{Shape, ALL_SHAPES};

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a uniform float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator state: the remaining shapes of the current cycle
#[derive(Debug, Clone, Default)]
pub struct SevenBag {
    remaining: ArrayVec<Shape, 7>,
}

impl SevenBag {
    /// Create an empty bag; the first draw triggers a refill
    pub fn new() -> Self {
        Self {
            remaining: ArrayVec::new(),
        }
    }

    /// Shapes left in the current cycle
    pub fn remaining(&self) -> &[Shape] {
        &self.remaining
    }

    /// Draw the next shape, refilling with all seven first if empty
    pub fn next(&mut self, rng: &mut SimpleRng) -> Shape {
        if self.remaining.is_empty() {
            self.remaining = ArrayVec::from(ALL_SHAPES);
        }
        let index = rng.next_range(self.remaining.len() as u32) as usize;
        self.remaining.swap_remove(index)
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
    fn test_rng_zero_seed_still_advances() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn test_rng_f32_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_bag_cycle_has_each_shape_once() {
        let mut rng = SimpleRng::new(42);
        let mut bag = SevenBag::new();

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(bag.next(&mut rng));
        }

        for shape in ALL_SHAPES {
            assert_eq!(
                drawn.iter().filter(|&&s| s == shape).count(),
                1,
                "shape {:?} should appear exactly once",
                shape
            );
        }
        assert!(bag.remaining().is_empty());
    }

    #[test]
    fn test_bag_refills_on_eighth_draw() {
        let mut rng = SimpleRng::new(42);
        let mut bag = SevenBag::new();

        for _ in 0..7 {
            bag.next(&mut rng);
        }
        assert!(bag.remaining().is_empty());

        bag.next(&mut rng);
        assert_eq!(bag.remaining().len(), 6);
    }

    #[test]
    fn test_bag_separation_bound() {
        // No shape is ever separated from its bag-sibling by more than 12
        // draws (last of one cycle, first occurrence late in the next).
        let mut rng = SimpleRng::new(99);
        let mut bag = SevenBag::new();

        let draws: Vec<Shape> = (0..700).map(|_| bag.next(&mut rng)).collect();
        for shape in ALL_SHAPES {
            let positions: Vec<usize> = draws
                .iter()
                .enumerate()
                .filter(|(_, &s)| s == shape)
                .map(|(i, _)| i)
                .collect();
            for pair in positions.windows(2) {
                assert!(
                    pair[1] - pair[0] <= 13,
                    "shape {:?} gap too large: {} -> {}",
                    shape,
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}
