//! RNG module - next-piece generation
//!
//! Each next piece is drawn uniformly from the seven shapes. The generator is
//! a seeded LCG, so a session replays identically for a given seed.

use crate::shapes::template;
use crate::types::{Matrix, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a short cycle
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

/// Uniform shape source for the next-piece buffer
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    seed: u32,
    rng: SimpleRng,
}

impl ShapeGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_kind(&mut self) -> ShapeKind {
        let index = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[index]
    }

    /// Draw the next template
    pub fn next_template(&mut self) -> Matrix {
        template(self.next_kind())
    }
}
