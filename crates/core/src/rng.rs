//! RNG module - piece generation
//!
//! [`PieceGenerator`] is the only place pieces are created. It owns both the
//! random source used to pick a label and the id counter, so ids stay unique
//! and strictly increasing for the lifetime of one generator.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::types::{Piece, PieceKind};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() >> 16) * max) >> 16
    }
}

/// Piece factory with its own id counter.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u64,
}

impl PieceGenerator {
    /// Create a generator whose first piece gets id 0.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Create a new piece with a random kind and the next id.
    ///
    /// Ids are `u64`, so the counter cannot wrap within any real run.
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Id the next generated piece will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
