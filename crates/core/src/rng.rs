//! RNG module - piece sources
//!
//! Spawning never calls a global RNG. Every game owns a [`PieceSource`]:
//! [`RandomPieces`] picks uniformly from the seven kinds with a small seeded LCG,
//! and [`PieceSequence`] replays a fixed list for tests and scripted runs.

use crate::types::PieceKind;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle quickly.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where new pieces come from.
pub trait PieceSource {
    /// Kind of the next piece to spawn.
    fn next_kind(&mut self) -> PieceKind;
}

impl<T: PieceSource + ?Sized> PieceSource for Box<T> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<T: PieceSource + ?Sized> PieceSource for &mut T {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random piece kinds from a seeded [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state; `RandomPieces::new(state)` continues the same sequence.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Scripted source that cycles through a fixed list of kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSequence {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl PieceSequence {
    /// Returns `None` if `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Option<Self> {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return None;
        }
        Some(Self { kinds, next: 0 })
    }

    /// A source that only ever yields `kind`.
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            next: 0,
        }
    }
}

impl PieceSource for PieceSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
