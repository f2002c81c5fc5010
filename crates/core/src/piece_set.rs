//! Piece set module - the batch of pieces offered to the player
//!
//! A batch holds `BATCH_SIZE` pieces. Pieces are consumed one at a time in any
//! order; the set is refilled with a whole new batch the moment the last piece
//! is consumed, never partially.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::catalog::Generator;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{ColorTag, EngineError, BATCH_SIZE};

/// A pending piece: shape plus presentation color
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub shape: Shape,
    pub color: ColorTag,
}

/// Pending pieces and the generator that refills them
#[derive(Debug, Clone)]
pub struct PieceSet {
    pending: ArrayVec<Piece, BATCH_SIZE>,
    generator: Generator,
    rng: SimpleRng,
    /// Number of batches dealt so far (including the current one)
    batches: u32,
}

impl PieceSet {
    /// Create a piece set with a full first batch
    pub fn new(generator: Generator, seed: u32) -> Self {
        let mut set = Self {
            pending: ArrayVec::new(),
            generator,
            rng: SimpleRng::new(seed),
            batches: 0,
        };
        set.refill();
        set
    }

    /// Draw `count` shapes from this set's generator and RNG stream
    pub fn generate(&mut self, count: usize) -> Vec<Shape> {
        self.generator.generate(&mut self.rng, count)
    }

    /// Replace the pending pieces with a fresh full batch
    pub fn refill(&mut self) {
        let mut palette = ColorTag::PALETTE;
        self.rng.shuffle(&mut palette);

        let shapes = self.generate(BATCH_SIZE);
        self.pending.clear();
        for (shape, color) in shapes.into_iter().zip(palette) {
            self.pending.push(Piece { shape, color });
        }
        self.batches = self.batches.wrapping_add(1);
        debug!(batch = self.batches, "dealt new piece batch");
    }

    /// Remove and return the piece at `index`, refilling when the set empties
    pub fn consume(&mut self, index: usize) -> Result<Piece, EngineError> {
        if index >= self.pending.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.pending.len(),
            });
        }

        let piece = self.pending.remove(index);
        if self.pending.is_empty() {
            self.refill();
        }
        Ok(piece)
    }

    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pending.get(index)
    }

    pub fn pending(&self) -> &[Piece] {
        &self.pending
    }

    /// Shapes of the pending pieces
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.pending.iter().map(|p| &p.shape)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn batches(&self) -> u32 {
        self.batches
    }

    /// Replace the pending pieces (test setup and scripted scenarios)
    ///
    /// Accepts at most `BATCH_SIZE` pieces; extra pieces are dropped. An
    /// empty list is refilled immediately to keep the set non-empty.
    pub fn set_pending(&mut self, pieces: impl IntoIterator<Item = Piece>) {
        self.pending.clear();
        self.pending.extend(pieces.into_iter().take(BATCH_SIZE));
        if self.pending.is_empty() {
            self.refill();
        }
    }
}
