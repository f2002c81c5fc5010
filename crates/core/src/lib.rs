//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and piece
//! generation. It has **zero dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, no rendering surface needed
//! - **Portable**: Can run behind any presentation layer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shape`]: trimmed polyomino values with a precomputed centroid
//! - [`catalog`]: piece templates and the catalog / random-rectangle generators
//! - [`board`]: N x N grid with placement checks, line clearing and terminal detection
//! - [`piece_set`]: the batch of three pending pieces, refilled when exhausted
//! - [`scoring`]: cumulative score with a combo multiplier
//! - [`session`]: one playthrough tying the above together
//! - [`rng`]: seeded LCG shared by every random decision
//!
//! # Game Rules
//!
//! - Pieces are placed by grid origin (top-left of their bounding box) and never rotate
//! - After each placement every full row and every full column is cleared at once
//! - Each placed cell scores `multiplier`; each cleared line scores `10 * multiplier`
//! - A clearing placement raises the multiplier; two misses in a row reset it
//! - The game ends when no pending piece fits anywhere
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameSession;
//!
//! let mut session = GameSession::new(8);
//! let outcome = session.attempt_place(0, 0, 0).unwrap();
//!
//! assert!(outcome.accepted); // every piece fits on an empty 8x8 board
//! assert!(session.current_score() > 0);
//! ```

pub mod board;
pub mod catalog;
pub mod piece_set;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedLines};
pub use catalog::{Generator, ShapeKind};
pub use piece_set::{Piece, PieceSet};
pub use rng::SimpleRng;
pub use scoring::{calculate_line_score, calculate_placement_score, ScoreEngine, ScoreResult};
pub use session::{GameSession, SessionState, DEFAULT_SEED};
pub use shape::Shape;
pub use snapshot::{GameSnapshot, PieceSnapshot};
