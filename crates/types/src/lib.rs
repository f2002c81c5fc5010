//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, text rendering, JSON observations).
//!
//! # Board Dimensions
//!
//! The board is square. The side length is chosen per session:
//!
//! - **Default**: 8 columns by 8 rows (indexed 0-7)
//! - **Maximum**: 16 (the board uses a fixed-capacity flat array)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Base points per cleared row or column |
//! | `BASE_MULTIPLIER` | 1 | Multiplier at session start and after a reset |
//! | `NO_CLEAR_RESET_STREAK` | 2 | Non-clearing placements that reset the multiplier |
//! | `BATCH_SIZE` | 3 | Pieces offered to the player at one time |
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{ColorTag, EngineError, DEFAULT_GRID_SIZE};
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 8);
//! assert_eq!(ColorTag::from_str("teal"), Some(ColorTag::Teal));
//! assert_eq!(EngineError::InvalidPlacement.code(), "invalid_place");
//! ```

use std::fmt;

/// Default board side length (8x8)
pub const DEFAULT_GRID_SIZE: u8 = 8;

/// Largest supported board side length
pub const MAX_GRID_SIZE: u8 = 16;

/// Number of pieces offered per batch
pub const BATCH_SIZE: usize = 3;

/// Base points awarded per cleared row or column (before multiplier)
pub const POINTS_PER_LINE: u32 = 10;

/// Multiplier value at session start and after a no-clear reset
pub const BASE_MULTIPLIER: u32 = 1;

/// Consecutive non-clearing placements that reset the multiplier
pub const NO_CLEAR_RESET_STREAK: u32 = 2;

/// Largest edge of any generated piece
pub const MAX_PIECE_EDGE: u8 = 4;

/// A cell on the game board
///
/// The board only ever holds these two states; placement and clearing are
/// applied as whole operations so no intermediate state is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// `0` for empty, `1` for filled (rendering and observations)
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled => 1,
        }
    }
}

/// Presentation colors for pending pieces
///
/// Engine logic never looks at a color; it only guarantees that the pieces of
/// one batch carry distinct tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Purple,
}

impl ColorTag {
    /// The full palette a batch draws its tags from
    pub const PALETTE: [ColorTag; 6] = [
        ColorTag::Red,
        ColorTag::Orange,
        ColorTag::Yellow,
        ColorTag::Green,
        ColorTag::Teal,
        ColorTag::Purple,
    ];

    /// Parse color tag from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::ColorTag;
    ///
    /// assert_eq!(ColorTag::from_str("RED"), Some(ColorTag::Red));
    /// assert_eq!(ColorTag::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(ColorTag::Red),
            "orange" => Some(ColorTag::Orange),
            "yellow" => Some(ColorTag::Yellow),
            "green" => Some(ColorTag::Green),
            "teal" => Some(ColorTag::Teal),
            "purple" => Some(ColorTag::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Teal => "teal",
            ColorTag::Purple => "purple",
        }
    }
}

/// Result of a single placement attempt
///
/// A rejected placement is an expected outcome, not an error: `accepted` is
/// false and every other counter is zero. `is_over` reports the session state
/// after the attempt in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceOutcome {
    pub accepted: bool,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub is_over: bool,
}

impl PlaceOutcome {
    /// Outcome of a rejected placement
    pub fn rejected(is_over: bool) -> Self {
        Self {
            accepted: false,
            lines_cleared: 0,
            score_delta: 0,
            is_over,
        }
    }

    /// `Some(InvalidPlacement)` when the attempt was rejected
    pub fn rejection(&self) -> Option<EngineError> {
        if self.accepted {
            None
        } else {
            Some(EngineError::InvalidPlacement)
        }
    }
}

/// Engine error taxonomy
///
/// - **InvalidPlacement**: the piece does not fit at the requested origin.
///   Frequent and recoverable; the caller snaps the piece back.
/// - **IndexOutOfRange**: the caller referenced a piece that is not pending.
///   Indicates the caller and the engine disagree about state.
/// - **SessionOver**: the session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidPlacement,
    IndexOutOfRange { index: usize, len: usize },
    SessionOver,
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::InvalidPlacement => "invalid_place",
            EngineError::IndexOutOfRange { .. } => "index_out_of_range",
            EngineError::SessionOver => "session_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EngineError::InvalidPlacement => "piece does not fit at the requested origin",
            EngineError::IndexOutOfRange { .. } => "piece index does not match a pending piece",
            EngineError::SessionOver => "session is over",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EngineError::IndexOutOfRange { index, len } => {
                write!(f, "piece index {} out of range ({} pending)", index, len)
            }
            other => f.write_str(other.message()),
        }
    }
}

impl std::error::Error for EngineError {}
