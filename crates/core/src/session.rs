//! Session module - one playthrough from first batch to terminal state
//!
//! A `GameSession` exclusively owns its board, piece set and score engine.
//! The only externally driven transition is [`GameSession::attempt_place`];
//! everything else is a read-only view for the presentation layer.
//!
//! # State machine
//!
//! - `Active`: placements are accepted or rejected.
//! - `Over`: no pending piece fits anywhere. Terminal until [`GameSession::restart`].
//!
//! Terminal detection runs after every attempt, accepted or not, against the
//! pending pieces as they are after the attempt (including a fresh batch).

use tracing::{debug, info};

use crate::board::Board;
use crate::catalog::Generator;
use crate::piece_set::{Piece, PieceSet};
use crate::scoring::ScoreEngine;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Cell, EngineError, PlaceOutcome};

/// Seed used by [`GameSession::new`]
pub const DEFAULT_SEED: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Over,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    pieces: PieceSet,
    scoring: ScoreEngine,
    state: SessionState,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted placements this episode.
    placements: u32,
    /// Rows plus columns cleared this episode.
    lines: u32,
}

impl GameSession {
    /// New session on an N x N board with the default seed and catalog pieces
    pub fn new(grid_size: u8) -> Self {
        Self::with_seed(grid_size, DEFAULT_SEED, Generator::Catalog)
    }

    /// New session with an explicit seed and piece generator
    pub fn with_seed(grid_size: u8, seed: u32, generator: Generator) -> Self {
        let session = Self::from_parts(Board::new(grid_size), PieceSet::new(generator, seed));
        Self { seed, ..session }
    }

    /// Assemble a session around an existing board and piece set.
    ///
    /// The session starts `Active` regardless of whether any piece fits; the
    /// first attempt settles that.
    pub fn from_parts(board: Board, pieces: PieceSet) -> Self {
        info!(
            grid_size = board.size(),
            generator = pieces.generator().as_str(),
            "session started"
        );
        Self {
            board,
            pieces,
            scoring: ScoreEngine::new(),
            state: SessionState::Active,
            seed: 0,
            episode_id: 0,
            placements: 0,
            lines: 0,
        }
    }

    /// Start over on an empty board with a fresh batch and zeroed score.
    /// Pieces keep drawing from the same random stream.
    pub fn restart(&mut self) {
        self.board.reset();
        self.pieces.refill();
        self.scoring.reset();
        self.state = SessionState::Active;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.placements = 0;
        self.lines = 0;
        info!(episode = self.episode_id, "session restarted");
    }

    /// Try to place pending piece `index` with its top-left corner at
    /// (`origin_x`, `origin_y`).
    ///
    /// A piece that does not fit is an ordinary outcome
    /// (`accepted == false`) and leaves board and score untouched. Errors are
    /// reserved for calls that should never happen: a stale piece index or a
    /// session that is already over.
    pub fn attempt_place(
        &mut self,
        index: usize,
        origin_x: i32,
        origin_y: i32,
    ) -> Result<PlaceOutcome, EngineError> {
        if self.state == SessionState::Over {
            return Err(EngineError::SessionOver);
        }

        let piece = self.pieces.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.pieces.len(),
        })?;

        if !self.board.can_place(&piece.shape, origin_x, origin_y) {
            debug!(index, origin_x, origin_y, "placement rejected");
            self.update_terminal_state();
            return Ok(PlaceOutcome::rejected(self.is_over()));
        }

        let cells = piece.shape.cell_count() as u32;
        self.board.place(&piece.shape, origin_x, origin_y);
        let lines_cleared = self.board.clear_lines();
        let result = self.scoring.apply_placement(cells, lines_cleared);
        self.pieces.consume(index)?;

        self.placements = self.placements.wrapping_add(1);
        self.lines = self.lines.saturating_add(lines_cleared);
        debug!(
            index,
            origin_x,
            origin_y,
            cells,
            lines_cleared,
            score_delta = result.total,
            multiplier = self.scoring.multiplier(),
            "placement accepted"
        );

        self.update_terminal_state();

        Ok(PlaceOutcome {
            accepted: true,
            lines_cleared,
            score_delta: result.total,
            is_over: self.is_over(),
        })
    }

    fn update_terminal_state(&mut self) {
        if self.board.any_placement_exists(self.pieces.shapes()) {
            return;
        }
        self.state = SessionState::Over;
        info!(
            score = self.scoring.score(),
            placements = self.placements,
            lines = self.lines,
            "session over"
        );
    }

    /// Whether some pending piece fits somewhere right now
    pub fn has_moves(&self) -> bool {
        self.board.any_placement_exists(self.pieces.shapes())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Over
    }

    /// Final score, available once the session is over
    pub fn final_score(&self) -> Option<u32> {
        self.is_over().then(|| self.scoring.score())
    }

    pub fn current_score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn current_multiplier(&self) -> u32 {
        self.scoring.multiplier()
    }

    pub fn no_clear_streak(&self) -> u32 {
        self.scoring.no_clear_streak()
    }

    pub fn pending_pieces(&self) -> &[Piece] {
        self.pieces.pending()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned N x N copy of the board
    pub fn board_snapshot(&self) -> Vec<Vec<Cell>> {
        self.board.to_matrix()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.grid_size = self.board.size();
        out.pending.clear();
        out.pending
            .extend(self.pieces.pending().iter().map(PieceSnapshot::from));
        out.score = self.scoring.score();
        out.multiplier = self.scoring.multiplier();
        out.no_clear_streak = self.scoring.no_clear_streak();
        out.game_over = self.is_over();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.placements = self.placements;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
