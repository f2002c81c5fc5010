//! JSON observations of a running session.
//!
//! In `--json` mode the runner prints one [`ObservationMessage`] per line after
//! every command, and an [`ErrorMessage`] when a command cannot be applied.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::types::{ColorTag, EngineError, PlaceOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

/// Lowercase color name on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLower {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Purple,
}

impl From<ColorTag> for ColorLower {
    fn from(value: ColorTag) -> Self {
        match value {
            ColorTag::Red => ColorLower::Red,
            ColorTag::Orange => ColorLower::Orange,
            ColorTag::Yellow => ColorLower::Yellow,
            ColorTag::Green => ColorLower::Green,
            ColorTag::Teal => ColorLower::Teal,
            ColorTag::Purple => ColorLower::Purple,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: u8,
    /// One string per row, `1` filled and `0` empty
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub index: usize,
    pub color: ColorLower,
    pub width: u8,
    pub height: u8,
    pub cells: u32,
    pub rows: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastOutcome {
    pub accepted: bool,
    pub lines_cleared: u32,
    pub score_delta: u32,
}

impl From<PlaceOutcome> for LastOutcome {
    fn from(value: PlaceOutcome) -> Self {
        Self {
            accepted: value.accepted,
            lines_cleared: value.lines_cleared,
            score_delta: value.score_delta,
        }
    }
}

/// Session state observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub playable: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub board: BoardView,
    pub pending: Vec<PieceView>,
    pub score: u32,
    pub multiplier: u32,
    pub placements: u32,
    pub lines: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_outcome: Option<LastOutcome>,
}

/// Command failure report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub code: String,
    pub message: String,
}

fn bits_row(row: &[u8]) -> String {
    row.iter().map(|&c| if c != 0 { '1' } else { '0' }).collect()
}

fn piece_view(index: usize, piece: &PieceSnapshot) -> PieceView {
    PieceView {
        index,
        color: piece.color.into(),
        width: piece.width,
        height: piece.height,
        cells: piece.cells,
        rows: piece.rows.iter().map(|r| bits_row(r)).collect(),
    }
}

pub fn build_observation(
    seq: u64,
    snap: &GameSnapshot,
    last: Option<PlaceOutcome>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        playable: snap.playable(),
        game_over: snap.game_over,
        episode_id: snap.episode_id,
        seed: snap.seed,
        board: BoardView {
            size: snap.grid_size,
            cells: snap.board.iter().map(|r| bits_row(r)).collect(),
        },
        pending: snap
            .pending
            .iter()
            .enumerate()
            .map(|(i, p)| piece_view(i, p))
            .collect(),
        score: snap.score,
        multiplier: snap.multiplier,
        placements: snap.placements,
        lines: snap.lines,
        last_outcome: last.map(LastOutcome::from),
    }
}

pub fn build_error(seq: u64, code: &str, message: impl Into<String>) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        code: code.to_string(),
        message: message.into(),
    }
}

impl From<(u64, EngineError)> for ErrorMessage {
    fn from((seq, err): (u64, EngineError)) -> Self {
        build_error(seq, err.code(), err.to_string())
    }
}

/// Serialize as a single JSON line (no trailing newline)
pub fn to_line<T: Serialize>(msg: &T) -> Result<String> {
    Ok(serde_json::to_string(msg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameSession, Generator, Piece, PieceSet, ShapeKind};

    fn small_session() -> GameSession {
        let mut pieces = PieceSet::new(Generator::Catalog, 1);
        pieces.set_pending(vec![Piece {
            shape: ShapeKind::TShape.shape(),
            color: ColorTag::Teal,
        }]);
        GameSession::from_parts(Board::from_rows(&["#..", "...", "..."]), pieces)
    }

    #[test]
    fn observation_serializes_board_and_pieces() {
        let session = small_session();
        let obs = build_observation(3, &session.snapshot(), None);
        let v: serde_json::Value = serde_json::from_str(&to_line(&obs).unwrap()).unwrap();

        assert_eq!(v["type"], "observation");
        assert_eq!(v["seq"], 3);
        assert_eq!(v["board"]["size"], 3);
        assert_eq!(v["board"]["cells"][0], "100");
        assert_eq!(v["pending"][0]["color"], "teal");
        assert_eq!(v["pending"][0]["rows"][0], "111");
        assert_eq!(v["pending"][0]["rows"][1], "010");
        assert_eq!(v["game_over"], false);
        assert!(v.get("last_outcome").is_none());
    }

    #[test]
    fn observation_includes_last_outcome() {
        let mut session = small_session();
        let outcome = session.attempt_place(0, 0, 1).unwrap();
        let obs = build_observation(4, &session.snapshot(), Some(outcome));
        let v: serde_json::Value = serde_json::from_str(&to_line(&obs).unwrap()).unwrap();

        // The T's bar completes row 1: 4 cells plus one line.
        assert_eq!(v["last_outcome"]["accepted"], true);
        assert_eq!(v["last_outcome"]["lines_cleared"], 1);
        assert_eq!(v["last_outcome"]["score_delta"], 14);
        assert_eq!(v["board"]["cells"][1], "000");
    }

    #[test]
    fn observation_roundtrips_through_serde() {
        let session = small_session();
        let obs = build_observation(1, &session.snapshot(), None);
        let back: ObservationMessage = serde_json::from_str(&to_line(&obs).unwrap()).unwrap();
        assert_eq!(back, obs);
    }

    #[test]
    fn engine_errors_map_to_codes() {
        let msg = ErrorMessage::from((9, EngineError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(msg.code, "index_out_of_range");
        assert_eq!(msg.seq, 9);
        let v: serde_json::Value = serde_json::from_str(&to_line(&msg).unwrap()).unwrap();
        assert_eq!(v["type"], "error");
    }
}
