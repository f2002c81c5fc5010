use crate::piece_set::Piece;
use crate::types::ColorTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub color: ColorTag,
    pub width: u8,
    pub height: u8,
    pub cells: u32,
    /// Bounding-box rows, `1` for occupied
    pub rows: Vec<Vec<u8>>,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        let shape = &value.shape;
        Self {
            color: value.color,
            width: shape.width() as u8,
            height: shape.height() as u8,
            cells: shape.cell_count() as u32,
            rows: shape
                .rows()
                .map(|row| row.iter().map(|&filled| filled as u8).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub grid_size: u8,
    pub board: Vec<Vec<u8>>,
    pub pending: Vec<PieceSnapshot>,
    pub score: u32,
    pub multiplier: u32,
    pub no_clear_streak: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub placements: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
