//! Board module - manages the game grid
//!
//! The board is a square N x N grid where each cell is empty or filled.
//! Uses a fixed-capacity flat array for cache locality and zero allocation on
//! the placement path.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom), both in `0..N`.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, MAX_GRID_SIZE};

/// Capacity of the flat cell array (largest supported board)
const MAX_CELLS: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// Row and column indices removed by one clear pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    pub rows: ArrayVec<u8, { MAX_GRID_SIZE as usize }>,
    pub cols: ArrayVec<u8, { MAX_GRID_SIZE as usize }>,
}

impl ClearedLines {
    /// Rows plus columns; a full-board clear counts every row and every column
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game board - N columns x N rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: u8,
    /// Flat array of cells, row-major order (y * size + x); only the first
    /// size * size entries are in use
    cells: [Cell; MAX_CELLS],
}

impl Board {
    /// Create a new empty board. `size` is clamped to `1..=MAX_GRID_SIZE`.
    pub fn new(size: u8) -> Self {
        Self {
            size: size.clamp(1, MAX_GRID_SIZE),
            cells: [Cell::Empty; MAX_CELLS],
        }
    }

    /// Build a board from text rows, `#` marks a filled cell.
    /// The side length is the number of rows; short rows are padded empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    board.set(x as i32, y as i32, Cell::Filled);
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.size as i32;
        if x < 0 || x >= n || y < 0 || y >= n {
            return None;
        }
        Some((y as usize) * (self.size as usize) + (x as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Whether `shape` fits with its top-left bounding-box corner at
    /// (`origin_x`, `origin_y`): every occupied cell must land on an in-bounds
    /// empty cell. Stops at the first violation. Origins anywhere in `i32`
    /// are accepted; coordinates that overflow are out of bounds.
    pub fn can_place(&self, shape: &Shape, origin_x: i32, origin_y: i32) -> bool {
        shape.occupied().iter().all(|&(r, c)| {
            offset(origin_x, origin_y, r, c).map_or(false, |(x, y)| self.is_valid(x, y))
        })
    }

    /// Fill every occupied cell of `shape` at the given origin.
    ///
    /// The caller must have checked [`Board::can_place`]; this is an unchecked
    /// write. Cells that would fall outside the board are skipped.
    pub fn place(&mut self, shape: &Shape, origin_x: i32, origin_y: i32) {
        debug_assert!(
            self.can_place(shape, origin_x, origin_y),
            "place called without a valid placement"
        );
        for &(r, c) in shape.occupied() {
            if let Some((x, y)) = offset(origin_x, origin_y, r, c) {
                self.set(x, y, Cell::Filled);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        let n = self.size as usize;
        if y >= n {
            return false;
        }
        self.cells[y * n..(y + 1) * n].iter().all(|cell| cell.is_filled())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, x: usize) -> bool {
        let n = self.size as usize;
        if x >= n {
            return false;
        }
        (0..n).all(|y| self.cells[y * n + x].is_filled())
    }

    /// Rows and columns that are full right now, without mutating anything
    pub fn full_lines(&self) -> ClearedLines {
        let n = self.size as usize;
        let mut lines = ClearedLines::default();
        for i in 0..n {
            if self.is_row_full(i) {
                lines.rows.push(i as u8);
            }
            if self.is_col_full(i) {
                lines.cols.push(i as u8);
            }
        }
        lines
    }

    /// Clear every full row and column and report which ones were cleared.
    ///
    /// Fullness is decided against the grid as it is before any cell is
    /// zeroed, then all clears are applied together, so the result does not
    /// depend on scan order. A cell on both a cleared row and a cleared column
    /// counts toward both but is zeroed once. Rows never shift.
    pub fn clear_full_lines(&mut self) -> ClearedLines {
        let lines = self.full_lines();
        let n = self.size as usize;

        for &y in &lines.rows {
            let start = y as usize * n;
            for cell in &mut self.cells[start..start + n] {
                *cell = Cell::Empty;
            }
        }
        for &x in &lines.cols {
            for y in 0..n {
                self.cells[y * n + x as usize] = Cell::Empty;
            }
        }

        lines
    }

    /// Clear every full row and column; returns rows cleared plus columns cleared
    pub fn clear_lines(&mut self) -> u32 {
        self.clear_full_lines().count()
    }

    /// First origin (row-major scan) at which `shape` fits, if any
    pub fn find_placement(&self, shape: &Shape) -> Option<(i32, i32)> {
        let n = self.size as i32;
        (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .find(|&(x, y)| self.can_place(shape, x, y))
    }

    /// True iff some shape fits at some origin in `[0, N) x [0, N)`
    pub fn any_placement_exists<'a, I>(&self, shapes: I) -> bool
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        shapes
            .into_iter()
            .any(|shape| self.find_placement(shape).is_some())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.active_cells().iter().filter(|c| c.is_filled()).count()
    }

    /// Get the in-use cells, row-major
    pub fn cells(&self) -> &[Cell] {
        self.active_cells()
    }

    fn active_cells(&self) -> &[Cell] {
        let n = self.size as usize;
        &self.cells[..n * n]
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.active_cells().chunks(self.size as usize)
    }

    /// Owned N x N copy of the grid for rendering
    pub fn to_matrix(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Write the grid as 0/1 rows into `out`, reusing its allocations
    pub fn write_u8_grid(&self, out: &mut Vec<Vec<u8>>) {
        let n = self.size as usize;
        out.resize_with(n, Vec::new);
        out.truncate(n);
        for (dst, row) in out.iter_mut().zip(self.rows()) {
            dst.clear();
            dst.extend(row.iter().map(|c| c.as_u8()));
        }
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }
}

/// Absolute board coordinate of shape cell `(r, c)`; `None` past `i32` range
#[inline]
fn offset(origin_x: i32, origin_y: i32, r: usize, c: usize) -> Option<(i32, i32)> {
    let x = origin_x.checked_add(i32::try_from(c).ok()?)?;
    let y = origin_y.checked_add(i32::try_from(r).ok()?)?;
    Some((x, y))
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRID_SIZE)
    }
}
