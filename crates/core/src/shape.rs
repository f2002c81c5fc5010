//! Shape module - immutable polyomino patterns
//!
//! A `Shape` is always stored trimmed to its minimal bounding box: the first
//! and last row and the first and last column each hold at least one occupied
//! cell. The only exception is the degenerate shape built from a matrix with no
//! occupied cell at all, which becomes a single empty cell.
//!
//! Coordinates inside a shape are `(row, col)` with `(0, 0)` at the top-left.

/// Immutable, trimmed polyomino pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    width: usize,
    height: usize,
    /// Row-major occupancy (row * width + col)
    cells: Vec<bool>,
    /// Occupied `(row, col)` offsets in row-major order
    occupied: Vec<(usize, usize)>,
    centroid: (f32, f32),
}

impl Shape {
    /// Build a shape from a raw occupancy matrix, removing empty border rows
    /// and columns.
    ///
    /// Rows may be ragged; missing cells count as empty. A matrix without any
    /// occupied cell yields the 1x1 empty shape.
    ///
    /// ```
    /// use block_blast_core::Shape;
    ///
    /// let shape = Shape::trim(&[
    ///     vec![false, false, false],
    ///     vec![false, true, true],
    ///     vec![false, false, false],
    /// ]);
    /// assert_eq!((shape.width(), shape.height()), (2, 1));
    /// ```
    pub fn trim<R: AsRef<[bool]>>(raw: &[R]) -> Self {
        let mut min_row = usize::MAX;
        let mut max_row = 0;
        let mut min_col = usize::MAX;
        let mut max_col = 0;

        for (r, row) in raw.iter().enumerate() {
            for (c, &filled) in row.as_ref().iter().enumerate() {
                if filled {
                    min_row = min_row.min(r);
                    max_row = max_row.max(r);
                    min_col = min_col.min(c);
                    max_col = max_col.max(c);
                }
            }
        }

        if min_row == usize::MAX {
            return Self::empty();
        }

        let height = max_row - min_row + 1;
        let width = max_col - min_col + 1;
        let mut cells = vec![false; width * height];
        for r in 0..height {
            let row = raw[min_row + r].as_ref();
            for c in 0..width {
                cells[r * width + c] = row.get(min_col + c).copied().unwrap_or(false);
            }
        }

        Self::from_trimmed(width, height, cells)
    }

    /// Build a shape from text rows, `#` marks an occupied cell.
    ///
    /// ```
    /// use block_blast_core::Shape;
    ///
    /// let t = Shape::from_rows(&["###", ".#."]);
    /// assert_eq!(t.cell_count(), 4);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let raw: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|ch| ch == '#').collect())
            .collect();
        Self::trim(&raw)
    }

    /// The degenerate 1x1 shape with no occupied cell
    pub fn empty() -> Self {
        Self::from_trimmed(1, 1, vec![false])
    }

    fn from_trimmed(width: usize, height: usize, cells: Vec<bool>) -> Self {
        let occupied: Vec<(usize, usize)> = cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(|(i, _)| (i / width, i % width))
            .collect();
        let centroid = centroid_of(&occupied);
        Self {
            width,
            height,
            cells,
            occupied,
            centroid,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.occupied.len()
    }

    /// True only for the degenerate shape
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Whether `(row, col)` is occupied; out-of-range coordinates are empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Occupied `(row, col)` offsets in row-major order
    pub fn occupied(&self) -> &[(usize, usize)] {
        &self.occupied
    }

    /// Rows of the bounding box, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Mean `(row, col)` of the occupied cells; `(0.0, 0.0)` when none.
    pub fn centroid_in_cells(&self) -> (f32, f32) {
        self.centroid
    }
}

fn centroid_of(occupied: &[(usize, usize)]) -> (f32, f32) {
    if occupied.is_empty() {
        return (0.0, 0.0);
    }
    let n = occupied.len() as f32;
    let (sum_r, sum_c) = occupied
        .iter()
        .fold((0usize, 0usize), |(sr, sc), &(r, c)| (sr + r, sc + c));
    (sum_r as f32 / n, sum_c as f32 / n)
}
