//! Catalog module - piece templates and generators
//!
//! Pieces come from one of two generators:
//!
//! - [`Generator::Catalog`]: uniform draw over the fixed [`ShapeKind`] catalog
//! - [`Generator::RandomRect`]: a random 1..=4 by 1..=4 rectangle with each
//!   cell filled on a coin flip, at least one cell forced filled, then trimmed
//!
//! The distribution is a presentation choice; engine correctness only relies
//! on every generated shape having at least one occupied cell.

use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::MAX_PIECE_EDGE;

/// Fixed polyomino templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Single,
    Bar2,
    Bar3,
    Bar4,
    Bar2V,
    Bar3V,
    Bar4V,
    Square,
    TShape,
    ZShape,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Single,
        ShapeKind::Bar2,
        ShapeKind::Bar3,
        ShapeKind::Bar4,
        ShapeKind::Bar2V,
        ShapeKind::Bar3V,
        ShapeKind::Bar4V,
        ShapeKind::Square,
        ShapeKind::TShape,
        ShapeKind::ZShape,
    ];

    /// Text rows of the template, `#` marks an occupied cell
    pub fn rows(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Single => &["#"],
            ShapeKind::Bar2 => &["##"],
            ShapeKind::Bar3 => &["###"],
            ShapeKind::Bar4 => &["####"],
            ShapeKind::Bar2V => &["#", "#"],
            ShapeKind::Bar3V => &["#", "#", "#"],
            ShapeKind::Bar4V => &["#", "#", "#", "#"],
            ShapeKind::Square => &["##", "##"],
            ShapeKind::TShape => &["###", ".#."],
            ShapeKind::ZShape => &["##.", ".##"],
        }
    }

    pub fn shape(self) -> Shape {
        Shape::from_rows(self.rows())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::Bar2 => "bar2",
            ShapeKind::Bar3 => "bar3",
            ShapeKind::Bar4 => "bar4",
            ShapeKind::Bar2V => "bar2v",
            ShapeKind::Bar3V => "bar3v",
            ShapeKind::Bar4V => "bar4v",
            ShapeKind::Square => "square",
            ShapeKind::TShape => "t",
            ShapeKind::ZShape => "z",
        }
    }
}

/// How a piece set draws new shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generator {
    #[default]
    Catalog,
    RandomRect,
}

impl Generator {
    /// Parse generator name (case-insensitive): `catalog` or `random`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "catalog" => Some(Generator::Catalog),
            "random" | "random_rect" => Some(Generator::RandomRect),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Generator::Catalog => "catalog",
            Generator::RandomRect => "random",
        }
    }

    /// Draw `count` independent shapes
    pub fn generate(self, rng: &mut SimpleRng, count: usize) -> Vec<Shape> {
        (0..count).map(|_| self.next_shape(rng)).collect()
    }

    /// Draw one shape
    pub fn next_shape(self, rng: &mut SimpleRng) -> Shape {
        match self {
            Generator::Catalog => {
                let idx = rng.next_range(ShapeKind::ALL.len() as u32) as usize;
                ShapeKind::ALL[idx].shape()
            }
            Generator::RandomRect => random_rect(rng),
        }
    }
}

fn random_rect(rng: &mut SimpleRng) -> Shape {
    let edge = MAX_PIECE_EDGE as u32;
    let width = rng.next_between(1, edge) as usize;
    let height = rng.next_between(1, edge) as usize;

    let mut raw = vec![vec![false; width]; height];
    for row in raw.iter_mut() {
        for cell in row.iter_mut() {
            *cell = rng.next_bool();
        }
    }

    // Never hand out an all-empty piece.
    let forced = rng.next_range((width * height) as u32) as usize;
    raw[forced / width][forced % width] = true;

    Shape::trim(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shapes_are_trimmed_and_nonempty() {
        for kind in ShapeKind::ALL {
            let shape = kind.shape();
            assert!(!shape.is_empty(), "{:?} has no cells", kind);
            assert_eq!(shape.height(), kind.rows().len(), "{:?}", kind);
            assert_eq!(shape.width(), kind.rows()[0].len(), "{:?}", kind);
        }
    }

    #[test]
    fn catalog_cell_counts() {
        assert_eq!(ShapeKind::Single.shape().cell_count(), 1);
        assert_eq!(ShapeKind::Bar4.shape().cell_count(), 4);
        assert_eq!(ShapeKind::Bar3V.shape().cell_count(), 3);
        assert_eq!(ShapeKind::Square.shape().cell_count(), 4);
        assert_eq!(ShapeKind::TShape.shape().cell_count(), 4);
        assert_eq!(ShapeKind::ZShape.shape().cell_count(), 4);
    }

    #[test]
    fn generate_returns_requested_count() {
        let mut rng = SimpleRng::new(5);
        assert_eq!(Generator::Catalog.generate(&mut rng, 3).len(), 3);
        assert_eq!(Generator::RandomRect.generate(&mut rng, 7).len(), 7);
        assert!(Generator::Catalog.generate(&mut rng, 0).is_empty());
    }

    #[test]
    fn random_rect_is_bounded_and_nonempty() {
        let mut rng = SimpleRng::new(11);
        for _ in 0..500 {
            let shape = Generator::RandomRect.next_shape(&mut rng);
            assert!(!shape.is_empty());
            assert!(shape.width() <= MAX_PIECE_EDGE as usize);
            assert!(shape.height() <= MAX_PIECE_EDGE as usize);
        }
    }

    #[test]
    fn catalog_draw_covers_every_template() {
        let mut rng = SimpleRng::new(2024);
        let mut seen = [false; ShapeKind::ALL.len()];
        for _ in 0..1000 {
            let shape = Generator::Catalog.next_shape(&mut rng);
            let idx = ShapeKind::ALL
                .iter()
                .position(|k| k.shape() == shape)
                .expect("catalog produced an unknown shape");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn generator_names() {
        assert_eq!(Generator::from_str("Catalog"), Some(Generator::Catalog));
        assert_eq!(Generator::from_str("random"), Some(Generator::RandomRect));
        assert_eq!(Generator::from_str("nope"), None);
    }
}
