//! Implicit infinite lattices for tiling motifs over a panel.
//!
//! A lattice is never stored. Only the cells overlapping the panel, padded
//! by one cell on each side, are materialised: indices run from `-1` to
//! `ceil(dimension / pitch)` inclusive. Geometry that lands off the panel
//! is left for the margin clip to discard.

use std::ops::Range;

/// Cells added beyond the panel on each side.
pub const PADDING: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeKind {
    Square,
    Triangular,
    Hexagonal,
    Rhombic,
}

/// A lattice cell's indices and the world position of its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
    pub x: f64,
    pub y: f64,
}

impl Cell {
    /// True when `row + col` is even. Negative padding indices follow the
    /// same alternation as positive ones.
    #[inline]
    pub fn is_even(&self) -> bool {
        !is_odd(self.row + self.col)
    }

    #[inline]
    pub fn is_odd_row(&self) -> bool {
        is_odd(self.row)
    }
}

/// Odd test that treats -1 as odd.
#[inline]
pub fn is_odd(i: i64) -> bool {
    i.rem_euclid(2) == 1
}

/// Row/column pitch plus an optional half-cell shift on odd rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    kind: LatticeKind,
    pitch_x: f64,
    pitch_y: f64,
    /// Fraction of `pitch_x` odd rows are shifted right by.
    stagger: f64,
}

impl Lattice {
    /// Square grid with equal pitch in both directions.
    pub fn square(pitch: f64) -> Self {
        Self::rectangular(pitch, pitch)
    }

    /// Axis-aligned grid with independent pitches.
    pub fn rectangular(pitch_x: f64, pitch_y: f64) -> Self {
        Self { kind: LatticeKind::Square, pitch_x, pitch_y, stagger: 0.0 }
    }

    /// Axis-aligned grid whose odd rows shift by half a cell (running bond).
    pub fn running(pitch_x: f64, pitch_y: f64) -> Self {
        Self { kind: LatticeKind::Square, pitch_x, pitch_y, stagger: 0.5 }
    }

    /// Rows of alternating up/down triangles with side `side`.
    pub fn triangular(side: f64) -> Self {
        Self {
            kind: LatticeKind::Triangular,
            pitch_x: side,
            pitch_y: side * 3.0_f64.sqrt() * 0.5,
            stagger: 0.5,
        }
    }

    /// Pointy-top hexagons with circumradius `radius`.
    pub fn hexagonal(radius: f64) -> Self {
        Self {
            kind: LatticeKind::Hexagonal,
            pitch_x: radius * 3.0_f64.sqrt(),
            pitch_y: radius * 2.0 * 0.75,
            stagger: 0.5,
        }
    }

    /// Diamonds of the given width and height, packed tip to tip.
    pub fn rhombic(width: f64, height: f64) -> Self {
        Self { kind: LatticeKind::Rhombic, pitch_x: width, pitch_y: height * 0.5, stagger: 0.5 }
    }

    pub fn kind(&self) -> LatticeKind {
        self.kind
    }

    pub fn pitch_x(&self) -> f64 {
        self.pitch_x
    }

    pub fn pitch_y(&self) -> f64 {
        self.pitch_y
    }

    /// Row indices covering `height` plus padding.
    pub fn rows(&self, height: f64) -> Range<i64> {
        padded_span(height, self.pitch_y)
    }

    /// Column indices covering `width` plus padding.
    pub fn cols(&self, width: f64) -> Range<i64> {
        padded_span(width, self.pitch_x)
    }

    /// World anchor of a cell.
    #[inline]
    pub fn cell(&self, row: i64, col: i64) -> Cell {
        let shift = if is_odd(row) { self.pitch_x * self.stagger } else { 0.0 };
        Cell {
            row,
            col,
            x: col as f64 * self.pitch_x + shift,
            y: row as f64 * self.pitch_y,
        }
    }

    /// Every cell covering a `width` x `height` panel, row-major.
    pub fn cells(&self, width: f64, height: f64) -> impl Iterator<Item = Cell> {
        let lattice = *self;
        let cols = self.cols(width);
        self.rows(height)
            .flat_map(move |row| cols.clone().map(move |col| lattice.cell(row, col)))
    }
}

/// `-PADDING .. ceil(extent / pitch) + PADDING`; empty for a bad pitch.
fn padded_span(extent: f64, pitch: f64) -> Range<i64> {
    if !(pitch > 0.0) || !pitch.is_finite() || !extent.is_finite() {
        return 0..0;
    }
    let count = (extent / pitch).ceil().max(0.0) as i64;
    -PADDING..count + PADDING
}

/// `index / max(1, count - 1)`: position of `index` within `count` steps.
///
/// Single-row layouts get 0 instead of a division by zero.
#[inline]
pub fn interpolation_fraction(index: usize, count: usize) -> f64 {
    index as f64 / count.saturating_sub(1).max(1) as f64
}
