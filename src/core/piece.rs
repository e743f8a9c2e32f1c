//! Piece module - shape matrices and the active falling piece
//!
//! Shapes are stored in a fixed-capacity bounding box with explicit
//! width/height, so rotating never allocates. Coordinates inside a shape
//! are (x, y) with x growing right and y growing down, matching the board.

use crate::core::catalog::PieceDescriptor;
use crate::types::Rgb;

/// Maximum edge length of a piece bounding box.
pub const MAX_SHAPE_DIM: usize = 4;

/// Fixed-capacity binary shape matrix.
///
/// Only the top-left `width` x `height` window is meaningful; the rest of
/// the backing array stays false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl ShapeGrid {
    /// Build a shape from row bitmasks, most significant of `width` bits
    /// first, top row first.
    pub const fn from_rows(rows: [u8; MAX_SHAPE_DIM], width: u8, height: u8) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < height as usize {
            let mut x = 0;
            while x < width as usize {
                cells[y][x] = (rows[y] >> (width as usize - 1 - x)) & 1 == 1;
                x += 1;
            }
            y += 1;
        }
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) is filled. Out-of-window cells are empty.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Rotate 90 degrees clockwise in place.
    ///
    /// An h x w window becomes w x h: new[y][x] = old[h-1-x][y]. Four
    /// applications restore the original matrix for any rectangular shape.
    pub fn rotate_cw(&mut self) {
        let src = self.cells;
        let w = self.width as usize;
        let h = self.height as usize;

        let mut out = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..w {
            for x in 0..h {
                out[y][x] = src[h - 1 - x][y];
            }
        }

        self.cells = out;
        self.width = h as u8;
        self.height = w as u8;
    }
}

/// Active falling piece: a value copy of a catalog shape plus grid position.
///
/// (x, y) is the grid-cell offset of the shape's top-left corner; y may sit
/// above the board while the piece is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: ShapeGrid,
    pub color: Rgb,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece from a descriptor, horizontally centered with its top
    /// row on row 0.
    pub fn spawn(descriptor: &PieceDescriptor, cols: u16) -> Self {
        Self {
            shape: descriptor.shape,
            color: descriptor.color,
            x: cols as i16 / 2 - descriptor.shape.width() as i16 / 2,
            y: 0,
        }
    }

    /// Rotate the shape 90 degrees clockwise. Position and color are
    /// untouched; the caller validates the result against the board.
    pub fn rotate_cw(&mut self) {
        self.shape.rotate_cw();
    }
}
