//! Piece catalog and lookahead queue
//!
//! The catalog is fixed, read-only data: five shape/color templates. Draws
//! are uniform and independent (with replacement), fed by an injected
//! [`SimpleRng`] so a seeded game replays the same stream.

use arrayvec::ArrayVec;

use crate::core::piece::{Piece, ShapeGrid};
use crate::core::rng::SimpleRng;
use crate::types::{Rgb, LOOKAHEAD};

/// Immutable shape/color template for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDescriptor {
    pub shape: ShapeGrid,
    pub color: Rgb,
}

/// The five canonical pieces.
const CATALOG: [PieceDescriptor; 5] = [
    // I  ####
    PieceDescriptor {
        shape: ShapeGrid::from_rows([0b1111, 0, 0, 0], 4, 1),
        color: Rgb::new(0, 255, 255),
    },
    // O  ##
    //    ##
    PieceDescriptor {
        shape: ShapeGrid::from_rows([0b11, 0b11, 0, 0], 2, 2),
        color: Rgb::new(255, 0, 0),
    },
    // T  .#.
    //    ###
    PieceDescriptor {
        shape: ShapeGrid::from_rows([0b010, 0b111, 0, 0], 3, 2),
        color: Rgb::new(0, 255, 0),
    },
    // L  #..
    //    ###
    PieceDescriptor {
        shape: ShapeGrid::from_rows([0b100, 0b111, 0, 0], 3, 2),
        color: Rgb::new(0, 0, 255),
    },
    // J  ..#
    //    ###
    PieceDescriptor {
        shape: ShapeGrid::from_rows([0b001, 0b111, 0, 0], 3, 2),
        color: Rgb::new(255, 255, 0),
    },
];

/// Read-only access to the piece templates.
pub struct PieceCatalog;

impl PieceCatalog {
    /// Select a descriptor uniformly at random, each call independent,
    /// with replacement.
    pub fn random_piece(rng: &mut SimpleRng) -> &'static PieceDescriptor {
        &CATALOG[rng.next_range(CATALOG.len() as u32) as usize]
    }

    pub fn descriptors() -> &'static [PieceDescriptor] {
        &CATALOG
    }
}

/// FIFO lookahead of upcoming pieces.
///
/// Holds exactly [`LOOKAHEAD`] pieces at rest: every draw pops the oldest
/// entry and immediately streams in a replacement.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pieces: ArrayVec<Piece, LOOKAHEAD>,
    rng: SimpleRng,
    cols: u16,
}

impl PieceQueue {
    /// Create a queue pre-filled with freshly streamed pieces, positioned
    /// for a board `cols` columns wide.
    pub fn new(seed: u32, cols: u16) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut pieces = ArrayVec::new();
        for _ in 0..LOOKAHEAD {
            pieces.push(Piece::spawn(PieceCatalog::random_piece(&mut rng), cols));
        }
        Self { pieces, rng, cols }
    }

    /// Pop the oldest piece and stream in a replacement.
    pub fn draw(&mut self) -> Piece {
        let next = self.pieces.remove(0);
        self.pieces
            .push(Piece::spawn(PieceCatalog::random_piece(&mut self.rng), self.cols));
        next
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
