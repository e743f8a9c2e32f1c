//! Game configuration.
//!
//! One immutable struct carries every construction parameter: board pixel
//! size, cell pixel size (which derives the grid dimensions), gravity drop
//! interval and the target frame rate. Constructors take it by reference;
//! nothing reads global state.

use anyhow::{ensure, Result};

use crate::types::{
    DEFAULT_BOARD_PX_HEIGHT, DEFAULT_BOARD_PX_WIDTH, DEFAULT_CELL_PX, DEFAULT_DROP_INTERVAL_MS,
    DEFAULT_FRAME_RATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in pixels.
    pub board_px_width: u16,
    /// Board height in pixels.
    pub board_px_height: u16,
    /// Edge length of one square cell in pixels.
    pub cell_px: u16,
    /// Milliseconds between forced gravity steps.
    pub drop_interval_ms: u64,
    /// Target render loop iterations per second.
    pub frame_rate: u32,
}

impl GameConfig {
    /// Validate the configuration, rejecting malformed values up front.
    pub fn validated(self) -> Result<Self> {
        ensure!(self.cell_px > 0, "cell size must be positive");
        ensure!(
            self.board_px_width >= self.cell_px,
            "board width {}px is smaller than one cell ({}px)",
            self.board_px_width,
            self.cell_px
        );
        ensure!(
            self.board_px_height >= self.cell_px,
            "board height {}px is smaller than one cell ({}px)",
            self.board_px_height,
            self.cell_px
        );
        ensure!(self.drop_interval_ms > 0, "drop interval must be positive");
        ensure!(self.frame_rate > 0, "frame rate must be positive");
        Ok(self)
    }

    /// Number of grid columns derived from the pixel geometry.
    pub fn cols(&self) -> u16 {
        self.board_px_width / self.cell_px
    }

    /// Number of grid rows derived from the pixel geometry.
    pub fn rows(&self) -> u16 {
        self.board_px_height / self.cell_px
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_px_width: DEFAULT_BOARD_PX_WIDTH,
            board_px_height: DEFAULT_BOARD_PX_HEIGHT,
            cell_px: DEFAULT_CELL_PX,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}
