//! Sheet configuration defaults.
//!
//! Policy
//! - Fixed constants cover the usual 20×20 board; `SheetCfg` overrides them
//!   per session without touching call sites.

use crate::grid::Vertex;
use crate::palette::{ColorPolicy, Palette};

/// Number of cells along each side of the board.
pub(crate) const DEFAULT_GRID_SIZE: i64 = 20;
/// Pixel edge length of one cell.
pub(crate) const DEFAULT_CELL_SIZE: i64 = 40;

/// Per-session settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetCfg {
    /// Vertices live on `0..=grid_size` in both axes.
    pub grid_size: i64,
    pub cell_size: i64,
    /// Shuffle the palette with this seed; `None` keeps the standard order.
    pub palette_seed: Option<u64>,
    pub color: ColorPolicy,
}

impl Default for SheetCfg {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            palette_seed: None,
            color: ColorPolicy::Cycle,
        }
    }
}

impl SheetCfg {
    pub fn palette(&self) -> Palette {
        match self.palette_seed {
            Some(seed) => Palette::shuffled(seed),
            None => Palette::standard(),
        }
    }

    /// Nearest grid vertex to a pixel position (`x` rightward, `y` downward).
    pub fn snap(&self, x: f64, y: f64) -> Vertex {
        let cell = self.cell_size as f64;
        Vertex::new((y / cell).round() as i64, (x / cell).round() as i64)
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        (0..=self.grid_size).contains(&v.row) && (0..=self.grid_size).contains(&v.col)
    }
}
