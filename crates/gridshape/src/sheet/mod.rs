//! Drawing session: figures on one board, matched by shape as they close.
//!
//! Purpose
//! - Hold the non-visual state of a drawing board: the figures in draw order,
//!   whether one is in progress, how many closed figures matched an earlier
//!   one, and undo of the most recent figure.
//! - A closing figure that matches earlier figures takes over the color of the
//!   earliest match, and every other match is recolored to it, so equal shapes
//!   share a fill.
//!
//! Rendering and input wiring stay with the caller; `click` takes grid
//! vertices (see `SheetCfg::snap`).
//!
//! Code cross-refs: `polygon::Polygon`, `canonical::FormCache`, `palette::ColorPolicy`

mod cfg;

pub use cfg::SheetCfg;

use std::fmt;

use tracing::debug;

use crate::canonical::FormCache;
use crate::grid::Vertex;
use crate::palette::{Color, ColorPolicy, Palette};
use crate::polygon::{Polygon, PolygonError, PolygonState};

/// Errors surfaced by `Sheet::click`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetError {
    /// The vertex lies outside `0..=size` on some axis.
    OutOfGrid { vertex: Vertex, size: i64 },
    /// The in-progress polygon refused the vertex.
    Polygon(PolygonError),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::OutOfGrid { vertex, size } => {
                write!(f, "vertex {vertex} is outside the {size}x{size} grid")
            }
            SheetError::Polygon(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Polygon(e) => Some(e),
            SheetError::OutOfGrid { .. } => None,
        }
    }
}

impl From<PolygonError> for SheetError {
    fn from(e: PolygonError) -> Self {
        SheetError::Polygon(e)
    }
}

/// A polygon on the board plus its presentation attributes.
#[derive(Clone, Debug)]
pub struct Figure {
    pub polygon: Polygon,
    pub color: Color,
    /// Set when the figure matched an earlier one on close.
    pub matched_earlier: bool,
}

/// What a click did.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// A new figure was started at `index`.
    Started { index: usize },
    /// The figure at `index` grew to `vertices` vertices.
    Extended { index: usize, vertices: usize },
    /// The figure at `index` closed; `matches` lists earlier equal figures.
    Closed {
        index: usize,
        area: f64,
        matches: Vec<usize>,
    },
}

#[derive(Debug)]
pub struct Sheet {
    cfg: SheetCfg,
    palette: Palette,
    figures: Vec<Figure>,
    drawing: bool,
    match_count: usize,
    next_color: usize,
    cache: FormCache,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new(SheetCfg::default())
    }
}

impl Sheet {
    pub fn new(cfg: SheetCfg) -> Self {
        Self {
            palette: cfg.palette(),
            cfg,
            figures: Vec::new(),
            drawing: false,
            match_count: 0,
            next_color: 0,
            cache: FormCache::new(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &SheetCfg {
        &self.cfg
    }

    #[inline]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Number of closed figures that matched an earlier figure.
    #[inline]
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Area of the most recent figure.
    pub fn last_area(&self) -> Option<f64> {
        self.figures.last().map(|f| f.polygon.area())
    }

    /// Start a figure at `v`, or feed `v` to the one in progress.
    pub fn click(&mut self, v: Vertex) -> Result<ClickOutcome, SheetError> {
        if !self.cfg.contains(v) {
            return Err(SheetError::OutOfGrid {
                vertex: v,
                size: self.cfg.grid_size,
            });
        }
        if !self.drawing {
            let color = self.cfg.color.pick(&self.palette, self.next_color);
            if matches!(self.cfg.color, ColorPolicy::Cycle) {
                self.next_color += 1;
            }
            self.figures.push(Figure {
                polygon: Polygon::new(v),
                color,
                matched_earlier: false,
            });
            self.drawing = true;
            let index = self.figures.len() - 1;
            debug!(index, vertex = %v, "figure started");
            return Ok(ClickOutcome::Started { index });
        }

        let index = self.figures.len() - 1;
        let state = self.figures[index]
            .polygon
            .add_vertex_cached(v, &mut self.cache)?;
        match state {
            PolygonState::Open => Ok(ClickOutcome::Extended {
                index,
                vertices: self.figures[index].polygon.vertex_count(),
            }),
            PolygonState::Closed => {
                self.drawing = false;
                let matches = self.close_figure(index);
                let area = self.figures[index].polygon.area();
                debug!(index, area, matches = matches.len(), "figure closed");
                Ok(ClickOutcome::Closed {
                    index,
                    area,
                    matches,
                })
            }
        }
    }

    fn close_figure(&mut self, index: usize) -> Vec<usize> {
        let current = &self.figures[index].polygon;
        let matches: Vec<usize> = self.figures[..index]
            .iter()
            .enumerate()
            .filter(|(_, f)| f.polygon.same_shape(current))
            .map(|(j, _)| j)
            .collect();
        if let Some(&first) = matches.first() {
            let color = self.figures[first].color;
            for &j in &matches[1..] {
                self.figures[j].color = color;
            }
            let fig = &mut self.figures[index];
            fig.color = color;
            fig.matched_earlier = true;
            self.match_count += 1;
        }
        matches
    }

    /// Remove the most recent figure. Colors changed by its close stay changed.
    pub fn undo(&mut self) -> Option<Figure> {
        let fig = self.figures.pop()?;
        if !fig.polygon.is_closed() {
            self.drawing = false;
        }
        if fig.matched_earlier {
            self.match_count -= 1;
        }
        debug!(remaining = self.figures.len(), "figure removed");
        Some(fig)
    }

    /// Closed figures grouped by shape.
    ///
    /// Each figure joins the first group whose first member it equals. Equality
    /// is not guaranteed transitive, so membership depends on draw order.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, f) in self.figures.iter().enumerate() {
            if !f.polygon.is_closed() {
                continue;
            }
            let slot = groups
                .iter()
                .position(|g| self.figures[g[0]].polygon.same_shape(&f.polygon));
            match slot {
                Some(k) => groups[k].push(i),
                None => groups.push(vec![i]),
            }
        }
        groups
    }
}
