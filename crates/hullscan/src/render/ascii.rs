use crate::geom::Point;
use crate::hull::Hull;
use crate::points::Grid;
use crate::report::Coverage;

use super::{clipped_line_cells, Renderer};

/// Glyphs and extent of the character grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiCfg {
    pub grid: Grid,
    pub empty: char,
    pub point: char,
    pub edge: char,
    pub vertex: char,
    /// Append the coverage message below the grid.
    pub footer: bool,
}

impl Default for AsciiCfg {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            empty: '.',
            point: 'o',
            edge: '*',
            vertex: '#',
            footer: true,
        }
    }
}

/// One character per grid cell, top row first (largest y).
///
/// Layering: hull edges, then input points, then hull vertices. Points outside
/// the grid are not drawn.
#[derive(Clone, Debug, Default)]
pub struct AsciiRenderer {
    cfg: AsciiCfg,
}

impl AsciiRenderer {
    pub fn new(cfg: AsciiCfg) -> Self {
        Self { cfg }
    }
}

impl Renderer for AsciiRenderer {
    type Output = String;

    fn render(&mut self, points: &[Point<i32>], hull: &Hull<i32>, coverage: &Coverage) -> String {
        let cfg = self.cfg;
        let size = cfg.grid.size.max(0) as usize;
        let mut canvas = vec![vec![cfg.empty; size]; size];
        let mut put = |p: Point<i32>, glyph: char| {
            if cfg.grid.contains(p) {
                canvas[(cfg.grid.size - 1 - p.y) as usize][p.x as usize] = glyph;
            }
        };
        for (a, b) in hull.edges() {
            for cell in clipped_line_cells(a, b, cfg.grid) {
                put(cell, cfg.edge);
            }
        }
        for &p in points {
            put(p, cfg.point);
        }
        for &v in hull {
            put(v, cfg.vertex);
        }

        let mut out = String::with_capacity(size * (size + 1) + 64);
        for row in &canvas {
            out.extend(row.iter());
            out.push('\n');
        }
        if cfg.footer {
            out.push_str(&coverage.to_string());
            out.push('\n');
        }
        out
    }
}
