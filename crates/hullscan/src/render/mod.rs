//! Renderers for a point set, its hull, and the coverage line.
//!
//! The hull engine knows nothing about drawing; a `Renderer` receives the
//! finished snapshot and produces whatever its output type is.
//!
//! - `AsciiRenderer`: character grid for terminals.
//! - `SvgRenderer`: standalone SVG document.

mod ascii;
mod svg;

pub use ascii::{AsciiCfg, AsciiRenderer};
pub use svg::{SvgCfg, SvgRenderer};

use crate::geom::Point;
use crate::hull::Hull;
use crate::points::Grid;
use crate::report::Coverage;

/// Draws one hull snapshot.
pub trait Renderer {
    type Output;

    fn render(&mut self, points: &[Point<i32>], hull: &Hull<i32>, coverage: &Coverage)
        -> Self::Output;
}

/// Grid cells on the segment `a -> b` (Bresenham), both ends included.
///
/// Steps are taken in `i64`, so any pair of `i32` endpoints is accepted; the
/// output holds one cell per step along the longer axis.
pub fn line_cells(a: Point<i32>, b: Point<i32>) -> Vec<Point<i32>> {
    let (x1, y1) = (i64::from(b.x), i64::from(b.y));
    let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = (x1 - x).signum();
    let sy = (y1 - y).signum();
    let mut err = dx + dy;
    let mut cells = Vec::new();
    loop {
        // x and y stay between the endpoints, so they fit back into i32.
        cells.push(Point::new(x as i32, y as i32));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// Cells of `a -> b` that lie on `grid`.
///
/// The segment is first clipped (Liang-Barsky) to the cell rectangle
/// `[-0.5, size - 0.5]^2`, so the work is bounded by the grid side rather than
/// by the segment length. Segments with both ends on the grid rasterize
/// exactly like `line_cells`.
pub fn clipped_line_cells(a: Point<i32>, b: Point<i32>, grid: Grid) -> Vec<Point<i32>> {
    let Some((a, b)) = clip_to_grid(a, b, grid) else {
        return Vec::new();
    };
    let mut cells = line_cells(a, b);
    cells.retain(|&c| grid.contains(c));
    cells
}

fn clip_to_grid(a: Point<i32>, b: Point<i32>, grid: Grid) -> Option<(Point<i32>, Point<i32>)> {
    let (lo, hi) = (-0.5, f64::from(grid.size) - 0.5);
    let (x0, y0) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - x0, f64::from(b.y) - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, x0 - lo), (dx, hi - x0), (-dy, y0 - lo), (dy, hi - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    if t0 > t1 {
        return None;
    }
    // Rounded ends land at most one cell off the grid; callers filter them.
    let at = |t: f64| Point::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

#[cfg(test)]
mod tests;
