//! Pointer input: translate pixel clicks to grid cells.
//!
//! The canvas has its origin at the top-left with y growing downward; the grid
//! has its origin at the bottom-left with y growing upward. `Viewport` holds the
//! grid-to-pixel affine map `x ↦ M x + t` and its inverse.

use nalgebra::{Matrix2, Vector2};

use crate::geom::Point;
use crate::points::{Grid, GridError};

/// Pixel layout of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCfg {
    /// Edge length of one grid cell in pixels.
    pub cell: f64,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self { cell: 6.0 }
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn apply(&self, x: Vector2<f64>) -> Vector2<f64> {
        self.m * x + self.t
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
}

/// Grid placed on a pixel canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    grid: Grid,
    cfg: ViewCfg,
    to_pixel: Affine2,
    to_grid: Affine2,
}

impl Viewport {
    pub fn new(grid: Grid, cfg: ViewCfg) -> Result<Self, GridError> {
        if !cfg.cell.is_finite() || cfg.cell <= 0.0 {
            return Err(GridError::invalid(format!(
                "cell size must be positive, got {}",
                cfg.cell
            )));
        }
        let side = grid.size as f64 * cfg.cell;
        let to_pixel = Affine2 {
            m: Matrix2::new(cfg.cell, 0.0, 0.0, -cfg.cell),
            t: Vector2::new(0.0, side),
        };
        let to_grid = to_pixel
            .inverse()
            .ok_or_else(|| GridError::invalid("degenerate viewport"))?;
        Ok(Self {
            grid,
            cfg,
            to_pixel,
            to_grid,
        })
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn cell(&self) -> f64 {
        self.cfg.cell
    }

    /// Canvas side length in pixels.
    pub fn side_px(&self) -> f64 {
        self.grid.size as f64 * self.cfg.cell
    }

    /// Pixel position of the centre of grid cell `p`.
    pub fn to_pixel(&self, p: Point<i32>) -> Vector2<f64> {
        self.to_pixel.apply(p.to_vec2() + Vector2::new(0.5, 0.5))
    }

    /// Grid cell under pixel `(px, py)`, sampled at the pixel centre.
    pub fn cell_at(&self, px: u32, py: u32) -> Result<Point<i32>, GridError> {
        let centre = Vector2::new(px as f64 + 0.5, py as f64 + 0.5);
        let g = self.to_grid.apply(centre);
        let p = Point::new(g.x.floor() as i32, g.y.floor() as i32);
        if self.grid.contains(p) {
            Ok(p)
        } else {
            Err(GridError::OutsideGrid { px, py })
        }
    }
}
