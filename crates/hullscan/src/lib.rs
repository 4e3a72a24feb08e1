//! Exact convex hulls of integer grid points.
//!
//! Layout
//! - `geom`: `Point` and the region-table angular comparator (pure, leaf).
//! - `hull`: pivot selection and the Graham-scan hull engine.
//! - `points`: caller-owned `PointSet`, `Grid` bounds, `GridError`.
//! - `report`: `Coverage` summary with a three-significant-digit percentage.
//! - `input`, `session`: pixel-to-grid translation and click toggling.
//! - `render`: ASCII and SVG renderers behind the `Renderer` trait.
//! - `sample`: seeded random point sets.
//!
//! The hull engine depends only on `geom`; everything else is a collaborator
//! around it.

pub mod api;
pub mod geom;
pub mod hull;
pub mod input;
pub mod points;
pub mod render;
pub mod report;
pub mod sample;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{compare_angle, Point};
pub use hull::{find_convex_hull, find_pivot, Hull};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{compare_angle, Coord, Point, Region};
    pub use crate::hull::{find_convex_hull, find_pivot, Hull};
    pub use crate::input::{ViewCfg, Viewport};
    pub use crate::points::{Grid, GridError, PointSet, Toggle};
    pub use crate::render::{AsciiCfg, AsciiRenderer, Renderer, SvgCfg, SvgRenderer};
    pub use crate::report::Coverage;
    pub use crate::sample::{random_points, ReplayToken};
    pub use crate::session::{ClickOutcome, Session};
}
