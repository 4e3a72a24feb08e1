//! Curated surface for front ends (CLI, bindings).
//!
//! One call per user-visible operation: compute a hull with its coverage, or
//! render a snapshot in one of the supported formats.

use serde::Serialize;

use crate::geom::Point;
use crate::hull::{find_convex_hull, Hull};
use crate::points::{Grid, GridError};
use crate::render::{AsciiCfg, AsciiRenderer, Renderer, SvgCfg, SvgRenderer};
use crate::report::Coverage;

pub use crate::input::{ViewCfg, Viewport};
pub use crate::points::{PointSet, Toggle};
pub use crate::sample::{random_points, ReplayToken};
pub use crate::session::{ClickOutcome, Session};

/// Input points with their hull and coverage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub points: Vec<Point<i32>>,
    pub hull: Hull<i32>,
    pub coverage: Coverage,
}

impl Snapshot {
    pub fn compute(points: &[Point<i32>]) -> Self {
        let hull = find_convex_hull(points);
        let coverage = Coverage::of(points, &hull);
        Self {
            points: points.to_vec(),
            hull,
            coverage,
        }
    }
}

/// Output format for `render`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Svg,
}

pub fn render(
    snapshot: &Snapshot,
    format: Format,
    grid: Grid,
    view: ViewCfg,
) -> Result<String, GridError> {
    let Snapshot {
        points,
        hull,
        coverage,
    } = snapshot;
    Ok(match format {
        Format::Ascii => AsciiRenderer::new(AsciiCfg {
            grid,
            ..AsciiCfg::default()
        })
        .render(points, hull, coverage),
        Format::Svg => SvgRenderer::new(SvgCfg {
            grid,
            view,
            ..SvgCfg::default()
        })?
        .render(points, hull, coverage),
    })
}
