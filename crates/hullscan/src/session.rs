//! Interactive session: click-to-toggle input with a recomputed hull.
//!
//! The session owns the point set. Each toggle mutates it and then recomputes
//! the hull and coverage from scratch; nothing is maintained incrementally.

use crate::geom::Point;
use crate::hull::{find_convex_hull, Hull};
use crate::input::Viewport;
use crate::points::{GridError, PointSet, Toggle};
use crate::render::Renderer;
use crate::report::Coverage;

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub point: Point<i32>,
    pub toggle: Toggle,
}

#[derive(Clone, Debug)]
pub struct Session {
    viewport: Viewport,
    points: PointSet,
    hull: Hull,
    coverage: Coverage,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            points: PointSet::new(),
            hull: Hull::default(),
            coverage: Coverage::new(0, 0),
        }
    }

    /// Start from existing points; every point must lie on the grid.
    pub fn with_points(viewport: Viewport, points: PointSet) -> Result<Self, GridError> {
        let grid = viewport.grid();
        for &p in &points {
            grid.check(p)?;
        }
        let mut session = Self::new(viewport);
        session.points = points;
        session.recompute();
        Ok(session)
    }

    /// Toggle the grid cell under pixel `(px, py)`.
    pub fn click(&mut self, px: u32, py: u32) -> Result<ClickOutcome, GridError> {
        let p = self.viewport.cell_at(px, py)?;
        self.toggle(p)
    }

    /// Toggle a grid point directly.
    pub fn toggle(&mut self, p: Point<i32>) -> Result<ClickOutcome, GridError> {
        let p = self.viewport.grid().check(p)?;
        let toggle = self.points.toggle(p);
        self.recompute();
        tracing::debug!(
            x = p.x,
            y = p.y,
            toggle = ?toggle,
            points = self.points.len(),
            hull = self.hull.len(),
            "toggle"
        );
        Ok(ClickOutcome { point: p, toggle })
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.hull = find_convex_hull(self.points.as_slice());
        self.coverage = Coverage::of(self.points.as_slice(), &self.hull);
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> R::Output {
        renderer.render(self.points.as_slice(), &self.hull, &self.coverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ViewCfg;
    use crate::points::Grid;
    use crate::render::{AsciiCfg, AsciiRenderer};

    fn session(size: i32) -> Session {
        let grid = Grid::new(size).unwrap();
        Session::new(Viewport::new(grid, ViewCfg { cell: 10.0 }).unwrap())
    }

    #[test]
    fn clicks_toggle_and_recompute() {
        let mut s = session(10);
        // Pixel (5, 95) is the centre of cell (0, 0).
        let first = s.click(5, 95).unwrap();
        assert_eq!(first.point, Point::new(0, 0));
        assert_eq!(first.toggle, Toggle::Added);
        s.click(95, 95).unwrap(); // (9, 0)
        s.click(95, 5).unwrap(); // (9, 9)
        s.click(45, 55).unwrap(); // (4, 4)
        assert_eq!(s.points().len(), 4);
        assert_eq!(s.hull().len(), 3);
        assert_eq!(s.coverage().message(), "3 of 4 points on the convex hull (75.0%)");

        // Clicking an existing point removes it.
        let again = s.click(95, 5).unwrap();
        assert_eq!(again.toggle, Toggle::Removed);
        assert_eq!(s.points().len(), 3);
        assert_eq!(s.hull().as_slice(), &[Point::new(0, 0), Point::new(9, 0), Point::new(4, 4)]);
    }

    #[test]
    fn rejects_clicks_and_points_off_grid() {
        let mut s = session(5);
        assert!(matches!(s.click(60, 10), Err(GridError::OutsideGrid { .. })));
        assert!(matches!(
            s.toggle(Point::new(5, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(s.points().is_empty());
    }

    #[test]
    fn with_points_validates_and_computes() {
        let grid = Grid::new(4).unwrap();
        let view = Viewport::new(grid, ViewCfg::default()).unwrap();
        let ok: PointSet = [(0, 0), (3, 0), (0, 3)].into_iter().map(Point::from).collect();
        let s = Session::with_points(view, ok).unwrap();
        assert_eq!(s.hull().len(), 3);
        let bad: PointSet = [(0, 0), (4, 4)].into_iter().map(Point::from).collect();
        assert!(Session::with_points(view, bad).is_err());
    }

    #[test]
    fn clear_and_render() {
        let mut s = session(3);
        s.toggle(Point::new(1, 1)).unwrap();
        let mut r = AsciiRenderer::new(AsciiCfg {
            grid: Grid::new(3).unwrap(),
            ..AsciiCfg::default()
        });
        assert_eq!(
            s.render(&mut r),
            "...\n.#.\n...\n1 of 1 points on the convex hull (100%)\n"
        );
        s.clear();
        assert!(s.hull().is_empty());
        assert_eq!(s.coverage().percent, None);
    }
}
