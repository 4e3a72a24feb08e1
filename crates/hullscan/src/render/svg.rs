use std::fmt::Write;

use crate::geom::Point;
use crate::hull::Hull;
use crate::input::{ViewCfg, Viewport};
use crate::points::{Grid, GridError};
use crate::report::Coverage;

use super::Renderer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgCfg {
    pub grid: Grid,
    pub view: ViewCfg,
    pub point_radius: f64,
    /// Reserve a strip below the grid for the coverage message.
    pub caption: bool,
}

impl Default for SvgCfg {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            view: ViewCfg::default(),
            point_radius: 2.0,
            caption: true,
        }
    }
}

const CAPTION_PX: f64 = 24.0;

/// Standalone SVG: points as circles, the hull as a closed outline.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    cfg: SvgCfg,
    viewport: Viewport,
}

impl SvgRenderer {
    pub fn new(cfg: SvgCfg) -> Result<Self, GridError> {
        let viewport = Viewport::new(cfg.grid, cfg.view)?;
        Ok(Self { cfg, viewport })
    }

    fn coords(&self, vertices: &[Point<i32>]) -> String {
        vertices
            .iter()
            .map(|&p| {
                let c = self.viewport.to_pixel(p);
                format!("{:.1},{:.1}", c.x, c.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, points: &[Point<i32>], hull: &Hull<i32>, coverage: &Coverage) -> String {
        let side = self.viewport.side_px();
        let height = if self.cfg.caption { side + CAPTION_PX } else { side };
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side:.0}" height="{height:.0}" viewBox="0 0 {side:.0} {height:.0}">"#
        );
        let _ = writeln!(
            out,
            r##"<rect x="0" y="0" width="{side:.0}" height="{side:.0}" fill="white" stroke="#cccccc"/>"##
        );
        match hull.len() {
            0 | 1 => {}
            2 => {
                let _ = writeln!(
                    out,
                    r##"<polyline points="{}" fill="none" stroke="#d33" stroke-width="1.5"/>"##,
                    self.coords(hull.as_slice())
                );
            }
            _ => {
                let _ = writeln!(
                    out,
                    r##"<polygon points="{}" fill="#d33" fill-opacity="0.1" stroke="#d33" stroke-width="1.5"/>"##,
                    self.coords(hull.as_slice())
                );
            }
        }
        let r = self.cfg.point_radius;
        for &p in points {
            let c = self.viewport.to_pixel(p);
            let fill = if hull.contains_vertex(p) { "#d33" } else { "#333" };
            let _ = writeln!(
                out,
                r#"<circle cx="{:.1}" cy="{:.1}" r="{r:.1}" fill="{fill}"/>"#,
                c.x, c.y
            );
        }
        if self.cfg.caption {
            let _ = writeln!(
                out,
                r#"<text x="4" y="{:.0}" font-family="monospace" font-size="12">{}</text>"#,
                side + CAPTION_PX - 8.0,
                coverage
            );
        }
        out.push_str("</svg>\n");
        out
    }
}
