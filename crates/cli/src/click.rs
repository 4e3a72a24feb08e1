//! Line-driven click session over stdin.
//!
//! Each line is one click: `px py` (pixel indices, top-left origin) or, with
//! grid coordinates enabled, `x,y`. `clear` empties the set, `quit` stops.
//! After every accepted line the ASCII view and the coverage line are printed.

use anyhow::Result;
use hullscan::render::AsciiRenderer;
use hullscan::session::Session;
use std::io::{BufRead, Write};

use crate::load::parse_pair;

pub fn run<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    session: &mut Session,
    renderer: &mut AsciiRenderer,
    grid_coords: bool,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" => break,
            "clear" => session.clear(),
            _ => {
                let outcome = if grid_coords {
                    parse_pair(line).and_then(|p| Ok(session.toggle(p)?))
                } else {
                    parse_pixel(line).and_then(|(px, py)| Ok(session.click(px, py)?))
                };
                match outcome {
                    Ok(o) => writeln!(out, "{:?} {}", o.toggle, o.point)?,
                    Err(err) => {
                        tracing::warn!(line, error = %err, "click_ignored");
                        writeln!(out, "ignored: {err}")?;
                        continue;
                    }
                }
            }
        }
        write!(out, "{}", session.render(renderer))?;
    }
    Ok(())
}

fn parse_pixel(line: &str) -> Result<(u32, u32)> {
    let mut it = line.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty());
    match (it.next(), it.next(), it.next()) {
        (Some(px), Some(py), None) => Ok((px.parse()?, py.parse()?)),
        _ => anyhow::bail!("expected two pixel coordinates, got {line:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullscan::input::{ViewCfg, Viewport};
    use hullscan::points::Grid;
    use hullscan::render::AsciiCfg;
    use hullscan::geom::Point;
    use std::io::Cursor;

    fn pixel_of(session: &Session, p: Point) -> (u32, u32) {
        let c = session.viewport().to_pixel(p);
        (c.x as u32, c.y as u32)
    }

    fn setup(size: i32) -> (Session, AsciiRenderer) {
        let grid = Grid::new(size).unwrap();
        let view = Viewport::new(grid, ViewCfg { cell: 10.0 }).unwrap();
        let renderer = AsciiRenderer::new(AsciiCfg {
            grid,
            ..AsciiCfg::default()
        });
        (Session::new(view), renderer)
    }

    #[test]
    fn grid_coordinate_session() {
        let (mut session, mut renderer) = setup(3);
        let script = "0,0\n2,0\n1,2\n2,0\nquit\n0,1\n";
        let mut out = Vec::new();
        run(Cursor::new(script), &mut out, &mut session, &mut renderer, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Added (0, 0)"));
        assert!(text.contains("Removed (2, 0)"));
        assert!(text.ends_with("2 of 2 points on the convex hull (100%)\n"));
        assert_eq!(session.points().len(), 2);
    }

    #[test]
    fn pixel_session_ignores_bad_lines() {
        let (mut session, mut renderer) = setup(4);
        let (px, py) = pixel_of(&session, Point::new(3, 3));
        let script = format!("{px} {py}\nnonsense\n999 0\n");
        let mut out = Vec::new();
        run(Cursor::new(script), &mut out, &mut session, &mut renderer, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("ignored:").count(), 2);
        assert_eq!(session.points().as_slice(), &[Point::new(3, 3)]);
    }

    #[test]
    fn clear_resets() {
        let (mut session, mut renderer) = setup(3);
        let mut out = Vec::new();
        run(Cursor::new("1,1\nclear\n"), &mut out, &mut session, &mut renderer, true).unwrap();
        assert!(session.points().is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("0 of 0 points on the convex hull\n"));
    }
}
