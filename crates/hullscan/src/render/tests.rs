use super::*;
use crate::hull::find_convex_hull;
use crate::input::ViewCfg;
use crate::points::Grid;

fn square_plus_center() -> Vec<Point<i32>> {
    [(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]
        .into_iter()
        .map(Point::from)
        .collect()
}

#[test]
fn bresenham_covers_both_ends() {
    let cells = line_cells(Point::new(0, 0), Point::new(3, 1));
    assert_eq!(cells.first(), Some(&Point::new(0, 0)));
    assert_eq!(cells.last(), Some(&Point::new(3, 1)));
    assert_eq!(cells.len(), 4);
    assert_eq!(line_cells(Point::new(2, 2), Point::new(2, 2)), vec![Point::new(2, 2)]);
    let down = line_cells(Point::new(1, 4), Point::new(1, 0));
    assert_eq!(down.len(), 5);
    assert!(down.iter().all(|p| p.x == 1));
}

#[test]
fn clipping_bounds_far_segments() {
    let grid = Grid::new(5).unwrap();
    let row: Vec<_> = (0..5).map(|x| Point::new(x, 2)).collect();
    assert_eq!(
        clipped_line_cells(Point::new(i32::MIN, 2), Point::new(i32::MAX, 2), grid),
        row
    );
    assert!(clipped_line_cells(Point::new(-9, -9), Point::new(-1, 9), grid).is_empty());
    assert_eq!(
        clipped_line_cells(Point::new(0, 0), Point::new(3, 1), grid),
        line_cells(Point::new(0, 0), Point::new(3, 1))
    );
    assert_eq!(line_cells(Point::new(i32::MAX, 0), Point::new(i32::MAX - 2, 0)).len(), 3);
}

#[test]
fn ascii_far_hull_vertex_is_clipped() {
    let points = vec![Point::new(0, 0), Point::new(2_000_000_000, 0), Point::new(0, 1)];
    let hull = find_convex_hull(&points);
    let cov = Coverage::of(&points, &hull);
    let mut r = AsciiRenderer::new(AsciiCfg {
        grid: Grid::new(5).unwrap(),
        footer: false,
        ..AsciiCfg::default()
    });
    let expected = "\
.....
.....
.....
#****
#****
";
    assert_eq!(r.render(&points, &hull, &cov), expected);
}

#[test]
fn ascii_square_with_center() {
    let points = square_plus_center();
    let hull = find_convex_hull(&points);
    let cov = Coverage::of(&points, &hull);
    let mut r = AsciiRenderer::new(AsciiCfg {
        grid: Grid::new(5).unwrap(),
        ..AsciiCfg::default()
    });
    let expected = "\
#***#
*...*
*.o.*
*...*
#***#
4 of 5 points on the convex hull (80.0%)
";
    assert_eq!(r.render(&points, &hull, &cov), expected);
}

#[test]
fn ascii_segment_and_no_footer() {
    let points = vec![Point::new(0, 0), Point::new(2, 0)];
    let hull = find_convex_hull(&points);
    let cov = Coverage::of(&points, &hull);
    let mut r = AsciiRenderer::new(AsciiCfg {
        grid: Grid::new(3).unwrap(),
        footer: false,
        ..AsciiCfg::default()
    });
    assert_eq!(r.render(&points, &hull, &cov), "...\n...\n#*#\n");
}

#[test]
fn ascii_skips_points_off_grid() {
    let points = vec![Point::new(1, 1), Point::new(7, 7)];
    let hull = Hull::default();
    let cov = Coverage::of(&points, &hull);
    let mut r = AsciiRenderer::new(AsciiCfg {
        grid: Grid::new(2).unwrap(),
        footer: false,
        ..AsciiCfg::default()
    });
    assert_eq!(r.render(&points, &hull, &cov), ".o\n..\n");
}

#[test]
fn svg_contains_outline_points_and_caption() {
    let points = square_plus_center();
    let hull = find_convex_hull(&points);
    let cov = Coverage::of(&points, &hull);
    let mut r = SvgRenderer::new(SvgCfg {
        grid: Grid::new(5).unwrap(),
        view: ViewCfg { cell: 10.0 },
        ..SvgCfg::default()
    })
    .unwrap();
    let svg = r.render(&points, &hull, &cov);
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    // Cell centres: (0,0) -> (5,45), (4,0) -> (45,45), (4,4) -> (45,5), (0,4) -> (5,5).
    assert!(svg.contains(r#"<polygon points="5.0,45.0 45.0,45.0 45.0,5.0 5.0,5.0""#));
    assert_eq!(svg.matches("<circle").count(), 5);
    assert_eq!(svg.matches(r##"fill="#d33"/>"##).count(), 4);
    assert!(svg.contains("4 of 5 points on the convex hull (80.0%)"));
}

#[test]
fn svg_two_point_hull_is_a_polyline() {
    let points = vec![Point::new(0, 0), Point::new(3, 3)];
    let hull = find_convex_hull(&points);
    let cov = Coverage::of(&points, &hull);
    let mut r = SvgRenderer::new(SvgCfg {
        grid: Grid::new(4).unwrap(),
        caption: false,
        ..SvgCfg::default()
    })
    .unwrap();
    let svg = r.render(&points, &hull, &cov);
    assert!(svg.contains("<polyline"));
    assert!(!svg.contains("<polygon"));
    assert!(!svg.contains("<text"));
}
