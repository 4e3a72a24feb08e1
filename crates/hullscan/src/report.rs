//! Coverage summary: how many of the input points ended up on the hull.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geom::{Coord, Point};
use crate::hull::Hull;

/// Hull size against input size.
///
/// `percent` is `100 * hull / points`, absent when there are no points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub hull: usize,
    pub points: usize,
    pub percent: Option<f64>,
}

impl Coverage {
    pub fn new(hull: usize, points: usize) -> Self {
        let percent = (points > 0).then(|| 100.0 * hull as f64 / points as f64);
        Self {
            hull,
            points,
            percent,
        }
    }

    pub fn of<T: Coord>(points: &[Point<T>], hull: &Hull<T>) -> Self {
        Self::new(hull.len(), points.len())
    }

    /// Percentage with three significant digits, e.g. `80.0`, `33.3`, `100`.
    pub fn percent_label(&self) -> Option<String> {
        self.percent.map(|p| format_significant(p, 3))
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} points on the convex hull", self.hull, self.points)?;
        if let Some(label) = self.percent_label() {
            write!(f, " ({label}%)")?;
        }
        Ok(())
    }
}

/// Round to `digits` significant digits and print without exponent.
pub fn format_significant(value: f64, digits: u32) -> String {
    let digits = digits.max(1) as i32;
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", (digits - 1) as usize, value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    // Rounding can carry into the next decade (99.96 -> 100).
    let magnitude = rounded.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    format!("{rounded:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::find_convex_hull;

    #[test]
    fn significant_digits() {
        assert_eq!(format_significant(80.0, 3), "80.0");
        assert_eq!(format_significant(100.0, 3), "100");
        assert_eq!(format_significant(100.0 / 3.0, 3), "33.3");
        assert_eq!(format_significant(200.0 / 3.0, 3), "66.7");
        assert_eq!(format_significant(100.0 / 7.0, 3), "14.3");
        assert_eq!(format_significant(1.0 / 3.0, 3), "0.333");
        assert_eq!(format_significant(99.96, 3), "100");
        assert_eq!(format_significant(5.0, 3), "5.00");
        assert_eq!(format_significant(0.0, 3), "0.00");
    }

    #[test]
    fn square_plus_center_message() {
        let points: Vec<Point> = [(0, 0), (0, 10), (10, 10), (10, 0), (5, 5)]
            .into_iter()
            .map(Point::from)
            .collect();
        let hull = find_convex_hull(&points);
        let cov = Coverage::of(&points, &hull);
        assert_eq!(cov.hull, 4);
        assert_eq!(cov.points, 5);
        assert_eq!(cov.percent_label().as_deref(), Some("80.0"));
        assert_eq!(cov.message(), "4 of 5 points on the convex hull (80.0%)");
    }

    #[test]
    fn empty_has_no_percentage() {
        let cov = Coverage::new(0, 0);
        assert_eq!(cov.percent, None);
        assert_eq!(cov.to_string(), "0 of 0 points on the convex hull");
    }
}
