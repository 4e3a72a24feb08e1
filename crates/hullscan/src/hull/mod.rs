//! Graham-scan convex hull over exact grid points.
//!
//! Purpose
//! - Turn a snapshot of points into the ordered hull boundary: counter-clockwise,
//!   starting at the pivot (lowest y, then lowest x).
//!
//! Algorithm
//! - Pivot selection, then an angular sort around the pivot with
//!   `geom::compare_angle`, then a single monotonic-stack pass that pops every
//!   vertex not making a strict left turn.
//! - Points at the same angle from the pivot are ordered nearer first, so a
//!   collinear run is always pruned down to its far end. This makes the sort a
//!   total order and the output independent of input order.
//! - Duplicate coordinates are collapsed during the scan.
//!
//! Cost: O(n log n) sort plus an amortized O(n) scan. No state is kept between
//! calls; the input slice is only read.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::geom::{compare_angle, Coord, Point};

/// Ordered convex hull boundary (counter-clockwise, pivot first).
///
/// Invariants:
/// - Every vertex is a vertex of the input's convex hull.
/// - No three cyclically consecutive vertices are collinear.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hull<T = i32> {
    pub vertices: Vec<Point<T>>,
}

impl<T: Coord> Hull<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex, the lowest-then-leftmost input point.
    #[inline]
    pub fn pivot(&self) -> Option<Point<T>> {
        self.vertices.first().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point<T>] {
        &self.vertices
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.vertices.iter()
    }

    pub fn contains_vertex(&self, p: Point<T>) -> bool {
        self.vertices.contains(&p)
    }

    /// Boundary segments in order. A closed loop for three or more vertices,
    /// the single segment for two, nothing below that.
    pub fn edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.vertices.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    pub fn into_vec(self) -> Vec<Point<T>> {
        self.vertices
    }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Lowest y, ties broken by lowest x. `None` for an empty input.
pub fn find_pivot<T: Coord>(points: &[Point<T>]) -> Option<Point<T>> {
    points.iter().copied().reduce(|best, p| {
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            p
        } else {
            best
        }
    })
}

/// Sort key around `pivot`: angle first, then distance (nearer first).
fn angular_order<T: Coord>(pivot: Point<T>, a: Point<T>, b: Point<T>) -> Ordering {
    compare_angle(pivot, a, pivot, b).then_with(|| {
        pivot
            .dist2(a)
            .partial_cmp(&pivot.dist2(b))
            .unwrap_or(Ordering::Equal)
    })
}

/// Compute the convex hull of `points`.
///
/// Total over every finite input: empty in, empty out; one point yields that
/// point; all-collinear inputs reduce to their two extreme points.
pub fn find_convex_hull<T: Coord>(points: &[Point<T>]) -> Hull<T> {
    let Some(pivot) = find_pivot(points) else {
        return Hull::default();
    };
    let mut order = points.to_vec();
    order.sort_by(|a, b| angular_order(pivot, *a, *b));

    let mut stack: Vec<Point<T>> = Vec::with_capacity(order.len());
    stack.push(pivot);
    for c in order {
        if stack.last() == Some(&c) {
            continue;
        }
        // Pop while second -> top -> c is not a strict left turn.
        while let [.., second, top] = stack.as_slice() {
            if compare_angle(*top, c, *second, c) == Ordering::Greater {
                break;
            }
            stack.pop();
        }
        stack.push(c);
    }

    tracing::debug!(points = points.len(), hull = stack.len(), "convex_hull");
    Hull { vertices: stack }
}
