//! Caller-owned point collections and the grid they live on.
//!
//! - `Grid`: square integer grid `[0, size) x [0, size)`.
//! - `PointSet`: distinct points in insertion order (rendering order), with the
//!   exact-equality toggle used by click input.
//! - `GridError`: validation failures raised by input handling. The hull engine
//!   itself never fails and never sees this type.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::geom::{Coord, Point};
use crate::hull::{find_convex_hull, Hull};

/// Errors raised while mapping input onto the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    InvalidGrid { reason: String },
    OutOfBounds { point: Point<i32>, size: i32 },
    OutsideGrid { px: u32, py: u32 },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => write!(f, "invalid grid: {reason}"),
            Self::OutOfBounds { point, size } => {
                write!(f, "point {point} outside grid [0, {size})")
            }
            Self::OutsideGrid { px, py } => write!(f, "pixel ({px}, {py}) is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

/// Square integer grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self { size: 100 }
    }
}

impl Grid {
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::invalid(format!("size must be positive, got {size}")));
        }
        Ok(Self { size })
    }

    #[inline]
    pub fn contains(&self, p: Point<i32>) -> bool {
        (0..self.size).contains(&p.x) && (0..self.size).contains(&p.y)
    }

    pub fn check(&self, p: Point<i32>) -> Result<Point<i32>, GridError> {
        if self.contains(p) {
            Ok(p)
        } else {
            Err(GridError::OutOfBounds {
                point: p,
                size: self.size,
            })
        }
    }

    /// Number of cells.
    #[inline]
    pub fn capacity(&self) -> usize {
        let side = self.size.max(0) as usize;
        side * side
    }
}

/// Result of toggling a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Distinct points in insertion order.
///
/// A hash index mirrors the ordered list, so membership tests and inserts are
/// O(1) and building a set from `n` points is O(n).
#[derive(Clone, Debug, Default)]
pub struct PointSet<T = i32> {
    points: Vec<Point<T>>,
    index: HashSet<Point<T>>,
}

impl<T: PartialEq> PartialEq for PointSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T: Coord + Eq + Hash> PointSet<T> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            index: HashSet::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, p: Point<T>) -> bool {
        self.index.contains(&p)
    }

    /// Add `p` unless an equal point is present. Returns whether it was added.
    pub fn insert(&mut self, p: Point<T>) -> bool {
        if !self.index.insert(p) {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Remove `p` keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, p: Point<T>) -> bool {
        if !self.index.remove(&p) {
            return false;
        }
        self.points.retain(|q| *q != p);
        true
    }

    /// Remove `p` if present, add it otherwise.
    pub fn toggle(&mut self, p: Point<T>) -> Toggle {
        if self.remove(p) {
            Toggle::Removed
        } else {
            self.insert(p);
            Toggle::Added
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.index.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Hull of the current snapshot.
    pub fn hull(&self) -> Hull<T> {
        find_convex_hull(&self.points)
    }
}

impl<T: Coord + Eq + Hash> FromIterator<Point<T>> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Coord + Eq + Hash> Extend<Point<T>> for PointSet<T> {
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
