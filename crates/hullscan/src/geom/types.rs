//! Grid point type and the scalar bound used by the hull engine.
//!
//! - `Coord`: a copyable, ordered coordinate type with a `Wide` companion in
//!   which differences of two coordinates and products of two differences are
//!   exact. `i32` (widened to `i128`) is the grid default.
//! - `Point`: immutable `(x, y)` value; equality is exact coordinate equality.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Scalar usable as a point coordinate.
pub trait Coord: Copy + PartialOrd + Sub<Output = Self> + Default + fmt::Debug {
    /// Holds `(a - b) * (c - d) - (e - f) * (g - h)` for any coordinates
    /// without overflow. `Wide::default()` must be zero.
    type Wide: Copy
        + PartialOrd
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>
        + Default
        + fmt::Debug;

    fn widen(self) -> Self::Wide;
}

macro_rules! impl_coord {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Coord for $t {
                type Wide = $wide;
                #[inline]
                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }
            }
        )*
    };
}

impl_coord!(i8 => i64, i16 => i64, i32 => i128, f32 => f64, f64 => f64);

/// Sign as `-1`, `0` or `1` (incomparable values count as zero).
#[inline]
pub fn sign<W: PartialOrd + Default>(w: W) -> i8 {
    match w.partial_cmp(&W::default()) {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        _ => 0,
    }
}

/// A 2D grid point. Also used as a direction vector (`p - base`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Direction vector `to - self`, computed in the wide type.
    #[inline]
    pub fn offset(self, to: Point<T>) -> Point<T::Wide> {
        Point {
            x: to.x.widen() - self.x.widen(),
            y: to.y.widen() - self.y.widen(),
        }
    }

    /// Squared Euclidean distance to `other`, exact in the wide type.
    #[inline]
    pub fn dist2(self, other: Point<T>) -> T::Wide {
        let d = self.offset(other);
        d.x * d.x + d.y * d.y
    }
}

impl<T: Coord + Into<f64>> Point<T> {
    /// Continuous copy for rendering and viewport math.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x.into(), self.y.into())
    }
}

impl<T: Coord> Sub for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Point<T>) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
