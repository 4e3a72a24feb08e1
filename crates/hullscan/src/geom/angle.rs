//! Exact polar-angle comparison without trigonometry.
//!
//! A direction vector is first classified by its sign pair into one of nine
//! regions (the zero vector, four half-axes, four open quadrants). Regions are
//! numbered counter-clockwise from the positive x-axis, so vectors in different
//! regions compare by region index alone. Inside one region all vectors span
//! at most a right angle and a single cross-product sign decides.
//!
//! Offsets and the cross product are computed in `Coord::Wide`, so integer
//! inputs compare exactly over the whole coordinate range.

use std::cmp::Ordering;

use super::types::{sign, Coord, Point};

/// Sign-pair class of a direction vector, declared in counter-clockwise order.
///
/// The derived `Ord` follows declaration order:
/// `(0,0) < (1,0) < (1,1) < (0,1) < (-1,1) < (-1,0) < (-1,-1) < (0,-1) < (1,-1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Origin,
    PosX,
    Quad1,
    PosY,
    Quad2,
    NegX,
    Quad3,
    NegY,
    Quad4,
}

/// Indexed by `3 * (sign(x) + 1) + (sign(y) + 1)`.
const REGION_BY_SIGNS: [Region; 9] = [
    // x < 0
    Region::Quad3,
    Region::NegX,
    Region::Quad2,
    // x == 0
    Region::NegY,
    Region::Origin,
    Region::PosY,
    // x > 0
    Region::Quad4,
    Region::PosX,
    Region::Quad1,
];

impl Region {
    /// Classify a direction vector.
    #[inline]
    pub fn of<W: Copy + PartialOrd + Default>(v: Point<W>) -> Region {
        let sx = (sign(v.x) + 1) as usize;
        let sy = (sign(v.y) + 1) as usize;
        REGION_BY_SIGNS[3 * sx + sy]
    }

    /// Position in the counter-clockwise sweep, `0..9`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Compare the polar angles of the rays `base1 -> p1` and `base2 -> p2`.
///
/// `Less` means the first ray has the smaller counter-clockwise angle from the
/// positive x-axis, measured in `[0, 2π)`. A zero-length ray sorts before every
/// proper direction; two rays pointing the same way compare `Equal`.
pub fn compare_angle<T: Coord>(
    base1: Point<T>,
    p1: Point<T>,
    base2: Point<T>,
    p2: Point<T>,
) -> Ordering {
    let d1 = base1.offset(p1);
    let d2 = base2.offset(p2);
    let (r1, r2) = (Region::of(d1), Region::of(d2));
    if r1 != r2 {
        return r1.cmp(&r2);
    }
    // Negated cross product: negative when d2 lies counter-clockwise of d1.
    let turn = d1.y * d2.x - d2.y * d1.x;
    match sign(turn) {
        -1 => Ordering::Less,
        1 => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
