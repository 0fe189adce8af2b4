//! Boundary policies: how samples outside a signal are fetched or synthesized.
//!
//! An interpolation neighborhood may reach past either end of the source.
//! [`BoundaryType`] selects what such a sample is worth:
//!
//! | policy       | sample at `i` outside `[0, n)`                         |
//! |--------------|--------------------------------------------------------|
//! | `NoBoundary` | undefined; the interpolators return the default value   |
//! | `Zero`       | `0`                                                    |
//! | `Constant`   | the nearest edge sample                                |
//! | `Mirror`     | reflected off the edges, edge repeated (`-1 → 0`)      |
//! | `Periodic`   | `i mod n`                                              |
//!
//! In 2-D the row and column are resolved independently; each neighbor is
//! resolved on its own, so partially overlapping neighborhoods mix real
//! and synthesized samples.

use std::fmt;
use std::str::FromStr;

use svi_core::{Error, Sample};

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Selects the boundary policy applied to out-of-range samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryType {
    /// Out-of-range neighborhoods are undefined.
    NoBoundary,
    /// Out-of-range samples are zero.
    #[default]
    Zero,
    /// Out-of-range samples repeat the nearest edge sample.
    Constant,
    /// The signal is mirrored at its edges.
    Mirror,
    /// The signal repeats with period equal to its length.
    Periodic,
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoBoundary => "NoBoundary",
            Self::Zero => "Zero",
            Self::Constant => "Constant",
            Self::Mirror => "Mirror",
            Self::Periodic => "Periodic",
        };
        f.write_str(name)
    }
}

impl FromStr for BoundaryType {
    type Err = Error;

    /// Case-insensitive; accepts any text containing the policy name, so
    /// `"Mirror"`, `"MIRROR"` and `"mirror boundary"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.contains("noboundary") || lower.contains("no boundary") {
            Ok(Self::NoBoundary)
        } else if lower.contains("zero") {
            Ok(Self::Zero)
        } else if lower.contains("constant") {
            Ok(Self::Constant)
        } else if lower.contains("mirror") {
            Ok(Self::Mirror)
        } else if lower.contains("periodic") {
            Ok(Self::Periodic)
        } else {
            Err(Error::InvalidArgument(format!("unknown boundary type '{s}'")))
        }
    }
}

/// Clamp `i` to `[0, len)`.  `len` must be positive.
#[inline]
pub fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}

/// Fold `i` into `[0, len)` as a triangle wave of period `2 * len`.
///
/// The edge sample is repeated: for `len == 4` the indices `-4..8` map to
/// `3 2 1 0 | 0 1 2 3 | 3 2 1 0`.  `len` must be positive.
#[inline]
pub fn mirror_index(i: isize, len: usize) -> usize {
    let n = len as isize;
    let r = i.rem_euclid(2 * n);
    if r < n {
        r as usize
    } else {
        (2 * n - 1 - r) as usize
    }
}

/// Wrap `i` into `[0, len)`, correcting negative remainders.  `len` must be
/// positive.
#[inline]
pub fn periodic_index(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// Map a possibly out-of-range index to a valid one.
///
/// Returns `None` when the policy has no valid index to offer: `NoBoundary`
/// and `Zero` outside `[0, len)`, and every policy when `len == 0`.
pub fn map_index(i: isize, len: usize, boundary: BoundaryType) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }
    match boundary {
        BoundaryType::NoBoundary | BoundaryType::Zero => None,
        BoundaryType::Constant => Some(clamp_index(i, len)),
        BoundaryType::Mirror => Some(mirror_index(i, len)),
        BoundaryType::Periodic => Some(periodic_index(i, len)),
    }
}

/// Sample of `src` at `i`, extended with `boundary`.
///
/// Positions with no valid counterpart yield `T::default()`.
#[inline]
pub fn value_at<T: Sample>(src: &Vector<T>, i: isize, boundary: BoundaryType) -> T {
    match map_index(i, src.size(), boundary) {
        Some(idx) => src.at(idx),
        None => T::default(),
    }
}

/// Sample of `src` at `(row, col)`, resolving rows and columns independently.
#[inline]
pub fn value_at_2d<T: Sample>(
    src: &Matrix<T>,
    row: isize,
    col: isize,
    boundary: BoundaryType,
) -> T {
    match (
        map_index(row, src.rows(), boundary),
        map_index(col, src.columns(), boundary),
    ) {
        (Some(r), Some(c)) => src.at(r, c),
        _ => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_clamps_to_edges() {
        let b = BoundaryType::Constant;
        assert_eq!(map_index(-3, 5, b), Some(0));
        assert_eq!(map_index(-1, 5, b), Some(0));
        assert_eq!(map_index(4, 5, b), Some(4));
        assert_eq!(map_index(5, 5, b), Some(4));
        assert_eq!(map_index(99, 5, b), Some(4));
    }

    #[test]
    fn zero_and_no_boundary_have_no_outside_index() {
        for b in [BoundaryType::Zero, BoundaryType::NoBoundary] {
            assert_eq!(map_index(-1, 3, b), None);
            assert_eq!(map_index(3, 3, b), None);
            assert_eq!(map_index(2, 3, b), Some(2));
        }
    }

    #[test]
    fn mirror_len1_len2_len4() {
        for i in -8..=8 {
            assert_eq!(mirror_index(i, 1), 0);
        }

        let expected_len2 = [0, 1, 1, 0, 0, 1, 1, 0];
        for (i, expected) in (-4..4).zip(expected_len2) {
            assert_eq!(mirror_index(i, 2), expected, "i = {i}");
        }

        let cases_len4 = [
            (-9, 0),
            (-8, 0),
            (-5, 3),
            (-4, 3),
            (-3, 2),
            (-2, 1),
            (-1, 0),
            (0, 0),
            (3, 3),
            (4, 3),
            (5, 2),
            (7, 0),
            (8, 0),
            (9, 1),
        ];
        for (i, expected) in cases_len4 {
            assert_eq!(mirror_index(i, 4), expected, "i = {i}");
        }
    }

    #[test]
    fn periodic_wraps_negative_indices() {
        assert_eq!(periodic_index(-1, 4), 3);
        assert_eq!(periodic_index(-4, 4), 0);
        assert_eq!(periodic_index(-5, 4), 3);
        assert_eq!(periodic_index(9, 4), 1);
    }

    #[test]
    fn empty_source_never_maps() {
        for b in [BoundaryType::Constant, BoundaryType::Mirror, BoundaryType::Periodic] {
            assert_eq!(map_index(0, 0, b), None);
        }
        let v = Vector::<f32>::zeros(0);
        assert_eq!(value_at(&v, 0, BoundaryType::Periodic), 0.0);
    }

    #[test]
    fn two_dimensional_lookup_resolves_axes_independently() {
        let m = Matrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(value_at_2d(&m, -1, 1, BoundaryType::Constant), 2);
        assert_eq!(value_at_2d(&m, 2, -1, BoundaryType::Periodic), 3);
        assert_eq!(value_at_2d(&m, -1, 3, BoundaryType::Mirror), 3);
        assert_eq!(value_at_2d(&m, 0, 3, BoundaryType::Zero), 0);
        assert_eq!(value_at_2d(&m, 1, 2, BoundaryType::NoBoundary), 6);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Mirror".parse::<BoundaryType>(), Ok(BoundaryType::Mirror));
        assert_eq!(
            "periodic boundary".parse::<BoundaryType>(),
            Ok(BoundaryType::Periodic)
        );
        assert_eq!("NoBoundary".parse::<BoundaryType>(), Ok(BoundaryType::NoBoundary));
        assert!("wrap".parse::<BoundaryType>().is_err());
        for b in [
            BoundaryType::NoBoundary,
            BoundaryType::Zero,
            BoundaryType::Constant,
            BoundaryType::Mirror,
            BoundaryType::Periodic,
        ] {
            assert_eq!(b.to_string().parse::<BoundaryType>(), Ok(b));
        }
    }
}
