//! Translates a raveled connectivity offset list into per-dimension deltas,
//! and checks neighbor validity for border pixels.

use crate::error::MaxTreeError;
use crate::shape::Shape;

/// A raveled neighbor offset, as it would be added to a flat pixel index.
pub type Offset = isize;

/// The per-dimension coordinate delta table derived from a connectivity and
/// a shape: `Points::row(k)` is the delta for `Connectivity[k]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Points {
    rows: Vec<Vec<isize>>,
}

impl Points {
    /// The coordinate delta for the `k`-th connectivity offset.
    pub fn row(&self, k: usize) -> &[isize] {
        &self.rows[k]
    }

    /// The number of neighbor offsets, `K`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no neighbor offsets.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Converts a flat list of raveled neighbor offsets into an explicit
/// per-dimension coordinate delta table.
///
/// Unraveling a signed offset directly is ambiguous — it can wrap across
/// dimension boundaries — so this shifts every offset into the
/// non-negative range by `neg_shift = -min(offsets)`, unravels both the
/// shifted offset and the shifted center, and subtracts: the common shift
/// cancels, leaving the true per-dimension displacement.
///
/// # Errors
///
/// Returns [`MaxTreeError::PreconditionViolation`] if any offset is zero,
/// and [`MaxTreeError::ShapeMismatch`] if the shift places an offset (or
/// the center) outside `[0, P)` for the given `shape`.
pub fn offsets_to_points(offsets: &[Offset], shape: &Shape) -> Result<Points, MaxTreeError> {
    if offsets.is_empty() {
        return Err(MaxTreeError::precondition("connectivity must have at least one offset"));
    }
    if offsets.iter().any(|&o| o == 0) {
        return Err(MaxTreeError::precondition("connectivity offsets must not be zero"));
    }

    let p = shape.size() as isize;
    let neg_shift = -offsets.iter().copied().min().unwrap();

    let center = checked_unravel(neg_shift, p, shape, "connectivity center")?;

    let mut rows = Vec::with_capacity(offsets.len());
    for &offset in offsets {
        let shifted = offset + neg_shift;
        let coords = checked_unravel(shifted, p, shape, "connectivity offset")?;
        let delta = coords.iter().zip(center.iter()).map(|(&c, &ctr)| c - ctr).collect();
        rows.push(delta);
    }

    Ok(Points { rows })
}

fn checked_unravel(index: isize, p: isize, shape: &Shape, what: &str) -> Result<Vec<isize>, MaxTreeError> {
    if index < 0 || index >= p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "{what} falls outside [0, {p}) once shifted into the non-negative range"
        )));
    }
    Ok(shape.unravel(index as usize))
}

/// Whether the neighbor reached by adding `delta` to the coordinates of
/// `index` remains inside the grid.
///
/// Only needs to be called for border pixels (`mask[p] == false`); interior
/// pixels are guaranteed in-bounds for every offset by construction of the
/// mask.
pub fn is_valid(index: usize, delta: &[isize], shape: &Shape) -> bool {
    let coords = shape.unravel(index);
    coords
        .iter()
        .zip(delta.iter())
        .zip(shape.extents().iter())
        .all(|((&c, &d), &extent)| {
            let nc = c + d;
            nc >= 0 && (nc as usize) < extent
        })
}
