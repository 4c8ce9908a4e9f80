//! Attribute accumulation over the canonical max-tree.

use crate::error::MaxTreeError;
use crate::number::Number;

/// A monoid-shaped accumulation over tree node state, applied in reverse
/// tree order (children before parents).
///
/// `compute_area` is the one concrete instance this crate ships; a caller
/// with a different scalar attribute (bounding-box diagonal, moments,
/// circularity — see §4.3) can implement this trait and reuse
/// [`accumulate`] instead of re-deriving the reverse-order traversal.
pub trait Accumulate {
    /// The per-node seed value before any child has been folded in.
    fn seed(&self, pixel: usize) -> f64;

    /// Folds a child's accumulated value into its parent's.
    fn combine(&self, parent_value: f64, child_value: f64) -> f64;
}

/// The area attribute: `seed` is 1 per pixel, `combine` is addition.
pub struct Area;

impl Accumulate for Area {
    fn seed(&self, _pixel: usize) -> f64 {
        1.0
    }

    fn combine(&self, parent_value: f64, child_value: f64) -> f64 {
        parent_value + child_value
    }
}

/// Computes the area attribute over a built max-tree: `attribute[p]` is the
/// pixel count of the subtree rooted at `p` for canonical nodes (§4.3).
///
/// `image` is taken to match the engine's four-operation external
/// interface; the area attribute never reads pixel values, so it is used
/// only to check that `image` agrees with `parent` in length.
///
/// # Errors
///
/// Returns [`MaxTreeError::ShapeMismatch`] if `image`, `parent`, and
/// `sorted_indices` disagree in length.
pub fn compute_area<T: Number>(image: &[T], parent: &[i64], sorted_indices: &[usize]) -> Result<Vec<f64>, MaxTreeError> {
    if image.len() != parent.len() {
        return Err(MaxTreeError::shape_mismatch(format!(
            "image has {} elements, parent has {}",
            image.len(),
            parent.len()
        )));
    }
    accumulate(&Area, parent, sorted_indices)
}

/// Runs the reverse-order accumulation described in §4.3 for an arbitrary
/// [`Accumulate`] implementation.
///
/// # Errors
///
/// Returns [`MaxTreeError::ShapeMismatch`] if `parent` and
/// `sorted_indices` disagree in length.
pub fn accumulate(attr: &dyn Accumulate, parent: &[i64], sorted_indices: &[usize]) -> Result<Vec<f64>, MaxTreeError> {
    if parent.len() != sorted_indices.len() {
        return Err(MaxTreeError::shape_mismatch(format!(
            "parent has {} elements, sorted_indices has {}",
            parent.len(),
            sorted_indices.len()
        )));
    }

    let p = parent.len();
    log::debug!("computing attribute over {p} pixels");

    let mut values: Vec<f64> = (0..p).map(|pixel| attr.seed(pixel)).collect();

    for &pixel in sorted_indices.iter().rev() {
        let par = parent[pixel] as usize;
        if par == pixel {
            continue; // root: nothing to push further up.
        }
        values[par] = attr.combine(values[par], values[pixel]);
    }

    Ok(values)
}
