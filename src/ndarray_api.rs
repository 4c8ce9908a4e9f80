//! `ndarray`-facing entry points: thin adapters over the flat-slice engine
//! in [`crate::builder`]/[`crate::filter`] for callers already holding an
//! `ArrayD`.
//!
//! The algorithms themselves stay slice-based — an `ArrayD` in standard
//! (C, row-major) layout *is* a flat slice plus a shape, so these adapters
//! only need to validate the layout, borrow the slice, and reshape the
//! result back.

use ndarray::{ArrayD, ArrayViewD, IxDyn};

use crate::builder::build_max_tree;
use crate::config::BuildConfig;
use crate::error::MaxTreeError;
use crate::filter::{cut_first_filter, direct_filter};
use crate::number::Number;
use crate::shape::Shape;

fn standard_layout_slice<'a, T>(array: &'a ArrayViewD<T>, what: &str) -> Result<&'a [T], MaxTreeError> {
    array
        .as_slice()
        .ok_or_else(|| MaxTreeError::precondition(format!("{what} must be in standard (row-major) layout")))
}

/// [`build_max_tree`] over an `ArrayD`. `image` and `mask` must both be in
/// standard (row-major) layout.
///
/// # Errors
///
/// Returns [`MaxTreeError::PreconditionViolation`] if either array is not
/// in standard layout, in addition to the errors [`build_max_tree`] itself
/// can return.
pub fn build_max_tree_array<T: Number>(
    image: &ArrayViewD<T>,
    mask: &ArrayViewD<bool>,
    connectivity: &[isize],
    sorted_indices: &[usize],
    config: &BuildConfig,
) -> Result<Vec<i64>, MaxTreeError> {
    let shape = Shape::new(image.shape().to_vec())?;
    let image_slice = standard_layout_slice(image, "image")?;
    let mask_slice = standard_layout_slice(mask, "mask")?;
    build_max_tree(image_slice, mask_slice, connectivity, &shape, sorted_indices, config)
}

/// [`direct_filter`] over an `ArrayD`, reshaping the flat output back into
/// `image`'s shape.
///
/// # Errors
///
/// Returns [`MaxTreeError::PreconditionViolation`] if `image` is not in
/// standard layout, in addition to the errors [`direct_filter`] itself can
/// return.
pub fn direct_filter_array<T: Number>(
    image: &ArrayViewD<T>,
    parent: &[i64],
    sorted_indices: &[usize],
    attribute: &[f64],
    threshold: f64,
) -> Result<ArrayD<T>, MaxTreeError> {
    let image_slice = standard_layout_slice(image, "image")?;
    let output = direct_filter(image_slice, parent, sorted_indices, attribute, threshold)?;
    reshape(output, image.shape())
}

/// [`cut_first_filter`] over an `ArrayD`, reshaping the flat output back
/// into `image`'s shape.
///
/// # Errors
///
/// Returns [`MaxTreeError::PreconditionViolation`] if `image` is not in
/// standard layout, in addition to the errors [`cut_first_filter`] itself
/// can return.
pub fn cut_first_filter_array<T: Number>(
    image: &ArrayViewD<T>,
    parent: &[i64],
    sorted_indices: &[usize],
    attribute: &[f64],
    threshold: f64,
) -> Result<ArrayD<T>, MaxTreeError> {
    let image_slice = standard_layout_slice(image, "image")?;
    let output = cut_first_filter(image_slice, parent, sorted_indices, attribute, threshold)?;
    reshape(output, image.shape())
}

fn reshape<T>(flat: Vec<T>, extents: &[usize]) -> Result<ArrayD<T>, MaxTreeError> {
    ArrayD::from_shape_vec(IxDyn(extents), flat)
        .map_err(|e| MaxTreeError::internal(format!("output reshape failed: {e}")))
}
