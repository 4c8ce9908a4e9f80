//! Attribute-based pruning: the direct filter (for increasing attributes)
//! and the cut-first filter (monotone pruning, correct for any attribute).

use crate::error::MaxTreeError;
use crate::number::Number;

/// Prunes the max-tree with the *direct filter* rule: correct when
/// `attribute` is increasing along every root-to-leaf path (area is
/// increasing). See §4.4.
///
/// `sorted_indices[0]` is the tree root — guaranteed by construction of
/// [`crate::builder::build_max_tree`], which processes the lowest-intensity
/// pixel last in its highest-first sweep, so it ends up adopting every
/// other component in a connected mask.
///
/// # Errors
///
/// Returns [`MaxTreeError::ShapeMismatch`] if `image`, `parent`,
/// `sorted_indices`, and `attribute` disagree in length.
pub fn direct_filter<T: Number>(
    image: &[T],
    parent: &[i64],
    sorted_indices: &[usize],
    attribute: &[f64],
    threshold: f64,
) -> Result<Vec<T>, MaxTreeError> {
    let p = validate_filter_inputs(image, parent, sorted_indices, attribute)?;
    log::debug!("direct_filter: {p} pixels, threshold={threshold}");

    let mut output = vec![T::zero(); p];
    let root = sorted_indices[0];
    output[root] = if attribute[root] < threshold { T::zero() } else { image[root] };

    for &pixel in &sorted_indices[1..] {
        let parent_pixel = parent[pixel] as usize;
        output[pixel] = if image[pixel] == image[parent_pixel] {
            output[parent_pixel]
        } else if attribute[pixel] < threshold {
            output[parent_pixel]
        } else {
            image[pixel]
        };
    }

    Ok(output)
}

/// Prunes the max-tree with the *cut-first filter* rule: monotone pruning
/// from the root, correct even when `attribute` is not increasing. See
/// §4.4.
///
/// The extra disjunct beyond [`direct_filter`] — `output[parent] <
/// image[parent]` — is the monotone-cut memory: once an ancestor has been
/// pruned, no descendant may be reinstated at a higher level even if its
/// own attribute would pass the threshold.
///
/// # Errors
///
/// Returns [`MaxTreeError::ShapeMismatch`] if `image`, `parent`,
/// `sorted_indices`, and `attribute` disagree in length.
pub fn cut_first_filter<T: Number>(
    image: &[T],
    parent: &[i64],
    sorted_indices: &[usize],
    attribute: &[f64],
    threshold: f64,
) -> Result<Vec<T>, MaxTreeError> {
    let p = validate_filter_inputs(image, parent, sorted_indices, attribute)?;
    log::debug!("cut_first_filter: {p} pixels, threshold={threshold}");

    let mut output = vec![T::zero(); p];
    let root = sorted_indices[0];
    output[root] = if attribute[root] < threshold { T::zero() } else { image[root] };

    for &pixel in &sorted_indices[1..] {
        let parent_pixel = parent[pixel] as usize;
        let ancestor_was_cut = output[parent_pixel] < image[parent_pixel];
        output[pixel] = if image[pixel] == image[parent_pixel] {
            output[parent_pixel]
        } else if attribute[pixel] < threshold || ancestor_was_cut {
            output[parent_pixel]
        } else {
            image[pixel]
        };
    }

    Ok(output)
}

fn validate_filter_inputs<T: Number>(
    image: &[T],
    parent: &[i64],
    sorted_indices: &[usize],
    attribute: &[f64],
) -> Result<usize, MaxTreeError> {
    let p = image.len();
    if parent.len() != p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "parent has {} elements, image has {p}",
            parent.len()
        )));
    }
    if sorted_indices.len() != p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "sorted_indices has {} elements, image has {p}",
            sorted_indices.len()
        )));
    }
    if attribute.len() != p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "attribute has {} elements, image has {p}",
            attribute.len()
        )));
    }
    if p == 0 {
        return Err(MaxTreeError::precondition("image must have at least one pixel"));
    }
    Ok(p)
}
