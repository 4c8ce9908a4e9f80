//! The tree builder: union-find over a highest-first pixel sweep, followed
//! by canonicalization.

use crate::config::BuildConfig;
use crate::error::MaxTreeError;
use crate::neighborhood::{is_valid, offsets_to_points};
use crate::number::Number;
use crate::shape::Shape;

/// Sentinel written into `parent`/`zpar` for a pixel not yet visited by the
/// sweep.
const UNSET: i64 = -1;

/// Builds the canonical max-tree of `image` over the given `connectivity`,
/// returning the `parent` array (§3, §4.2 of the design).
///
/// `sorted_indices` must be a permutation of `0..image.len()` in ascending
/// order of `image` value; the sweep consumes it in reverse (maxima
/// first). `mask[p] == false` marks a border pixel requiring a per-neighbor
/// bounds check; `mask[p] == true` promises every raveled-offset neighbor
/// of `p` is inside the grid.
///
/// # Errors
///
/// Returns [`MaxTreeError::ShapeMismatch`] if `image`, `mask`, or
/// `sorted_indices` disagree in length with `shape`, or if `connectivity`
/// is inconsistent with `shape`. Returns
/// [`MaxTreeError::PreconditionViolation`] if `sorted_indices` is not a
/// permutation, is not ascending by intensity, `connectivity` contains a
/// zero offset, or a pixel marked interior by `mask` has a neighbor that
/// actually leaves the grid.
pub fn build_max_tree<T: Number>(
    image: &[T],
    mask: &[bool],
    connectivity: &[isize],
    shape: &Shape,
    sorted_indices: &[usize],
    config: &BuildConfig,
) -> Result<Vec<i64>, MaxTreeError> {
    let p = shape.size();
    log::debug!(
        "build_max_tree: {} pixels, {} dims, {} neighbor offsets",
        p,
        shape.ndim(),
        connectivity.len()
    );

    if image.len() != p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "image has {} elements, shape expects {p}",
            image.len()
        )));
    }
    if mask.len() != p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "mask has {} elements, shape expects {p}",
            mask.len()
        )));
    }
    if sorted_indices.len() != p {
        return Err(MaxTreeError::shape_mismatch(format!(
            "sorted_indices has {} elements, shape expects {p}",
            sorted_indices.len()
        )));
    }

    validate_permutation(sorted_indices, p)?;
    validate_ascending(image, sorted_indices)?;

    let points = offsets_to_points(connectivity, shape)?;

    let mut parent = vec![UNSET; p];
    let mut zpar = vec![UNSET; p];

    for &pixel in sorted_indices.iter().rev() {
        parent[pixel] = pixel as i64;
        zpar[pixel] = pixel as i64;

        for k in 0..points.len() {
            let offset = connectivity[k];
            if !mask[pixel] && !is_valid(pixel, points.row(k), shape) {
                continue;
            }

            let q_signed = pixel as isize + offset;
            if q_signed < 0 || q_signed as usize >= p {
                return Err(MaxTreeError::precondition(format!(
                    "mask marks pixel {pixel} interior but neighbor offset {offset} leaves the grid"
                )));
            }
            let q = q_signed as usize;

            if parent[q] < 0 {
                // Not yet visited: strictly lower intensity, or a later tie.
                continue;
            }

            let root = find_root(&mut zpar, q, config);
            if root != pixel {
                log::trace!("pixel {pixel} adopts component rooted at {root}");
                zpar[root] = pixel as i64;
                parent[root] = pixel as i64;
            }
        }
    }

    canonize(image, &mut parent, sorted_indices);

    Ok(parent)
}

/// Finds the representative of `start`'s component in the union-find
/// scratch array `zpar`, compressing the path it traverses.
///
/// Implemented iteratively (find, then a second pass to compress) rather
/// than recursively, so that arbitrarily large images cannot exhaust the
/// call stack.
fn find_root(zpar: &mut [i64], start: usize, config: &BuildConfig) -> usize {
    let mut x = start;
    while zpar[x] != x as i64 {
        x = zpar[x] as usize;
    }
    let root = x;

    if config.path_compression() {
        let mut y = start;
        while zpar[y] != root as i64 {
            let next = zpar[y] as usize;
            zpar[y] = root as i64;
            y = next;
        }
    }

    root
}

/// Rewrites `parent` so every non-canonical pixel points directly at the
/// canonical representative of its flat-zone, per §4.2.
fn canonize<T: Number>(image: &[T], parent: &mut [i64], sorted_indices: &[usize]) {
    for &p in sorted_indices {
        let q = parent[p] as usize;
        if q == p {
            continue; // root.
        }
        let grandparent = parent[q] as usize;
        if image[q] == image[grandparent] {
            parent[p] = parent[q];
        }
    }
}

fn validate_permutation(indices: &[usize], p: usize) -> Result<(), MaxTreeError> {
    let mut seen = vec![false; p];
    for &i in indices {
        if i >= p {
            return Err(MaxTreeError::precondition(format!(
                "sorted_indices contains out-of-range index {i}"
            )));
        }
        if seen[i] {
            return Err(MaxTreeError::precondition(format!(
                "sorted_indices contains duplicate index {i}"
            )));
        }
        seen[i] = true;
    }
    Ok(())
}

fn validate_ascending<T: Number>(image: &[T], indices: &[usize]) -> Result<(), MaxTreeError> {
    for w in indices.windows(2) {
        if image[w[0]] > image[w[1]] {
            return Err(MaxTreeError::precondition(
                "sorted_indices is not sorted by ascending intensity",
            ));
        }
    }
    Ok(())
}
