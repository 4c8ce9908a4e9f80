//! The sort collaborator: a stable argsort of the flat image buffer.
//!
//! [`build_max_tree`](crate::builder::build_max_tree) takes `sorted_indices`
//! as an input rather than computing it, so a caller that already has a
//! faster or radix-specialized ordering (or one computed once and reused
//! across several filter passes) can supply it directly. `ascending_stable`
//! is the convenience implementation for everyone else.

use crate::number::Number;

/// Returns a permutation of `0..image.len()` in ascending order of
/// `image` value, breaking ties by original index (stable).
pub fn ascending_stable<T: Number>(image: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..image.len()).collect();
    indices.sort_by(|&a, &b| image[a].partial_cmp(&image[b]).expect("Number values must be comparable"));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_ascending() {
        let image = [3, 1, 4, 1, 5, 9, 2, 6];
        let sorted = ascending_stable(&image);
        for w in sorted.windows(2) {
            assert!(image[w[0]] <= image[w[1]]);
        }
    }

    #[test]
    fn is_a_permutation() {
        let image = [3, 1, 4, 1, 5, 9, 2, 6];
        let sorted = ascending_stable(&image);
        let mut seen = vec![false; image.len()];
        for &i in &sorted {
            assert!(!seen[i]);
            seen[i] = true;
        }
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let image = [1, 2, 1, 2, 1];
        let sorted = ascending_stable(&image);
        // The three zeros (value 1) are indices 0, 2, 4; stability keeps them
        // in that order among themselves.
        let ones: Vec<usize> = sorted.iter().copied().filter(|&i| image[i] == 1).collect();
        assert_eq!(ones, vec![0, 2, 4]);
    }

    #[test]
    fn works_for_floats() {
        let image = [3.0f32, 1.0, 4.0, 1.0];
        let sorted = ascending_stable(&image);
        assert_eq!(sorted, vec![1, 3, 0, 2]);
    }
}
