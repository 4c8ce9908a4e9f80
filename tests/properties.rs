//! Property-based tests for the universal invariants described in the
//! engine's design notes: permutation closure, intensity monotonicity,
//! canonical form, area conservation, filter idempotence, threshold
//! boundary behavior, and cut-first dominance.

use proptest::prelude::*;

use maxtree::{ascending_stable, build_max_tree, compute_area, cut_first_filter, direct_filter, BuildConfig, Shape};

fn build(image: &[i32]) -> (Vec<i64>, Vec<usize>, Vec<f64>) {
    let shape = Shape::new(vec![image.len()]).unwrap();
    let mask = vec![false; image.len()];
    let sorted = ascending_stable(image);
    let parent = build_max_tree(image, &mask, &[-1, 1], &shape, &sorted, &BuildConfig::default()).unwrap();
    let area = compute_area(image, &parent, &sorted).unwrap();
    (parent, sorted, area)
}

fn find_root(parent: &[i64], start: usize) -> usize {
    let mut x = start;
    let mut steps = 0;
    while parent[x] != x as i64 {
        x = parent[x] as usize;
        steps += 1;
        assert!(steps <= parent.len(), "permutation closure failed to terminate");
    }
    x
}

proptest! {
    #[test]
    fn permutation_closure_reaches_the_root(image in prop::collection::vec(-20i32..20, 2..40)) {
        let (parent, _, _) = build(&image);
        for p in 0..image.len() {
            let root = find_root(&parent, p);
            prop_assert_eq!(parent[root], root as i64);
        }
    }

    #[test]
    fn intensity_is_monotone_toward_the_root(image in prop::collection::vec(-20i32..20, 2..40)) {
        let (parent, _, _) = build(&image);
        for p in 0..image.len() {
            let par = parent[p] as usize;
            prop_assert!(image[par] <= image[p]);
        }
    }

    #[test]
    fn canonical_form_holds(image in prop::collection::vec(-20i32..20, 2..40)) {
        let (parent, _, _) = build(&image);
        for p in 0..image.len() {
            let par = parent[p] as usize;
            if image[par] == image[p] {
                let root = find_root(&parent, p);
                let grandparent = parent[par] as usize;
                prop_assert!(image[grandparent] < image[p] || par == root);
            }
        }
    }

    #[test]
    fn area_conserves_at_the_root(image in prop::collection::vec(-20i32..20, 2..40)) {
        let (parent, _, area) = build(&image);
        let root = find_root(&parent, 0);
        prop_assert_eq!(area[root], image.len() as f64);
    }

    #[test]
    fn threshold_zero_is_the_identity(image in prop::collection::vec(-20i32..20, 2..40)) {
        let (parent, sorted, area) = build(&image);
        let direct = direct_filter(&image, &parent, &sorted, &area, 0.0).unwrap();
        let cut = cut_first_filter(&image, &parent, &sorted, &area, 0.0).unwrap();
        prop_assert_eq!(direct, image.clone());
        prop_assert_eq!(cut, image);
    }

    #[test]
    fn threshold_above_root_area_is_all_zero(image in prop::collection::vec(-20i32..20, 2..40)) {
        let (parent, sorted, area) = build(&image);
        let root = find_root(&parent, 0);
        let threshold = area[root] + 1.0;
        let direct = direct_filter(&image, &parent, &sorted, &area, threshold).unwrap();
        let cut = cut_first_filter(&image, &parent, &sorted, &area, threshold).unwrap();
        prop_assert_eq!(direct, vec![0; image.len()]);
        prop_assert_eq!(cut, vec![0; image.len()]);
    }

    #[test]
    fn cut_first_never_exceeds_direct_for_the_area_attribute(
        image in prop::collection::vec(-20i32..20, 2..40),
        threshold in 0.0..40.0f64,
    ) {
        let (parent, sorted, area) = build(&image);
        let direct = direct_filter(&image, &parent, &sorted, &area, threshold).unwrap();
        let cut = cut_first_filter(&image, &parent, &sorted, &area, threshold).unwrap();
        for (d, c) in direct.iter().zip(cut.iter()) {
            prop_assert!(c <= d);
        }
    }

    #[test]
    fn direct_filter_is_idempotent(
        image in prop::collection::vec(-20i32..20, 2..40),
        threshold in 0.0..40.0f64,
    ) {
        let (parent, sorted, area) = build(&image);
        let once = direct_filter(&image, &parent, &sorted, &area, threshold).unwrap();

        let (parent2, sorted2, area2) = build(&once);
        let twice = direct_filter(&once, &parent2, &sorted2, &area2, threshold).unwrap();

        prop_assert_eq!(once, twice);
    }
}

#[test]
fn dtype_preservation_u8() {
    let image: Vec<u8> = vec![1, 3, 3, 2, 1, 4, 4, 1];
    let shape = Shape::new(vec![image.len()]).unwrap();
    let mask = vec![false; image.len()];
    let sorted = ascending_stable(&image);
    let parent = build_max_tree(&image, &mask, &[-1, 1], &shape, &sorted, &BuildConfig::default()).unwrap();
    let area = compute_area(&image, &parent, &sorted).unwrap();
    let output = direct_filter(&image, &parent, &sorted, &area, 3.0).unwrap();
    // parent = [0,3,1,0,0,0,5,0], area = [8,2,1,3,1,2,1,1]: pixel 3's node
    // (value 2, area 3) survives a threshold of 3.
    assert_eq!(output, vec![1u8, 2, 2, 2, 1, 1, 1, 1]);
}

#[test]
fn dtype_preservation_f32() {
    let image: Vec<f32> = vec![1.0, 3.0, 3.0, 2.0, 1.0, 4.0, 4.0, 1.0];
    let shape = Shape::new(vec![image.len()]).unwrap();
    let mask = vec![false; image.len()];
    let sorted = ascending_stable(&image);
    let parent = build_max_tree(&image, &mask, &[-1, 1], &shape, &sorted, &BuildConfig::default()).unwrap();
    let area = compute_area(&image, &parent, &sorted).unwrap();
    let output = direct_filter(&image, &parent, &sorted, &area, 3.0).unwrap();
    // parent = [0,3,1,0,0,0,5,0], area = [8,2,1,3,1,2,1,1]: pixel 3's node
    // (value 2, area 3) survives a threshold of 3.
    assert_eq!(output, vec![1.0f32, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0]);
}
