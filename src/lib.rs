//! A max-tree construction and filtering engine for N-dimensional scalar
//! images.
//!
//! The max-tree (Salembier, Oliveras & Garrido, 1998; Berger, Najman &
//! Couprie, 2007) represents an image as a hierarchy of connected
//! upper-level-set components, one node per distinct intensity in every
//! connected flat zone. Building it is `O(P α(P))` over `P` pixels via
//! union-find with path compression; filtering it by an attribute
//! (area, and anything else a caller implements via [`Accumulate`]) is
//! `O(P)`.
//!
//! ```text
//! sort pixels ascending -> build_max_tree -> compute_area -> direct_filter
//! ```
//!
//! See [`builder::build_max_tree`] for the construction algorithm,
//! [`attribute`] for attribute accumulation, and [`filter`] for the two
//! pruning rules.

mod attribute;
mod builder;
mod config;
mod error;
mod ndarray_api;
mod neighborhood;
mod number;
mod shape;
mod sort;

mod filter;

pub use attribute::{accumulate, compute_area, Accumulate, Area};
pub use builder::build_max_tree;
pub use config::BuildConfig;
pub use error::MaxTreeError;
pub use filter::{cut_first_filter, direct_filter};
pub use ndarray_api::{build_max_tree_array, cut_first_filter_array, direct_filter_array};
pub use neighborhood::{is_valid, offsets_to_points, Offset, Points};
pub use number::Number;
pub use shape::Shape;
pub use sort::ascending_stable;
