//! The `Number` trait bounds the scalar types a max-tree can be built over.

use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{NumCast, Zero};

/// A scalar pixel/attribute value.
///
/// Implemented for every dtype `build_max_tree` and the filters are required
/// to support: the eight integer types (8/16/32/64-bit, signed and
/// unsigned) and both float types. The algorithms in this crate only need a
/// total order and an additive zero, so the bound is kept deliberately thin
/// rather than pulling in the full numeric-tower traits.
pub trait Number:
    Copy
    + Clone
    + Debug
    + PartialOrd
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sum
    + Zero
    + NumCast
    + Send
    + Sync
    + 'static
{
    /// Lossy conversion to `f64`, used for the attribute array and for
    /// threshold comparisons that mix integer pixels with float attributes.
    fn as_f64(&self) -> f64 {
        <f64 as NumCast>::from(*self).unwrap_or(0.0)
    }
}

impl<T> Number for T where
    T: Copy
        + Clone
        + Debug
        + PartialOrd
        + PartialEq
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + Sum
        + Zero
        + NumCast
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::Number;

    fn zero_of<T: Number>() -> T {
        T::zero()
    }

    #[test]
    fn zero_matches_every_required_dtype() {
        assert_eq!(zero_of::<i8>(), 0_i8);
        assert_eq!(zero_of::<i16>(), 0_i16);
        assert_eq!(zero_of::<i32>(), 0_i32);
        assert_eq!(zero_of::<i64>(), 0_i64);
        assert_eq!(zero_of::<u8>(), 0_u8);
        assert_eq!(zero_of::<u16>(), 0_u16);
        assert_eq!(zero_of::<u32>(), 0_u32);
        assert_eq!(zero_of::<u64>(), 0_u64);
        assert_eq!(zero_of::<f32>(), 0.0_f32);
        assert_eq!(zero_of::<f64>(), 0.0_f64);
    }

    #[test]
    fn as_f64_round_trips_for_integers() {
        assert!((42_i32.as_f64() - 42.0).abs() < f64::EPSILON);
        assert!((255_u8.as_f64() - 255.0).abs() < f64::EPSILON);
    }
}
