//! Element kinds storable in a grow array.
//!
//! One generic container covers every fixed-width numeric kind; this trait is
//! the bound it is monomorphized over.

// External dependencies
use core::cmp::Ordering;
use core::fmt::Debug;
use num_traits::Zero;

/// Fixed-width numeric value stored inline in a [`GrowArray`](super::grow_array::GrowArray).
pub trait Element: Copy + PartialEq + PartialOrd + Debug + Zero {
    /// Total ordering used by `sort`.
    ///
    /// Integers use their natural order. Floats use the IEEE 754 total order,
    /// so `-0.0 < 0.0` and positive NaN sorts after every other value.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_element_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_element_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);
impl_element_float!(f32, f64);
