/*!
# Weights

Algorithms never interpret edge properties themselves. Instead, the caller hands over an
*extractor* `Fn(&EdgeProp) -> W` and the algorithm only relies on `W` being a [`Weight`]:
ordered, with a zero, closed under addition/subtraction and with a sentinel value standing in
for "unreachable".

Floating point types use their positive infinity as sentinel, integer types their maximum.
*/

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use num::{Zero, traits::SaturatingAdd};

/// Numeric value produced by weight and capacity extractors
pub trait Weight: Copy + PartialOrd + Debug + Zero + Add<Output = Self> + Sub<Output = Self> {
    /// Sentinel for unreachable distances and unbounded capacities
    const INFINITY: Self;

    /// Returns *true* if `self` is the sentinel value
    #[inline]
    fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }

    /// Returns *true* if `self` is strictly smaller than zero
    #[inline]
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Adds `rhs` without overflowing. Integers clamp to their bounds (so an overflow upwards
    /// yields the sentinel), floats add as usual.
    fn saturating_sum(self, rhs: Self) -> Self;

    /// Adds `rhs`, keeping the sentinel absorbing. Never overflows.
    #[inline]
    fn add_or_infinity(self, rhs: Self) -> Self {
        if self.is_infinite() || rhs.is_infinite() {
            Self::INFINITY
        } else {
            self.saturating_sum(rhs)
        }
    }

    /// Returns the smaller of both values
    #[inline]
    fn min_weight(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

macro_rules! impl_weight {
    (int => $($t:ty),*) => {
        $(
            impl Weight for $t {
                const INFINITY: Self = <$t>::MAX;

                #[inline]
                fn saturating_sum(self, rhs: Self) -> Self {
                    SaturatingAdd::saturating_add(&self, &rhs)
                }
            }
        )*
    };
    (float => $($t:ty),*) => {
        $(
            impl Weight for $t {
                const INFINITY: Self = <$t>::INFINITY;

                #[inline]
                fn saturating_sum(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_weight!(int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight!(float => f32, f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sentinels() {
        assert!(f64::INFINITY.is_infinite());
        assert!(<i32 as Weight>::INFINITY.is_infinite());
        assert_eq!(<u8 as Weight>::INFINITY, 255);
        assert!(!3i64.is_infinite());
    }

    #[test]
    fn sentinel_is_absorbing() {
        assert_eq!(<i32 as Weight>::INFINITY.add_or_infinity(5), i32::MAX);
        assert_eq!(3u64.add_or_infinity(<u64 as Weight>::INFINITY), u64::MAX);
        assert_eq!(2.5f64.add_or_infinity(1.0), 3.5);
        assert_eq!((-2i32).add_or_infinity(1), -1);
    }

    #[test]
    fn integer_sums_clamp() {
        assert_eq!((-2_000_000_000i32).add_or_infinity(-2_000_000_000), i32::MIN);
        assert_eq!(200u8.add_or_infinity(100), u8::MAX);
        assert!(200u8.add_or_infinity(100).is_infinite());
        assert_eq!(i64::MIN.saturating_sum(-1), i64::MIN);
    }

    #[test]
    fn sign_and_min() {
        assert!((-1i32).is_negative());
        assert!(!0.0f64.is_negative());
        assert_eq!(3i32.min_weight(2), 2);
        assert_eq!(1.5f32.min_weight(4.0), 1.5);
    }
}
