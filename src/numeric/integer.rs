//! Arbitrary-precision signed integers.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{Pow, Signed, ToPrimitive, Zero};

/// A signed integer of arbitrary precision.
///
/// # Example
/// ```
/// use linarr::numeric::Integer;
///
/// let cayley = Integer::from(20u64).pow(18); // labelled free trees of n = 20
/// assert_eq!(cayley.to_string(), "262144000000000000000000");
/// assert!(cayley > Integer::from(u64::MAX));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    /// The integer 0.
    pub fn zero() -> Self {
        Integer(BigInt::zero())
    }

    /// Whether this integer is 0.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether this integer is negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// `self` raised to `exponent`.
    pub fn pow(&self, exponent: u32) -> Self {
        Integer(Pow::pow(&self.0, exponent))
    }

    /// Greatest common divisor of `self` and `other` (non-negative).
    pub fn gcd(&self, other: &Integer) -> Self {
        Integer(self.0.gcd(&other.0))
    }

    /// Nearest `f64`; may lose precision, overflows to infinity.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::INFINITY)
    }

    /// The value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// The value as `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    pub(crate) fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub(crate) fn from_bigint(value: BigInt) -> Self {
        Integer(value)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Integer {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Integer(BigInt::from_str(s)?))
    }
}

macro_rules! integer_from_machine {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Integer(BigInt::from(value))
            }
        }

        impl PartialEq<$t> for Integer {
            fn eq(&self, other: &$t) -> bool {
                self.0 == BigInt::from(*other)
            }
        }

        impl PartialOrd<$t> for Integer {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.0.partial_cmp(&BigInt::from(*other))
            }
        }
    )*};
}

integer_from_machine!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl PartialEq<&str> for Integer {
    fn eq(&self, other: &&str) -> bool {
        match BigInt::from_str(other) {
            Ok(v) => self.0 == v,
            Err(_) => false,
        }
    }
}

macro_rules! integer_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for Integer {
            type Output = Integer;
            fn $method(self, rhs: Integer) -> Integer {
                Integer((self.0).$method(rhs.0))
            }
        }

        impl $trait<&Integer> for &Integer {
            type Output = Integer;
            fn $method(self, rhs: &Integer) -> Integer {
                Integer((&self.0).$method(&rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;
            fn $method(self, rhs: &Integer) -> Integer {
                Integer((self.0).$method(&rhs.0))
            }
        }

        impl $trait<Integer> for &Integer {
            type Output = Integer;
            fn $method(self, rhs: Integer) -> Integer {
                Integer((&self.0).$method(rhs.0))
            }
        }

        impl $trait<u64> for &Integer {
            type Output = Integer;
            fn $method(self, rhs: u64) -> Integer {
                Integer((&self.0).$method(BigInt::from(rhs)))
            }
        }

        impl $trait<u64> for Integer {
            type Output = Integer;
            fn $method(self, rhs: u64) -> Integer {
                Integer((self.0).$method(BigInt::from(rhs)))
            }
        }

        impl $assign_trait<Integer> for Integer {
            fn $assign_method(&mut self, rhs: Integer) {
                (self.0).$assign_method(rhs.0);
            }
        }

        impl $assign_trait<&Integer> for Integer {
            fn $assign_method(&mut self, rhs: &Integer) {
                (self.0).$assign_method(&rhs.0);
            }
        }

        impl $assign_trait<u64> for Integer {
            fn $assign_method(&mut self, rhs: u64) {
                (self.0).$assign_method(BigInt::from(rhs));
            }
        }
    };
}

integer_binop!(Add, add, AddAssign, add_assign);
integer_binop!(Sub, sub, SubAssign, sub_assign);
integer_binop!(Mul, mul, MulAssign, mul_assign);
integer_binop!(Div, div, DivAssign, div_assign);

impl Rem for Integer {
    type Output = Integer;
    fn rem(self, rhs: Integer) -> Integer {
        Integer(self.0 % rhs.0)
    }
}

impl Rem<&Integer> for &Integer {
    type Output = Integer;
    fn rem(self, rhs: &Integer) -> Integer {
        Integer(&self.0 % &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_beyond_u64() {
        let big = Integer::from(10u64).pow(30);
        let bigger = &big * &big;
        assert_eq!(bigger.to_string(), format!("1{}", "0".repeat(60)));
        assert_eq!(&bigger / &big, big);
        assert!(big.to_u64().is_none());
    }

    #[test]
    fn comparisons_with_machine_integers_and_strings() {
        let v: Integer = "354426847597".parse().unwrap();
        assert_eq!(v, 354426847597u64);
        assert_eq!(v, "354426847597");
        assert!(v > 0u64);
        assert!(Integer::from(-5i64) < Integer::zero());
    }

    #[test]
    fn gcd_and_rem() {
        let a = Integer::from(54u64);
        let b = Integer::from(24u64);
        assert_eq!(a.gcd(&b), 6u64);
        assert_eq!(a % b, Integer::from(6u64));
    }
}
