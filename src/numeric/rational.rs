//! Arbitrary-precision rational numbers.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::numeric::Integer;

/// An exact rational number.
///
/// The value is kept canonical at all times: numerator and denominator in
/// lowest terms, denominator positive.
///
/// # Example
/// ```
/// use linarr::numeric::Rational;
///
/// let third = Rational::new(1u64.into(), 3u64.into());
/// let d = &third + &Rational::new(1u64.into(), 6u64.into());
/// assert_eq!(d.to_string(), "1/2");
/// assert_eq!(d.to_integer().to_string(), "0"); // floor
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// The rational 0.
    pub fn zero() -> Self {
        Rational(BigRational::zero())
    }

    /// Creates `numerator / denominator`, reduced to lowest terms with a
    /// positive denominator.
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        Rational(BigRational::new(
            numerator.as_bigint().clone(),
            denominator.as_bigint().clone(),
        ))
    }

    /// Creates `numerator / denominator` from machine integers.
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    pub fn from_u64s(numerator: u64, denominator: u64) -> Self {
        Rational(BigRational::new(BigInt::from(numerator), BigInt::from(denominator)))
    }

    /// Whether this rational is 0.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether this rational is negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// The numerator (canonical sign).
    pub fn numerator(&self) -> Integer {
        Integer::from_bigint(self.0.numer().clone())
    }

    /// The denominator (always positive).
    pub fn denominator(&self) -> Integer {
        Integer::from_bigint(self.0.denom().clone())
    }

    /// `self` raised to `exponent`; negative exponents invert.
    ///
    /// # Panics
    /// Panics when raising zero to a negative exponent.
    pub fn pow(&self, exponent: i32) -> Self {
        Rational(self.0.pow(exponent))
    }

    /// The multiplicative inverse.
    ///
    /// # Panics
    /// Panics if the value is zero.
    pub fn invert(&self) -> Self {
        Rational(self.0.recip())
    }

    /// Nearest `f64`; may lose precision.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::INFINITY)
    }

    /// The floor of the value, as an [`Integer`].
    pub fn to_integer(&self) -> Integer {
        Integer::from_bigint(self.0.floor().to_integer())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Rational(BigRational::from_integer(value.as_bigint().clone()))
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Rational(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational(BigRational::from_integer(BigInt::from(value)))
    }
}

impl PartialEq<u64> for Rational {
    fn eq(&self, other: &u64) -> bool {
        self.0 == BigRational::from_integer(BigInt::from(*other))
    }
}

impl PartialOrd<u64> for Rational {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.0.partial_cmp(&BigRational::from_integer(BigInt::from(*other)))
    }
}

macro_rules! rational_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for Rational {
            type Output = Rational;
            fn $method(self, rhs: Rational) -> Rational {
                Rational((self.0).$method(rhs.0))
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;
            fn $method(self, rhs: &Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;
            fn $method(self, rhs: &Rational) -> Rational {
                Rational((self.0).$method(&rhs.0))
            }
        }

        impl $assign_trait<Rational> for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                (self.0).$assign_method(rhs.0);
            }
        }

        impl $assign_trait<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                (self.0).$assign_method(&rhs.0);
            }
        }
    };
}

rational_binop!(Add, add, AddAssign, add_assign);
rational_binop!(Sub, sub, SubAssign, sub_assign);
rational_binop!(Mul, mul, MulAssign, mul_assign);
rational_binop!(Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}
