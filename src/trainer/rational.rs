//! Exact fractions in lowest terms.
//!
//! Every fraction-valued answer and every "is this answer presentable?"
//! predicate goes through [`Rational`] so comparisons never drift the way
//! floating point does.  The arithmetic is `num_rational::Ratio<i128>`; the
//! wrapper turns its zero-denominator panics into [`ArithmeticError`] and adds
//! the decimal helpers the generators need.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::trainer::error::ArithmeticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rational(Ratio<i128>);

impl Rational {
    pub const ZERO: Rational = Rational(Ratio::new_raw(0, 1));
    pub const ONE: Rational = Rational(Ratio::new_raw(1, 1));

    /// Build `numer / denom` reduced to lowest terms with a positive denominator.
    pub fn new(numer: i128, denom: i128) -> Result<Self, ArithmeticError> {
        if denom == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Rational(Ratio::new(numer, denom)))
    }

    pub fn from_integer(n: i128) -> Self {
        Rational(Ratio::from_integer(n))
    }

    /// `units / 10^places`.
    pub fn from_decimal(units: i128, places: u32) -> Self {
        Rational(Ratio::new(units, 10i128.pow(places)))
    }

    pub fn numer(&self) -> i128 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i128 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.numer() == 0
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Numerator is ±1.
    pub fn is_unit(&self) -> bool {
        self.numer().abs() == 1
    }

    /// Divide, failing when `rhs` is the zero fraction.
    pub fn checked_div(self, rhs: Rational) -> Result<Rational, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Rational(self.0 / rhs.0))
    }

    /// `true` when `self * 10^places` is an integer, i.e. the decimal
    /// expansion terminates within `places` fractional digits.
    pub fn terminates_within(&self, places: u32) -> bool {
        (self.0 * Ratio::from_integer(10i128.pow(places))).is_integer()
    }

    pub fn to_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }

    /// Decimal text with exactly `places` fractional digits, rounding half
    /// away from zero.
    pub fn to_decimal_string(&self, places: u32) -> String {
        let scale = 10i128.pow(places);
        let units = (self.0 * Ratio::from_integer(scale)).round().to_integer();
        if places == 0 {
            return units.to_string();
        }
        let sign = if units < 0 { "-" } else { "" };
        let abs = units.abs();
        format!(
            "{sign}{}.{:0width$}",
            abs / scale,
            abs % scale,
            width = places as usize
        )
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n as i128)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}
