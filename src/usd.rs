use serde::{Deserialize, Serialize, Serializer};

use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as a floating-point number of dollars, exactly as it
/// appears in the JSON input, but the [`Display`] implementation formats it
/// for display as dollars to 2 decimal places. Whole-dollar amounts serialize
/// as JSON integers.
#[derive(Clone, Copy, Default, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Usd(f64);

impl Usd {
    #[must_use]
    pub fn new(dollars: f64) -> Self {
        Self(dollars)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Usd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // 2^53: beyond this, not every integer is representable as f64.
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl Add for Usd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Usd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fn_formats_two_decimal_places() {
        assert_eq!(Usd::new(29.97).to_string(), "$29.97");
        assert_eq!(Usd::new(5.0).to_string(), "$5.00");
        assert_eq!(Usd::new(1234.5678).to_string(), "$1234.57");
        assert_eq!(Usd::default().to_string(), "$0.00");
    }

    #[test]
    fn mul_fn_accepts_fractional_and_negative_quantities() {
        assert_eq!(Usd::new(10.0) * 1.5, Usd::new(15.0));
        assert_eq!(Usd::new(10.0) * -2.0, Usd::new(-20.0));
    }

    #[test]
    fn usd_serializes_as_a_bare_number() {
        let json = serde_json::to_string(&Usd::new(9.99)).unwrap();
        assert_eq!(json, "9.99");
        assert_eq!(serde_json::to_string(&Usd::new(3.0)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Usd::new(-12.0)).unwrap(), "-12");
        let back: Usd = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, Usd::new(12.5));
    }
}
