//! Money amounts in whole cents
//!
//! Every amount the app stores or sums is a `Money`. Weekly income is
//! normalized with an exact integer ratio, so totals never drift.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Currency symbols stripped when parsing user input
const CURRENCY_SYMBOLS: [char; 3] = ['£', '$', '€'];

/// An amount in cents, serialized as a decimal number of whole units
/// (`75.5` for 7550 cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budgetease::models::Money;
    /// let amount = Money::from_cents(7550); // £75.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by `numerator / denominator`, rounding half away from zero
    /// to the nearest cent.
    ///
    /// # Examples
    /// ```
    /// use budgetease::models::Money;
    /// // 200.00 * 4.33
    /// assert_eq!(Money::from_cents(20000).mul_ratio(433, 100).cents(), 86600);
    /// ```
    pub fn mul_ratio(&self, numerator: i64, denominator: i64) -> Self {
        let product = self.0 as i128 * numerator as i128;
        let den = denominator as i128;
        let quotient = product / den;
        let remainder = product % den;

        if remainder.abs() * 2 < den.abs() {
            return Self(quotient as i64);
        }
        let away = if (product < 0) != (den < 0) { -1 } else { 1 };
        Self((quotient + away) as i64)
    }

    /// Parse a user-entered amount
    ///
    /// Accepts "75.50", "-75.50", "£75.50", "$75.50", "75" and ".75". Digits
    /// past the second decimal place are dropped.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let digits = rest.trim_start_matches(CURRENCY_SYMBOLS.as_slice());
        let invalid = || MoneyParseError::InvalidFormat(digits.to_string());

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };
        if (whole.is_empty() && fraction.is_empty())
            || !whole.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents = parse_fraction(fraction).ok_or_else(invalid)?;

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, sign first: `-£10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

/// Cents from the digits after the decimal point
fn parse_fraction(fraction: &str) -> Option<i64> {
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut digits = fraction.chars().chain(std::iter::repeat('0')).take(2);
    let tens = digits.next()?.to_digit(10)?;
    let ones = digits.next()?.to_digit(10)?;
    Some(i64::from(tens * 10 + ones))
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        let cents = (units * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return Err(de::Error::custom(format!("amount out of range: {}", units)));
        }
        Ok(Self(cents as i64))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("£"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(7550);
        assert_eq!(m.cents(), 7550);
        assert_eq!(m.units(), 75);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(7550)), "£75.50");
        assert_eq!(format!("{}", Money::zero()), "£0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-£10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "£0.05");
        assert_eq!(Money::from_cents(-5).format_with_symbol("$"), "-$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_mul_ratio_rounds_half_away_from_zero() {
        assert_eq!(Money::from_cents(20000).mul_ratio(433, 100).cents(), 86600);
        // 0.01 * 4.33 = 0.0433 -> 0.04
        assert_eq!(Money::from_cents(1).mul_ratio(433, 100).cents(), 4);
        // 0.50 * 4.33 = 2.165 -> 2.17
        assert_eq!(Money::from_cents(50).mul_ratio(433, 100).cents(), 217);
        assert_eq!(Money::from_cents(-50).mul_ratio(433, 100).cents(), -217);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("75.50").unwrap().cents(), 7550);
        assert_eq!(Money::parse("£75.50").unwrap().cents(), 7550);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.x").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("£").is_err());
        assert_eq!(Money::parse("3.999").unwrap().cents(), 399);
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("92233720368547758.08").is_err());
        assert_eq!(Money::parse("92233720368547758.07").unwrap().cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(7550),
            Money::from_cents(4500),
            Money::from_cents(12000),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 24050);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_decimal_and_integer_amounts() {
        let cents = |json: &str| serde_json::from_str::<Money>(json).unwrap().cents();
        assert_eq!(cents("75.5"), 7550);
        assert_eq!(cents("0.1"), 10);
        assert_eq!(cents("19.99"), 1999);
        assert_eq!(cents("450"), 45000);
        assert_eq!(cents("-12.25"), -1225);
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("\"75.5\"").is_err());
    }
}
