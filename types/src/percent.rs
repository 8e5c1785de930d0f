//! Fixed-point percentage values derived from weight ratios.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PulseError;
use crate::weight::Weight;

/// Implied fractional digits in a [`Percent`].
pub const PERCENT_DECIMALS: u32 = 4;

const PERCENT_UNIT: u128 = 10u128.pow(PERCENT_DECIMALS);

/// A percentage with 4 implied fractional digits (`Percent(500_000)` is 50%).
///
/// Only constructed from weight ratios; a zero denominator has no defined
/// percentage, so [`Percent::from_ratio`] returns `None` instead of a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u128);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100 * PERCENT_UNIT);

    /// `numerator / denominator` expressed as a percentage.
    ///
    /// Returns `None` when `denominator` is zero — callers must handle the
    /// undefined case before display.
    pub fn from_ratio(numerator: Weight, denominator: Weight) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        let num = numerator.raw();
        let den = denominator.raw();
        // Remainder split keeps the intermediate products inside u128:
        // rem < den, so rem * scale fits for any realistic supply.
        let scale = 100 * PERCENT_UNIT;
        let whole = num / den;
        let rem = num % den;
        Some(Self(
            whole
                .saturating_mul(scale)
                .saturating_add(rem.saturating_mul(scale) / den),
        ))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Render rounded half-up to `digits` fractional digits.
    pub fn format(&self, digits: u32) -> String {
        let digits = digits.min(PERCENT_DECIMALS);
        let scale = 10u128.pow(PERCENT_DECIMALS - digits);
        let scaled = self.0.saturating_add(scale / 2) / scale;
        if digits == 0 {
            return scaled.to_string();
        }
        let unit = 10u128.pow(digits);
        format!(
            "{}.{:0width$}",
            scaled / unit,
            scaled % unit,
            width = digits as usize
        )
    }
}

/// Prints the exact value, fractional zeros trimmed.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PERCENT_UNIT;
        let frac = self.0 % PERCENT_UNIT;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:04}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Percent {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PulseError::MalformedAmount(s.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if s.contains('.')
            && (frac.is_empty()
                || frac.len() > PERCENT_DECIMALS as usize
                || !frac.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed());
        }

        let whole: u128 = whole.parse().map_err(|_| malformed())?;
        let mut raw = whole.checked_mul(PERCENT_UNIT).ok_or_else(malformed)?;
        if !frac.is_empty() {
            let frac_scale = 10u128.pow(PERCENT_DECIMALS - frac.len() as u32);
            let frac: u128 = frac.parse().map_err(|_| malformed())?;
            raw = raw.checked_add(frac * frac_scale).ok_or_else(malformed)?;
        }
        Ok(Self(raw))
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
