//! Fixed-point voting weight and supply amounts.
//!
//! Ledger amounts can exceed the range that f64 represents exactly, so weights
//! are stored as u128 raw units with 9 implied fractional digits. Parsing from
//! the API's decimal strings is exact; rounding happens only at display time.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::PulseError;

/// Implied fractional digits in a [`Weight`].
pub const WEIGHT_DECIMALS: u32 = 9;

/// Raw units per whole coin.
pub const RAW_PER_COIN: u128 = 10u128.pow(WEIGHT_DECIMALS);

const BPS_UNIT: u128 = 10_000;

/// A voting weight or supply amount, stored as raw units (u128) for precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u128);

impl Weight {
    pub const ZERO: Self = Self(0);

    pub fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// A whole number of coins.
    pub fn from_coins(coins: u128) -> Self {
        Self(coins.saturating_mul(RAW_PER_COIN))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiply by a basis-point fraction (`bps / 10_000`), rounding down.
    ///
    /// Exact: the remainder split never discards more than the final floor does.
    pub fn mul_bps(self, bps: u32) -> Self {
        let bps = bps as u128;
        let whole = self.0 / BPS_UNIT;
        let rem = self.0 % BPS_UNIT;
        Self(whole.saturating_mul(bps).saturating_add(rem * bps / BPS_UNIT))
    }

    /// Render as a coin amount rounded half-up to `digits` fractional digits.
    pub fn format_coins(&self, digits: u32) -> String {
        let digits = digits.min(WEIGHT_DECIMALS);
        let scale = 10u128.pow(WEIGHT_DECIMALS - digits);
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

impl Add for Weight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

/// Prints the exact decimal value, fractional zeros trimmed.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / RAW_PER_COIN;
        let frac = self.0 % RAW_PER_COIN;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:09}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

/// Parses a decimal coin amount exactly.
///
/// Accepts an integer part and at most [`WEIGHT_DECIMALS`] fractional digits.
/// Anything else — signs, exponents, empty parts, extra precision — is
/// rejected rather than coerced.
impl FromStr for Weight {
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
                || frac.len() > WEIGHT_DECIMALS as usize
                || !frac.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed());
        }

        let whole: u128 = whole.parse().map_err(|_| malformed())?;
        let mut raw = whole.checked_mul(RAW_PER_COIN).ok_or_else(malformed)?;
        if !frac.is_empty() {
            let frac_scale = 10u128.pow(WEIGHT_DECIMALS - frac.len() as u32);
            let frac: u128 = frac.parse().map_err(|_| malformed())?;
            raw = raw.checked_add(frac * frac_scale).ok_or_else(malformed)?;
        }
        Ok(Self(raw))
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
