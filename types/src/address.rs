//! Ledger account addresses.
//!
//! An address is a currency prefix, an underscore, and a 60-character base32
//! encoding of the account's public key. The 32-symbol alphabet excludes `0`,
//! `2`, `l`, and `v` so addresses never contain visually ambiguous characters.
//! Which prefixes are accepted comes from [`CurrencyInfo`] — the explorer can
//! be pointed at any network that uses this encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CurrencyInfo;
use crate::error::PulseError;

/// The base32 alphabet used in the encoded public-key portion.
pub const ADDRESS_ALPHABET: &str = "13456789abcdefghijkmnopqrstuwxyz";

/// Length of the encoded public-key portion after the prefix separator.
pub const ENCODED_KEY_LEN: usize = 60;

fn in_alphabet(b: u8) -> bool {
    matches!(b, b'1' | b'3'..=b'9' | b'a'..=b'k' | b'm'..=b'u' | b'w'..=b'z')
}

/// Whether `s` is a well-formed account address under the given currency.
///
/// Matches `^(prefix1|prefix2|...)_[alphabet]{60}$`, case-sensitive, with no
/// normalization. Total: any input — empty, unicode, overlong — returns
/// `false` rather than failing, since this gates user-supplied search input.
pub fn is_valid_address(s: &str, currency: &CurrencyInfo) -> bool {
    currency.prefixes.iter().any(|prefix| {
        s.strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|body| body.len() == ENCODED_KEY_LEN && body.bytes().all(in_alphabet))
    })
}

/// A validated account address.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Account(String);

impl Account {
    /// Parse and validate an address against the currency's prefix set.
    pub fn parse(s: &str, currency: &CurrencyInfo) -> Result<Self, PulseError> {
        if is_valid_address(s, currency) {
            Ok(Self(s.to_string()))
        } else {
            Err(PulseError::InvalidAddress(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nano() -> CurrencyInfo {
        CurrencyInfo {
            symbol: "NANO".to_string(),
            prefixes: vec!["nano".to_string(), "xrb".to_string()],
        }
    }

    const BODY: &str = "1111111111111111111111111111111111111111111111111111hifc8npp";

    #[test]
    fn accepts_known_good_address() {
        assert!(is_valid_address(&format!("nano_{BODY}"), &nano()));
        assert!(is_valid_address(&format!("xrb_{BODY}"), &nano()));
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(!is_valid_address(&format!("xyz_{BODY}"), &nano()));
        assert!(!is_valid_address(&format!("_{BODY}"), &nano()));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(!is_valid_address(&format!("nano{BODY}"), &nano()));
    }

    #[test]
    fn rejects_wrong_length() {
        let short = &BODY[1..];
        let long = format!("{BODY}1");
        assert!(!is_valid_address(&format!("nano_{short}"), &nano()));
        assert!(!is_valid_address(&format!("nano_{long}"), &nano()));
    }

    #[test]
    fn rejects_excluded_symbols() {
        // 0, 2, l, and v are not in the alphabet.
        for bad in ['0', '2', 'l', 'v', 'A', '!', 'é'] {
            let body = format!("{bad}{}", &BODY[bad.len_utf8()..]);
            assert!(
                !is_valid_address(&format!("nano_{body}"), &nano()),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_empty_and_unicode() {
        assert!(!is_valid_address("", &nano()));
        assert!(!is_valid_address("nano_", &nano()));
        assert!(!is_valid_address("ナノ", &nano()));
    }

    #[test]
    fn is_case_sensitive() {
        let upper = format!("NANO_{BODY}");
        assert!(!is_valid_address(&upper, &nano()));
    }

    #[test]
    fn no_prefixes_accepts_nothing() {
        let currency = CurrencyInfo {
            symbol: "X".to_string(),
            prefixes: vec![],
        };
        assert!(!is_valid_address(&format!("nano_{BODY}"), &currency));
    }

    #[test]
    fn parse_round_trips() {
        let raw = format!("nano_{BODY}");
        let account = Account::parse(&raw, &nano()).unwrap();
        assert_eq!(account.as_str(), raw);
        assert_eq!(account.to_string(), raw);
    }

    #[test]
    fn parse_rejects_and_names_input() {
        let err = Account::parse("nano_bogus", &nano()).unwrap_err();
        assert!(matches!(err, PulseError::InvalidAddress(_)));
        assert!(err.to_string().contains("nano_bogus"));
    }

    #[test]
    fn alphabet_has_32_symbols() {
        assert_eq!(ADDRESS_ALPHABET.len(), 32);
        assert!(ADDRESS_ALPHABET.bytes().all(in_alphabet));
        assert!(!in_alphabet(b'0'));
        assert!(!in_alphabet(b'2'));
        assert!(!in_alphabet(b'l'));
        assert!(!in_alphabet(b'v'));
    }
}
