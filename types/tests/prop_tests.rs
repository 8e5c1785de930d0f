use proptest::prelude::*;

use pulse_types::{
    is_valid_address, is_valid_block_hash, BlockHash, CurrencyInfo, Percent, Weight,
};

fn currency() -> CurrencyInfo {
    CurrencyInfo {
        symbol: "NANO".to_string(),
        prefixes: vec!["nano".to_string(), "xrb".to_string()],
    }
}

/// A 60-character address body drawn from the account alphabet.
fn address_body() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = "13456789abcdefghijkmnopqrstuwxyz".chars().collect();
    prop::collection::vec(prop::sample::select(alphabet), 60)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Weight raw-unit round trip: from_raw -> raw is identity.
    #[test]
    fn weight_raw_roundtrip(raw in 0u128..u128::MAX) {
        prop_assert_eq!(Weight::from_raw(raw).raw(), raw);
    }

    /// Weight display -> parse round trip is lossless.
    #[test]
    fn weight_display_parse_roundtrip(raw in 0u128..10u128.pow(38)) {
        let weight = Weight::from_raw(raw);
        let parsed: Weight = weight.to_string().parse().unwrap();
        prop_assert_eq!(parsed, weight);
    }

    /// Weight serde (JSON string) round trip is lossless.
    #[test]
    fn weight_serde_roundtrip(raw in 0u128..10u128.pow(38)) {
        let weight = Weight::from_raw(raw);
        let json = serde_json::to_string(&weight).unwrap();
        let back: Weight = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, weight);
    }

    /// mul_bps never exceeds the plain product bound and is monotone in bps.
    #[test]
    fn weight_mul_bps_bounded(raw in 0u128..10u128.pow(30), bps in 0u32..10_000) {
        let weight = Weight::from_raw(raw);
        prop_assert!(weight.mul_bps(bps).raw() <= raw);
        prop_assert!(weight.mul_bps(bps) <= weight.mul_bps(bps + 1));
    }

    /// from_ratio is None exactly when the denominator is zero.
    #[test]
    fn percent_none_iff_zero_denominator(num in 0u128..10u128.pow(30), den in 0u128..10u128.pow(30)) {
        let ratio = Percent::from_ratio(Weight::from_raw(num), Weight::from_raw(den));
        prop_assert_eq!(ratio.is_none(), den == 0);
    }

    /// A weight is always 100% of itself.
    #[test]
    fn percent_of_self_is_hundred(raw in 1u128..10u128.pow(30)) {
        let weight = Weight::from_raw(raw);
        prop_assert_eq!(Percent::from_ratio(weight, weight), Some(Percent::HUNDRED));
    }

    /// Percentages of a fixed denominator preserve order.
    #[test]
    fn percent_is_monotone(a in 0u128..10u128.pow(24), b in 0u128..10u128.pow(24), den in 1u128..10u128.pow(24)) {
        let pa = Percent::from_ratio(Weight::from_raw(a), Weight::from_raw(den)).unwrap();
        let pb = Percent::from_ratio(Weight::from_raw(b), Weight::from_raw(den)).unwrap();
        if a <= b {
            prop_assert!(pa <= pb);
        }
    }

    /// Every well-formed address body validates under every configured prefix.
    #[test]
    fn generated_addresses_validate(body in address_body()) {
        let nano = format!("nano_{}", body);
        let xrb = format!("xrb_{}", body);
        let ban = format!("ban_{}", body);
        prop_assert!(is_valid_address(&nano, &currency()));
        prop_assert!(is_valid_address(&xrb, &currency()));
        prop_assert!(!is_valid_address(&ban, &currency()));
    }

    /// Corrupting any single body position with an excluded symbol invalidates.
    #[test]
    fn corrupted_addresses_fail(body in address_body(), pos in 0usize..60, bad in prop::sample::select(vec!['0', '2', 'l', 'v', 'B'])) {
        let mut chars: Vec<char> = body.chars().collect();
        chars[pos] = bad;
        let corrupted: String = chars.into_iter().collect();
        let candidate = format!("nano_{}", corrupted);
        prop_assert!(!is_valid_address(&candidate, &currency()));
    }

    /// Arbitrary strings never panic the validators.
    #[test]
    fn validators_are_total(s in ".*") {
        let _ = is_valid_address(&s, &currency());
        let _ = is_valid_block_hash(&s);
    }

    /// BlockHash display -> validate -> parse round trip.
    #[test]
    fn block_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let text = hash.to_string();
        prop_assert!(is_valid_block_hash(&text));
        prop_assert_eq!(BlockHash::parse(&text).unwrap(), hash);
    }

    /// The lowercase form of a valid hash is never valid.
    #[test]
    fn lowercase_hash_rejected(bytes in prop::array::uniform32(0u8..)) {
        let text = BlockHash::new(bytes).to_string().to_lowercase();
        // All-digit hashes have no case to fold.
        if text.bytes().any(|b| b.is_ascii_alphabetic()) {
            prop_assert!(!is_valid_block_hash(&text));
        }
    }
}
