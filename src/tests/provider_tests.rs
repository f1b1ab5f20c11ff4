use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::providers::{build_prefix_index, Provider};

#[test]
fn no_prefix_is_shared_between_providers() {
    let mut seen = HashSet::new();
    for provider in Provider::iter() {
        for prefix in provider.prefixes() {
            assert!(
                seen.insert(*prefix),
                "prefix {prefix} declared more than once"
            );
        }
    }
}

#[test]
fn prefixes_are_local_form_heads() {
    for provider in Provider::iter() {
        for prefix in provider.prefixes() {
            assert!(
                prefix.len() == 4 || prefix.len() == 5,
                "prefix {prefix} has unexpected length"
            );
            assert!(prefix.starts_with('0'));
            assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

#[test]
fn shared_head_0702_has_no_four_digit_owner() {
    // 07025 and 07026 are reachable only through the 5-digit probe.
    let index = build_prefix_index();
    assert!(!index.contains_key("0702"));
    assert_eq!(index.get("07025"), Some(&Provider::Mtn));
    assert_eq!(index.get("07026"), Some(&Provider::Mtn));
}

#[test]
fn index_covers_every_declared_prefix() {
    let index = build_prefix_index();
    let declared: usize = Provider::iter().map(|p| p.prefixes().len()).sum();
    assert_eq!(index.len(), declared);
    assert_eq!(index.get("0803"), Some(&Provider::Mtn));
    assert_eq!(index.get("07025"), Some(&Provider::Mtn));
    assert_eq!(index.get("0805"), Some(&Provider::Glo));
    assert_eq!(index.get("0809"), Some(&Provider::NineMobile));
}

#[test]
fn display_renders_market_names() {
    assert_eq!(Provider::Mtn.to_string(), "MTN");
    assert_eq!(Provider::Glo.to_string(), "GLO");
    assert_eq!(Provider::Airtel.to_string(), "AIRTEL");
    assert_eq!(Provider::NineMobile.to_string(), "9MOBILE");
    for provider in Provider::iter() {
        assert!(!provider.description().is_empty());
    }
}
