//! Property-based tests for the cache-busting helper.

use proptest::prelude::*;

use super::widget::cache_bust;

/// Strategy for plausible image sources, query strings included.
fn image_src() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/_.?=-]{0,40}"
}

/// Strategy for epoch-millisecond timestamps.
fn epoch_millis() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The original source always survives as a prefix.
    #[test]
    fn prop_cache_bust_preserves_prefix(src in image_src(), millis in epoch_millis()) {
        let busted = cache_bust(&src, millis);
        prop_assert!(busted.starts_with(src.as_str()));
    }

    /// The appended fragment is exactly one '?' plus the decimal timestamp.
    #[test]
    fn prop_cache_bust_appends_decimal_suffix(src in image_src(), millis in epoch_millis()) {
        let busted = cache_bust(&src, millis);
        let suffix = &busted[src.len()..];
        prop_assert_eq!(suffix, format!("?{millis}"));
    }

    /// Busting is reversible: stripping the fragment yields the input.
    #[test]
    fn prop_cache_bust_roundtrip(src in image_src(), millis in epoch_millis()) {
        let busted = cache_bust(&src, millis);
        let stripped = busted.strip_suffix(&format!("?{millis}"));
        prop_assert_eq!(stripped, Some(src.as_str()));
    }

    /// Applying two busts in order keeps the first fragment in place, so the
    /// later arrival always determines the trailing fragment.
    #[test]
    fn prop_cache_bust_stacks(src in image_src(), first in epoch_millis(), second in epoch_millis()) {
        let once = cache_bust(&src, first);
        let twice = cache_bust(&once, second);
        prop_assert!(twice.starts_with(once.as_str()));
        let second_suffix = format!("?{second}");
        prop_assert!(twice.ends_with(&second_suffix));
    }
}
