//! Property tests for segmentation and the symmetric word checks

use akshara_core::{analysis, extract, get_profile, join_units, LanguageProfile, PlainProfile};
use proptest::prelude::*;

/// Strings mixing Telugu, ASCII and stray combining marks
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('\u{0C00}', '\u{0C7F}'),
            2 => prop::char::range('a', 'z'),
            1 => Just('\u{200C}'),
            1 => Just(' '),
            1 => any::<char>(),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn units_reproduce_the_scalars(text in mixed_text()) {
        let profile = get_profile("telugu");
        let (scalars, units) = profile.parse(&text);
        prop_assert_eq!(join_units(&units), scalars.to_text());
        prop_assert_eq!(
            units.iter().map(|u| u.scalar_count()).sum::<usize>(),
            scalars.len()
        );
        prop_assert_eq!(scalars.to_text(), text.replace('\u{200C}', ""));
    }

    #[test]
    fn units_are_never_empty(text in mixed_text()) {
        let (_, units) = get_profile("te").parse(&text);
        prop_assert!(units.iter().all(|u| u.scalar_count() >= 1));
    }

    #[test]
    fn parsing_is_idempotent(text in mixed_text()) {
        let profile = get_profile("te");
        prop_assert_eq!(profile.parse(&text), profile.parse(&text));
    }

    #[test]
    fn weight_bounds_strength(text in mixed_text()) {
        let (scalars, units) = get_profile("te").parse(&text);
        let strength = analysis::strength(&units, true);
        let weight = analysis::weight(&units, true);
        prop_assert_eq!(weight, scalars.len());
        if units.is_empty() {
            prop_assert_eq!(strength, 0);
        } else {
            prop_assert!(weight >= strength && strength >= 1);
        }
    }

    #[test]
    fn reverse_twice_is_identity(text in mixed_text()) {
        let (_, units) = get_profile("te").parse(&text);
        let mut reversed = units.clone();
        reversed.reverse();
        prop_assert_eq!(analysis::is_palindrome(&units), reversed == units);
        reversed.reverse();
        prop_assert_eq!(reversed, units);
    }

    #[test]
    fn anagram_check_is_symmetric(a in mixed_text(), b in mixed_text()) {
        let profile = get_profile("te");
        let (_, a) = profile.parse(&a);
        let (_, b) = profile.parse(&b);
        prop_assert_eq!(analysis::are_anagrams(&a, &b), analysis::are_anagrams(&b, &a));
        prop_assert!(analysis::are_anagrams(&a, &a));
    }

    #[test]
    fn ladder_check_is_symmetric(a in "[a-c]{0,4}", b in "[a-c]{0,4}") {
        let profile = PlainProfile::english();
        let (_, a) = profile.parse(&a);
        let (_, b) = profile.parse(&b);
        prop_assert_eq!(
            analysis::are_ladder_words(&a, &b),
            analysis::are_ladder_words(&b, &a)
        );
    }

    #[test]
    fn plain_profile_yields_one_unit_per_scalar(text in any::<String>()) {
        let (scalars, units) = PlainProfile::english().parse(&text);
        prop_assert_eq!(units.len(), extract(&text).len());
        prop_assert_eq!(units.len(), scalars.len());
    }
}
