//! Property-based tests for formflow-validator.

use formflow_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = not_empty();
        let b = min_length(6);

        let expected = a.is_valid(&*s) && b.is_valid(&*s);
        prop_assert_eq!(a.and(b).is_valid(&*s), expected);
    }
}

// ============================================================================
// LENGTH RULES
// ============================================================================

proptest! {
    #[test]
    fn min_length_matches_measured_length(s in ".{0,20}", min in 0usize..10) {
        for mode in [LengthMode::Bytes, LengthMode::Chars, LengthMode::Graphemes] {
            let v = min_length(min).with_mode(mode);
            prop_assert_eq!(v.is_valid(&*s), mode.measure(&s) >= min);
        }
    }

    #[test]
    fn grapheme_count_never_exceeds_char_count(s in ".{0,20}") {
        prop_assert!(LengthMode::Graphemes.measure(&s) <= LengthMode::Chars.measure(&s));
    }

    #[test]
    fn length_divisibility_follows_modulo(s in "[a-z0-9]{0,20}", divisor in 1usize..6) {
        let v = length_divisible_by(divisor);
        prop_assert_eq!(v.is_valid(&*s), s.len() % divisor == 0);
    }

    #[test]
    fn matches_is_string_equality(a in "[ab]{0,4}", b in "[ab]{0,4}") {
        prop_assert_eq!(matches(&a).is_valid(&*b), a == b);
    }
}
