//! Property-based tests for nebula-rule.

use nebula_rule::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn string_rule_idempotent(s in ".*") {
        let rule = string_rule();
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value), rule.validate(&value));
    }

    #[test]
    fn email_rule_idempotent(s in ".*") {
        let rule = email_rule();
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value), rule.validate(&value));
    }
}

// ============================================================================
// TOTALITY: no input string panics a rule
// ============================================================================

proptest! {
    #[test]
    fn rules_never_panic_on_strings(s in ".*") {
        let value = json!(s);
        let _ = string_rule().validate(&value);
        let _ = email_rule().validate(&value);
        let _ = required().validate(&value);
        let _ = length_between(0, 10).validate(&value);
    }
}

// ============================================================================
// SENTINEL BYPASS: holds for any parameters
// ============================================================================

proptest! {
    #[test]
    fn sentinel_bypass_holds_for_any_bounds(min in 0u64..100, max in 0u64..100) {
        let rule = LengthBetweenRule::make(params![min, max]);
        prop_assert!(rule.validate(&not_provided()).is_pass());
    }
}

// ============================================================================
// RULE SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn string_rule_accepts_every_string(s in ".*") {
        prop_assume!(s != NOT_PROVIDED);
        prop_assert!(string_rule().validate(&json!(s)).is_pass());
    }

    #[test]
    fn email_rule_rejects_strings_without_an_at_sign(s in "[^@]*") {
        prop_assume!(s != NOT_PROVIDED);
        prop_assert!(!email_rule().validate(&json!(s)).is_pass());
    }

    #[test]
    fn length_between_agrees_with_char_count(
        s in "[a-zA-Z0-9 ]{0,30}",
        min in 0u64..20,
        max in 0u64..20,
    ) {
        let length = s.chars().count() as u64;
        let outcome = length_between(min, max).validate(&json!(s));
        prop_assert_eq!(outcome.is_pass(), length >= min && length <= max);
    }
}
