//! Core traits for the rule system
//!
//! This module defines [`Rule`], the trait every rule implements, and
//! [`RuleExt`], the construction conveniences layered on top of it.

use serde_json::Value;

use crate::foundation::outcome::RuleOutcome;
use crate::foundation::params::Params;
use crate::foundation::sentinel::is_not_provided;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A validation rule: one predicate plus shared plumbing.
///
/// Concrete rules implement [`evaluate`](Self::evaluate) and the two
/// parameter-storage accessors; everything else is provided. The
/// [`validate`](Self::validate) entry point sequences the "not provided"
/// bypass, the pre-rule chain, the predicate, and the post-rule chain,
/// short-circuiting on the first failure.
///
/// Rules are stateless across calls: `validate` takes `&self`, so no
/// validation call can mutate the parameter set. Sharing one instance
/// across threads is safe as long as no thread calls
/// [`set_params`](RuleExt::set_params) while validation is in flight —
/// a caller obligation, not something the trait synchronizes internally,
/// since rules are meant to be cheap per-call utilities.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_rule::foundation::{Params, Rule, RuleOutcome};
/// use serde_json::Value;
///
/// #[derive(Debug, Default)]
/// struct NonEmptyRule {
///     params: Params,
/// }
///
/// impl Rule for NonEmptyRule {
///     fn evaluate(&self, value: &Value) -> RuleOutcome {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => RuleOutcome::Pass,
///             _ => RuleOutcome::fail("Value should be a non-empty string"),
///         }
///     }
///
///     fn params(&self) -> &Params {
///         &self.params
///     }
///
///     fn params_mut(&mut self) -> &mut Params {
///         &mut self.params
///     }
/// }
/// ```
pub trait Rule {
    /// The core predicate.
    ///
    /// Returns [`RuleOutcome::Pass`] or a failure carrying one or more
    /// messages. Implementations must not panic on unexpected input —
    /// a wrong type is a failed validation, not a programming error.
    fn evaluate(&self, value: &Value) -> RuleOutcome;

    /// The rule's parameter set.
    fn params(&self) -> &Params;

    /// Mutable access to the parameter set.
    ///
    /// Used by [`RuleExt::set_params`] for wholesale replacement and by
    /// callers that build parameters imperatively before validating.
    fn params_mut(&mut self) -> &mut Params;

    /// Ordered aliases for positional parameters.
    ///
    /// Position *i* in this slice names the parameter under `Index(i)`,
    /// so `arg_names() == ["min", "max"]` makes `get("min")` resolve to
    /// the first positional parameter.
    fn arg_names(&self) -> &[&'static str] {
        &[]
    }

    /// Whether validation short-circuits to success on the sentinel.
    ///
    /// Defaults to `true`; rules that must see absent values (e.g. a
    /// required-field rule) override this to `false`.
    fn ignore_not_provided(&self) -> bool {
        true
    }

    /// Rules validated before this rule's own predicate.
    fn pre_rules(&self) -> Vec<Box<dyn Rule>> {
        Vec::new()
    }

    /// Rules validated after this rule's own predicate succeeds.
    fn post_rules(&self) -> Vec<Box<dyn Rule>> {
        Vec::new()
    }

    /// Validates a value against the rule.
    ///
    /// The full protocol: sentinel bypass, then pre-rules, then the
    /// predicate, then post-rules. The first non-pass outcome propagates
    /// verbatim and immediately; nothing is wrapped or aggregated.
    fn validate(&self, value: &Value) -> RuleOutcome {
        if self.ignore_not_provided() && is_not_provided(value) {
            return RuleOutcome::Pass;
        }
        let outcome = self.pre_validate(value);
        if !outcome.is_pass() {
            return outcome;
        }
        let outcome = self.evaluate(value);
        if !outcome.is_pass() {
            return outcome;
        }
        self.post_validate(value)
    }

    /// Runs the pre-rule chain, fail-fast.
    fn pre_validate(&self, value: &Value) -> RuleOutcome {
        for rule in self.pre_rules() {
            let outcome = rule.validate(value);
            if !outcome.is_pass() {
                return outcome;
            }
        }
        RuleOutcome::Pass
    }

    /// Runs the post-rule chain, fail-fast.
    fn post_validate(&self, value: &Value) -> RuleOutcome {
        for rule in self.post_rules() {
            let outcome = rule.validate(value);
            if !outcome.is_pass() {
                return outcome;
            }
        }
        RuleOutcome::Pass
    }

    /// Named parameter lookup.
    ///
    /// Resolution order:
    /// 1. `name` matches [`arg_names`](Self::arg_names) at position *i* —
    ///    resolves to the parameter under `Index(i)`.
    /// 2. `name` is an underscore-prefixed digit string (`_0`, `_12`) —
    ///    resolves to the parameter under `Index(N)`.
    /// 3. Otherwise `name` is treated literally as a named key.
    ///
    /// Missing keys resolve to `None` at every step.
    fn get(&self, name: &str) -> Option<&Value> {
        if let Some(position) = self.arg_names().iter().position(|alias| *alias == name) {
            return self.params().index(position);
        }
        if let Some(digits) = name.strip_prefix('_') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(index) = digits.parse::<usize>() {
                    return self.params().index(index);
                }
            }
        }
        self.params().named(name)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Construction conveniences for rules.
///
/// Automatically implemented for every `Rule` with a `Default` impl, which
/// is what the [`rule!`](crate::rule) macro generates.
pub trait RuleExt: Rule + Default {
    /// Constructs a rule with the given parameter set.
    #[must_use]
    fn make(params: Params) -> Self {
        let mut rule = Self::default();
        *rule.params_mut() = params;
        rule
    }

    /// Constructs a rule, validates `value`, and surfaces the instance so
    /// callers can inspect its parameters afterward.
    ///
    /// Equivalent to `Self::make(params).validate(value)` plus the
    /// instance.
    fn quick(value: &Value, params: Params) -> (RuleOutcome, Self) {
        let rule = Self::make(params);
        let outcome = rule.validate(value);
        (outcome, rule)
    }

    /// Replaces the entire parameter set, returning the same instance for
    /// chaining.
    ///
    /// Replacement is wholesale: keys from the previous set are gone, not
    /// merged.
    fn set_params(&mut self, params: Params) -> &mut Self {
        *self.params_mut() = params;
        self
    }
}

impl<R: Rule + Default> RuleExt for R {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct BareRule {
        params: Params,
    }

    impl Rule for BareRule {
        fn evaluate(&self, _value: &Value) -> RuleOutcome {
            RuleOutcome::Pass
        }

        fn params(&self) -> &Params {
            &self.params
        }

        fn params_mut(&mut self) -> &mut Params {
            &mut self.params
        }
    }

    #[derive(Debug, Default)]
    struct AliasedRule {
        params: Params,
    }

    impl Rule for AliasedRule {
        fn evaluate(&self, _value: &Value) -> RuleOutcome {
            RuleOutcome::Pass
        }

        fn params(&self) -> &Params {
            &self.params
        }

        fn params_mut(&mut self) -> &mut Params {
            &mut self.params
        }

        fn arg_names(&self) -> &[&'static str] {
            &["min", "max"]
        }
    }

    #[test]
    fn defaults_are_permissive() {
        let rule = BareRule::default();
        assert!(rule.arg_names().is_empty());
        assert!(rule.ignore_not_provided());
        assert!(rule.pre_rules().is_empty());
        assert!(rule.post_rules().is_empty());
    }

    #[test]
    fn get_resolves_aliases_before_positional_form() {
        let rule = AliasedRule::make(Params::positional([json!(15), json!(99)]));
        assert_eq!(rule.get("min"), Some(&json!(15)));
        assert_eq!(rule.get("max"), Some(&json!(99)));
    }

    #[test]
    fn get_resolves_underscore_positional_form() {
        let rule = BareRule::make(Params::positional([json!("a"), json!("b")]));
        assert_eq!(rule.get("_0"), Some(&json!("a")));
        assert_eq!(rule.get("_1"), Some(&json!("b")));
        assert_eq!(rule.get("_9"), None);
    }

    #[test]
    fn get_falls_back_to_literal_names() {
        let mut rule = BareRule::default();
        rule.params_mut().set("threshold", json!(0.5));
        assert_eq!(rule.get("threshold"), Some(&json!(0.5)));
        // An underscore prefix without digits is an ordinary name.
        rule.params_mut().set("_private", json!(true));
        assert_eq!(rule.get("_private"), Some(&json!(true)));
    }

    #[test]
    fn get_returns_none_for_missing_alias_target() {
        // Alias resolution commits to the positional slot even when empty.
        let rule = AliasedRule::default();
        assert_eq!(rule.get("min"), None);
    }

    #[test]
    fn make_with_empty_params() {
        let rule = BareRule::make(Params::new());
        assert!(rule.params().is_empty());
    }

    #[test]
    fn set_params_replaces_wholesale_and_chains() {
        let mut rule = BareRule::default();
        let mut first = Params::new();
        first.set("old", json!(1));
        let mut second = Params::new();
        second.set("new", json!(2));

        rule.set_params(first).set_params(second);

        assert!(!rule.params().exists("old"));
        assert_eq!(rule.get("new"), Some(&json!(2)));
    }

    #[test]
    fn quick_surfaces_the_instance() {
        let (outcome, rule) = BareRule::quick(&json!("x"), Params::positional([json!(7)]));
        assert!(outcome.is_pass());
        assert_eq!(rule.get("_0"), Some(&json!(7)));
    }
}
