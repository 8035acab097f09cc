//! String length range rule

use serde_json::Value;

use crate::foundation::{Params, Rule, RuleExt, RuleOutcome};
use crate::rules::string::string_rule;

/// String length within an inclusive range, counted in chars.
///
/// Parameters are positional — `[min, max]` — and aliased as `"min"` and
/// `"max"`, so `rule.get("min")` reads the first slot. Either bound may be
/// omitted to leave that side unconstrained.
///
/// A [`StringRule`](crate::rules::StringRule) pre-rule runs first, so
/// non-string input reports the type error rather than a length error.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_rule::prelude::*;
///
/// let rule = length_between(3, 12);
/// assert!(rule.validate(&json!("alice")).is_pass());
/// assert_eq!(rule.get("min"), Some(&json!(3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LengthBetweenRule {
    params: Params,
}

impl LengthBetweenRule {
    fn bound(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_u64)
    }
}

impl Rule for LengthBetweenRule {
    fn evaluate(&self, value: &Value) -> RuleOutcome {
        let Some(text) = value.as_str() else {
            // Normally unreachable behind the pre-rule; kept for direct
            // predicate calls.
            return RuleOutcome::fail("Value should be a string");
        };
        let length = text.chars().count() as u64;
        if let Some(min) = self.bound("min") {
            if length < min {
                return RuleOutcome::fail(format!(
                    "Value should be at least {min} characters long"
                ));
            }
        }
        if let Some(max) = self.bound("max") {
            if length > max {
                return RuleOutcome::fail(format!(
                    "Value should be at most {max} characters long"
                ));
            }
        }
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

    fn pre_rules(&self) -> Vec<Box<dyn Rule>> {
        vec![Box::new(string_rule())]
    }
}

/// Creates a [`LengthBetweenRule`] with both bounds set.
#[must_use]
pub fn length_between(min: u64, max: u64) -> LengthBetweenRule {
    LengthBetweenRule::make(crate::params![min, max])
}
