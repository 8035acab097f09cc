//! Required-value rule

use serde_json::Value;

use crate::foundation::{Params, Rule, RuleOutcome, is_not_provided};

/// Fails when the value was never supplied.
///
/// Opts out of the sentinel bypass so the predicate sees the raw marker.
/// Explicit `null` and `""` pass here — they were supplied; chain other
/// rules to constrain their content.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_rule::prelude::*;
///
/// let rule = required();
/// assert!(!rule.validate(&not_provided()).is_pass());
/// assert!(rule.validate(&json!(null)).is_pass());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequiredRule {
    params: Params,
}

impl Rule for RequiredRule {
    fn evaluate(&self, value: &Value) -> RuleOutcome {
        if is_not_provided(value) {
            RuleOutcome::fail("Value is required")
        } else {
            RuleOutcome::Pass
        }
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    fn ignore_not_provided(&self) -> bool {
        false
    }
}

/// Creates a [`RequiredRule`].
#[must_use]
pub fn required() -> RequiredRule {
    RequiredRule::default()
}
