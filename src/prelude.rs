//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_rule::prelude::*;` import that brings in
//! the core trait, outcome and parameter types, the sentinel helpers, all
//! built-in rules, and the `json!` value macro.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rule::prelude::*;
//!
//! let (outcome, rule) = LengthBetweenRule::quick(&json!("alice"), params![3, 20]);
//! assert!(outcome.is_pass());
//! assert_eq!(rule.get("min"), Some(&json!(3)));
//! ```

// ============================================================================
// FOUNDATION: Core trait, outcomes, parameters, sentinel
// ============================================================================

pub use crate::foundation::{
    Messages, NOT_PROVIDED, ParamKey, Params, Rule, RuleExt, RuleOutcome, RuleViolation,
    is_not_provided, not_provided,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::{
    EmailRule, LengthBetweenRule, RequiredRule, StringRule, email_rule, length_between, required,
    string_rule,
};

// ============================================================================
// MACROS AND VALUE CURRENCY
// ============================================================================

pub use crate::{params, rule};
pub use serde_json::{Value, json};
