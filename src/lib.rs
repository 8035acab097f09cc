//! # nebula-rule
//!
//! A minimal, extensible framework for validating single values against
//! chainable rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_rule::prelude::*;
//!
//! let rule = email_rule();
//! assert!(rule.validate(&json!("user@example.com")).is_pass());
//!
//! // Absent optional fields bypass validation entirely.
//! assert!(rule.validate(&not_provided()).is_pass());
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate leaf rules, or implement
//! [`Rule`](foundation::Rule) manually when a rule needs parameter aliases,
//! pre/post chains, or a sentinel-bypass override.
//!
//! ## Built-in Rules
//!
//! - [`StringRule`](rules::StringRule) — value must be a JSON string
//! - [`EmailRule`](rules::EmailRule) — value must be a valid email address
//! - [`RequiredRule`](rules::RequiredRule) — value must have been supplied
//! - [`LengthBetweenRule`](rules::LengthBetweenRule) — string length within
//!   an inclusive range

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

// Re-export the dynamic value currency
pub use serde_json::Value;

// Macro support: lets `params!` expand `json!` from caller crates.
#[doc(hidden)]
pub use serde_json as __serde_json;
