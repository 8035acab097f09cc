//! Built-in rules
//!
//! Concrete leaves of the rule system. Each implements exactly one
//! predicate and inherits the chaining protocol, parameter access, and
//! sentinel bypass from [`Rule`](crate::foundation::Rule).
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rule::prelude::*;
//!
//! assert!(string_rule().validate(&json!("hello")).is_pass());
//! assert!(email_rule().validate(&json!("user@example.com")).is_pass());
//! assert!(length_between(3, 20).validate(&json!("alice")).is_pass());
//! ```

pub mod email;
pub mod length;
pub mod required;
pub mod string;

pub use email::{EmailRule, email_rule};
pub use length::{LengthBetweenRule, length_between};
pub use required::{RequiredRule, required};
pub use string::{StringRule, string_rule};
