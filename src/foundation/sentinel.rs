//! The reserved "value not provided at all" marker
//!
//! Composite callers pass the sentinel instead of `null` or omission when a
//! field was never supplied, so every field rule can be called
//! unconditionally: rules with the default bypass treat the sentinel as an
//! automatic pass, without each rule needing its own presence check.
//!
//! `null` and `""` are deliberately *not* the sentinel — they are ordinary
//! inputs a predicate may accept or reject on their own merits.

use serde_json::Value;

/// Reserved marker for a value that was never supplied.
pub const NOT_PROVIDED: &str = "nebula-rule::VALUE_IS_NOT_PROVIDED_AT_ALL";

/// The sentinel as a [`Value`].
#[must_use]
pub fn not_provided() -> Value {
    Value::String(NOT_PROVIDED.to_owned())
}

/// Whether `value` is the sentinel.
#[must_use]
pub fn is_not_provided(value: &Value) -> bool {
    value.as_str() == Some(NOT_PROVIDED)
}
