//! Core rule types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Outcomes**: [`RuleOutcome`], [`RuleViolation`]
//! - **Parameters**: [`Params`], [`ParamKey`]
//! - **Sentinel**: [`NOT_PROVIDED`] and friends
//!
//! # Architecture
//!
//! A rule is one predicate plus shared plumbing. Concrete rules implement
//! [`Rule::evaluate`] and inherit everything else: the `validate` entry
//! point that sequences pre-rules, the predicate, and post-rules with
//! fail-fast semantics; the "not provided" bypass; and named/indexed
//! parameter access.
//!
//! Failure is data, never a panic: [`RuleOutcome::Pass`] is the only
//! success marker, and anything else carries one or more messages.

pub mod outcome;
pub mod params;
pub mod sentinel;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use outcome::{Messages, RuleOutcome, RuleViolation};
pub use params::{ParamKey, Params};
pub use sentinel::{NOT_PROVIDED, is_not_provided, not_provided};
pub use traits::{Rule, RuleExt};
