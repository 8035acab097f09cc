//! Outcome types for rule evaluation
//!
//! A validation failure is ordinary return data, never a panic. Success is
//! the distinguished [`RuleOutcome::Pass`] marker; an empty message or an
//! empty message list is still a failure.
//!
//! Message strings use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Ordered failure messages, inline-allocated for the common short case.
pub type Messages = SmallVec<[Cow<'static, str>; 2]>;

/// The result of evaluating a rule against a value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_rule::foundation::RuleOutcome;
///
/// let ok = RuleOutcome::Pass;
/// let single = RuleOutcome::fail("Value should be a string");
/// let several = RuleOutcome::fail_many(["too short", "not lowercase"]);
///
/// assert!(ok.is_pass());
/// assert!(!single.is_pass());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleOutcome {
    /// The value satisfied the rule. The only success marker.
    Pass,
    /// The value violated the rule in one way.
    Fail(Cow<'static, str>),
    /// The value violated the rule in several independent ways, in order.
    ///
    /// The base chaining protocol never aggregates across rules; producing
    /// more than one message is a concrete predicate's own choice.
    FailMany(Messages),
}

impl RuleOutcome {
    /// Creates a single-message failure.
    pub fn fail(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Fail(message.into())
    }

    /// Creates a multi-message failure, preserving order.
    pub fn fail_many<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        Self::FailMany(messages.into_iter().map(Into::into).collect())
    }

    /// Whether this outcome is the success marker.
    ///
    /// This is the only valid success test: `Fail("")` and `FailMany([])`
    /// are failures.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// All failure messages, in order. Empty for [`Pass`](Self::Pass).
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        match self {
            Self::Pass => Vec::new(),
            Self::Fail(message) => vec![message.as_ref()],
            Self::FailMany(messages) => messages.iter().map(|m| m.as_ref()).collect(),
        }
    }

    /// The first failure message, if any.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message.as_ref()),
            Self::FailMany(messages) => messages.first().map(|m| m.as_ref()),
        }
    }

    /// Bridges to `Result` for `?`-style call sites.
    #[must_use = "validation result must be checked"]
    pub fn into_result(self) -> Result<(), RuleViolation> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(message) => Err(RuleViolation {
                messages: smallvec::smallvec![message],
            }),
            Self::FailMany(messages) => Err(RuleViolation { messages }),
        }
    }
}

/// A failed outcome carried as a standard error.
///
/// Callers that present errors through `std::error::Error` machinery get
/// the messages joined with `"; "`; the originals stay accessible through
/// [`messages`](Self::messages).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct RuleViolation {
    messages: Messages,
}

impl RuleViolation {
    /// The failure messages, in order. Never empty.
    #[must_use]
    pub fn messages(&self) -> &[Cow<'static, str>] {
        &self.messages
    }

    /// Consumes the violation, returning its messages.
    #[must_use]
    pub fn into_messages(self) -> Messages {
        self.messages
    }
}

// ============================================================================
// TESTS
// ============================================================================
