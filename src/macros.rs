//! Macros for creating rules and parameter sets with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a complete leaf rule (struct + `Rule` impl + factory fn)
//! - [`params!`] — Build a positional or named parameter set
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_rule::rule;
//! use nebula_rule::foundation::{Rule, RuleOutcome};
//!
//! rule! {
//!     /// Passes when the value is a JSON boolean.
//!     pub BooleanRule;
//!     predicate(self, value) { value.is_boolean() }
//!     message = "Value should be a boolean";
//!     fn boolean_rule();
//! }
//!
//! let params = params!["low", "high"];          // positional
//! let params = params! { "min" => 3, "max" => 9 }; // named
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete leaf rule: struct definition with parameter storage,
/// `Rule` implementation, and factory function.
///
/// `#[derive(Debug, Clone, Default)]` is always applied, so the generated
/// rule works with [`RuleExt`](crate::foundation::RuleExt) out of the box.
///
/// Rules that need parameter aliases, a sentinel-bypass override, or
/// pre/post chains implement [`Rule`](crate::foundation::Rule) manually.
///
/// # Variants
///
/// **Fixed message** (the common leaf shape):
/// ```rust,ignore
/// rule! {
///     pub StringRule;
///     predicate(self, value) { value.is_string() }
///     message = "Value should be a string";
///     fn string_rule();
/// }
/// ```
///
/// **Custom outcome** (for dynamic or multi-message failures):
/// ```rust,ignore
/// rule! {
///     pub LowercaseRule;
///     predicate(self, value) { value.as_str().is_some_and(|s| s == s.to_lowercase()) }
///     error(self, value) { RuleOutcome::fail(format!("{value} is not lowercase")) }
///     fn lowercase_rule();
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Fixed message + factory fn ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        predicate($self_:ident, $value:ident) $pred:block
        message = $msg:expr;
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            predicate($self_, $value) $pred
            message = $msg;
        }

        #[must_use]
        $vis fn $factory() -> $name {
            <$name as ::std::default::Default>::default()
        }
    };

    // ── Fixed message, no factory ────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        predicate($self_:ident, $value:ident) $pred:block
        message = $msg:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            params: $crate::foundation::Params,
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn evaluate(&$self_, $value: &$crate::Value) -> $crate::foundation::RuleOutcome {
                if $pred {
                    $crate::foundation::RuleOutcome::Pass
                } else {
                    $crate::foundation::RuleOutcome::fail($msg)
                }
            }

            fn params(&self) -> &$crate::foundation::Params {
                &self.params
            }

            fn params_mut(&mut self) -> &mut $crate::foundation::Params {
                &mut self.params
            }
        }
    };

    // ── Custom outcome + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        predicate($self_:ident, $value:ident) $pred:block
        error($self2:ident, $evalue:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            predicate($self_, $value) $pred
            error($self2, $evalue) $err
        }

        #[must_use]
        $vis fn $factory() -> $name {
            <$name as ::std::default::Default>::default()
        }
    };

    // ── Custom outcome, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        predicate($self_:ident, $value:ident) $pred:block
        error($self2:ident, $evalue:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            params: $crate::foundation::Params,
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn evaluate(&$self_, $value: &$crate::Value) -> $crate::foundation::RuleOutcome {
                if $pred {
                    $crate::foundation::RuleOutcome::Pass
                } else {
                    let $evalue = $value;
                    $err
                }
            }

            fn params(&self) -> &$crate::foundation::Params {
                &self.params
            }

            fn params_mut(&mut self) -> &mut $crate::foundation::Params {
                &mut self.params
            }
        }
    };
}

// ============================================================================
// PARAMS MACRO
// ============================================================================

/// Builds a [`Params`](crate::foundation::Params) set.
///
/// Values go through `serde_json::json!`, so plain literals work.
///
/// ```rust,ignore
/// let positional = params![15, 99];                  // keys 0, 1
/// let named = params! { "min" => 15, "max" => 99 };  // keys "min", "max"
/// let empty = params![];
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::foundation::Params::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut params = $crate::foundation::Params::new();
        $(params.set($key, $crate::__serde_json::json!($value));)+
        params
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::foundation::Params::positional([$($crate::__serde_json::json!($value)),+])
    };
}

// ============================================================================
// TESTS
// ============================================================================
