//! Rule parameter storage
//!
//! Parameters are an explicit typed key-value container rather than operator
//! overloading: keys are positional indices or names, values are
//! dynamically-typed [`Value`]s, and the accessors (`exists`, `get`, `set`,
//! `remove`) live directly on the container.
//!
//! Missing keys read as `None`, never an error, so optional parameters stay
//! permissive.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key into a rule's parameter set.
///
/// Keys need not be contiguous; `Index(0)` and `Index(7)` can coexist, and
/// positional and named keys can mix freely in one set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamKey {
    /// Positional slot, 0-based.
    Index(usize),
    /// Named slot.
    Name(String),
}

impl From<usize> for ParamKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A rule's parameter set.
///
/// Insertion order is irrelevant. The set is replaced wholesale on a rule
/// via [`RuleExt::set_params`](crate::foundation::RuleExt::set_params);
/// callers that build parameters imperatively before validating use the
/// accessors here.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_rule::foundation::Params;
/// use serde_json::json;
///
/// let mut params = Params::new();
/// params.set(0, json!(15)).set("max", json!(99));
///
/// assert!(params.exists(0));
/// assert_eq!(params.named("max"), Some(&json!(99)));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: HashMap<ParamKey, Value>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a positional set: element *i* lands under key `Index(i)`.
    pub fn positional<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (ParamKey::Index(index), value))
                .collect(),
        }
    }

    /// Whether the requested key is present.
    pub fn exists(&self, key: impl Into<ParamKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Reads the value under the requested key.
    pub fn get(&self, key: impl Into<ParamKey>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Inserts or replaces one entry, returning `self` for chaining.
    pub fn set(&mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Deletes one entry, returning its previous value.
    pub fn remove(&mut self, key: impl Into<ParamKey>) -> Option<Value> {
        self.entries.remove(&key.into())
    }

    /// Positional read: the value under `Index(index)`.
    #[must_use]
    pub fn index(&self, index: usize) -> Option<&Value> {
        self.entries.get(&ParamKey::Index(index))
    }

    /// Named read: the value under `Name(name)`.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.entries.get(&ParamKey::Name(name.to_owned()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &Value)> {
        self.entries.iter()
    }
}

impl FromIterator<(ParamKey, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (ParamKey, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exists_tests_the_requested_key() {
        let mut params = Params::new();
        params.set("min", json!(5));

        assert!(params.exists("min"));
        assert!(!params.exists("max"));
        assert!(!params.exists(0));
    }

    #[test]
    fn positional_assigns_contiguous_indices() {
        let params = Params::positional([json!(15), json!(99)]);
        assert_eq!(params.index(0), Some(&json!(15)));
        assert_eq!(params.index(1), Some(&json!(99)));
        assert_eq!(params.index(2), None);
    }

    #[test]
    fn keys_need_not_be_contiguous() {
        let mut params = Params::new();
        params.set(0, json!("a")).set(7, json!("b"));

        assert!(params.exists(0));
        assert!(!params.exists(1));
        assert!(params.exists(7));
    }

    #[test]
    fn positional_and_named_keys_coexist() {
        let mut params = Params::new();
        params.set(0, json!(1)).set("zero", json!(2));

        assert_eq!(params.index(0), Some(&json!(1)));
        assert_eq!(params.named("zero"), Some(&json!(2)));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn missing_keys_read_as_none() {
        let params = Params::new();
        assert_eq!(params.get("anything"), None);
        assert_eq!(params.index(0), None);
        assert_eq!(params.named("anything"), None);
    }

    #[test]
    fn set_replaces_and_remove_deletes() {
        let mut params = Params::new();
        params.set("key", json!(1));
        params.set("key", json!(2));
        assert_eq!(params.get("key"), Some(&json!(2)));

        assert_eq!(params.remove("key"), Some(json!(2)));
        assert!(!params.exists("key"));
        assert_eq!(params.remove("key"), None);
    }

    #[test]
    fn index_and_name_are_distinct_keys() {
        let mut params = Params::new();
        params.set(1, json!("positional"));
        params.set("1", json!("named"));

        assert_eq!(params.index(1), Some(&json!("positional")));
        assert_eq!(params.named("1"), Some(&json!("named")));
    }

    #[test]
    fn param_key_display() {
        assert_eq!(ParamKey::from(3).to_string(), "3");
        assert_eq!(ParamKey::from("min").to_string(), "min");
    }
}
