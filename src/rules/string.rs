//! String type rule

crate::rule! {
    /// Passes when the value is a JSON string.
    ///
    /// The empty string is a string and passes; `null` is not and fails.
    pub StringRule;
    predicate(self, value) { value.is_string() }
    message = "Value should be a string";
    fn string_rule();
}
