//! Email format rule

use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

crate::rule! {
    /// Passes when the value is a string matching the HTML5 email grammar.
    ///
    /// Non-string input fails with the same message: something that is not
    /// a string is not a valid email address either.
    pub EmailRule;
    predicate(self, value) { value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)) }
    message = "Value is not a valid email address";
    fn email_rule();
}
