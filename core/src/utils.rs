//! Utility functions and types.

use std::borrow::Cow;
use std::fmt::{Debug, Display};

/// Redacts a string by replacing all but the first and last three characters with asterisks.
///
/// - If the input string has fewer than 12 characters, it should be entirely redacted.
/// - If the input string has 12 or more characters, only the first three and the last three.
///
/// This allows users to tell different redacted strings apart without leaking
/// the secret itself.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.0.is_char_boundary(3) || !self.0.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Redact the value of every `key=value` pair named `key` in a URL query.
///
/// Values are matched on the raw (still percent-encoded) query text. The rest of
/// the URL is returned untouched.
pub fn redact_query_param<'a>(url: &'a str, key: &str) -> Cow<'a, str> {
    let Some((base, query)) = url.split_once('?') else {
        return Cow::Borrowed(url);
    };

    let prefix = format!("{key}=");
    if !query.split('&').any(|kv| kv.starts_with(&prefix)) {
        return Cow::Borrowed(url);
    }

    let query = query
        .split('&')
        .map(|kv| match kv.strip_prefix(&prefix) {
            Some(value) => format!("{prefix}{}", Redact(value)),
            None => kv.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");
    Cow::Owned(format!("{base}?{query}"))
}
