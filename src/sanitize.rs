//! Turning raw workspace / output names into single command arguments.
//!
//! i3 splits command arguments on whitespace unless they are wrapped in
//! double quotes, so a name such as `2: web` must be emitted as `"2: web"`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How names are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Wrap names containing a space in double quotes, nothing else.
    ///
    /// A name containing both a space and a `"` produces a malformed token.
    #[default]
    Plain,
    /// Quote names containing a space or a `"`, and backslash-escape `\`
    /// and `"` inside the quotes.
    Escaped,
}

/// Make `name` usable as one whitespace-delimited argument.
///
/// Names without a space are returned unchanged; anything else is wrapped
/// in double quotes.  Embedded quotes are not escaped, see
/// [`QuoteStyle::Escaped`] for that.
pub fn sanitize(name: &str) -> Cow<'_, str> {
    if name.contains(' ') {
        Cow::Owned(format!("\"{}\"", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// [`sanitize`] with an explicit [`QuoteStyle`].
pub fn sanitize_with(name: &str, style: QuoteStyle) -> Cow<'_, str> {
    match style {
        QuoteStyle::Plain => sanitize(name),
        QuoteStyle::Escaped => {
            if !name.contains(' ') && !name.contains('"') {
                return Cow::Borrowed(name);
            }
            let mut quoted = String::with_capacity(name.len() + 2);
            quoted.push('"');
            for c in name.chars() {
                if c == '"' || c == '\\' {
                    quoted.push('\\');
                }
                quoted.push(c);
            }
            quoted.push('"');
            Cow::Owned(quoted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_without_space_is_unchanged() {
        assert_eq!(sanitize("foo"), "foo");
        assert!(matches!(sanitize("HDMI-1"), Cow::Borrowed(_)));
    }

    #[test]
    fn name_with_space_is_quoted() {
        assert_eq!(sanitize("my ws"), "\"my ws\"");
        assert_eq!(sanitize("2: web"), "\"2: web\"");
    }

    #[test]
    fn idempotent_without_spaces() {
        for name in ["1", "foo", "a\"b", "", "x:y"] {
            let once = sanitize(name);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn plain_style_does_not_escape_quotes() {
        assert_eq!(sanitize_with("say \"hi\"", QuoteStyle::Plain), "\"say \"hi\"\"");
        assert_eq!(sanitize_with("a\"b", QuoteStyle::Plain), "a\"b");
    }

    #[test]
    fn escaped_style_escapes_quotes_and_backslashes() {
        assert_eq!(sanitize_with("say \"hi\"", QuoteStyle::Escaped), r#""say \"hi\"""#);
        assert_eq!(sanitize_with("a\"b", QuoteStyle::Escaped), r#""a\"b""#);
        assert_eq!(sanitize_with("c:\\ tmp", QuoteStyle::Escaped), r#""c:\\ tmp""#);
    }

    #[test]
    fn escaped_style_leaves_simple_names_alone() {
        assert_eq!(sanitize_with("DP-2", QuoteStyle::Escaped), "DP-2");
        assert_eq!(sanitize_with("my ws", QuoteStyle::Escaped), "\"my ws\"");
    }

    #[test]
    fn quote_style_deserializes_lowercase() {
        let s: QuoteStyle = serde_json::from_str(r#""escaped""#).unwrap();
        assert_eq!(s, QuoteStyle::Escaped);
        assert_eq!(QuoteStyle::default(), QuoteStyle::Plain);
    }
}
