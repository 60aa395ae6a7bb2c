//! Minimal XML text escaping.

use std::borrow::Cow;

/// Escape the five XML special characters in `text`.
///
/// Borrows when nothing needs escaping.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len().saturating_add(8));
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Kanpur Central", "Kanpur Central")]
    #[case("Joint <7>", "Joint &lt;7&gt;")]
    #[case("A & B", "A &amp; B")]
    #[case("\"Lucknow's\"", "&quot;Lucknow&apos;s&quot;")]
    fn escapes_special_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape(input), expected);
    }

    #[rstest]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape("Unnao"), Cow::Borrowed(_)));
    }
}
