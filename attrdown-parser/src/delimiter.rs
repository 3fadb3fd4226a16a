//! Decides how an `@`-prefixed annotation is separated from the
//! remaining element content.

/// The five delimiter strategies, matched in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterMode {
    /// `@{...}` multi-attribute group, split on the first `"} "`.
    BraceGroup,
    /// `@.class` shorthand, split on the first space.
    ClassShorthand,
    /// `@#id` shorthand, split on the first space.
    IdShorthand,
    /// Single attribute with a double-quoted value, split on `"\" "`.
    DoubleQuoted,
    /// Single attribute with a single-quoted value, split on `"' "`.
    SingleQuoted,
    /// Single unquoted attribute, split on the first space.
    Unquoted,
}

impl DelimiterMode {
    /// Evaluate the ordered match table top to bottom. `None` means the
    /// text carries no recognizable annotation and must pass through
    /// untouched.
    #[must_use]
    pub fn resolve(text: &str) -> Option<Self> {
        if !text.starts_with('@') {
            None
        } else if text.starts_with("@{") {
            Some(Self::BraceGroup)
        } else if text.starts_with("@.") {
            Some(Self::ClassShorthand)
        } else if text.starts_with("@#") {
            Some(Self::IdShorthand)
        } else if text.contains("\" ") {
            Some(Self::DoubleQuoted)
        } else if text.contains("' ") {
            Some(Self::SingleQuoted)
        } else {
            Some(Self::Unquoted)
        }
    }

    #[must_use]
    fn delimiter(self) -> &'static str {
        match self {
            Self::BraceGroup => "} ",
            Self::DoubleQuoted => "\" ",
            Self::SingleQuoted => "' ",
            Self::ClassShorthand | Self::IdShorthand | Self::Unquoted => " ",
        }
    }
}

/// Split `text` into the raw annotation string (stripped of its `@`,
/// brace, and space wrapping) and the remaining content. The remainder
/// is empty when no content follows the annotation.
#[must_use]
pub(crate) fn split_annotation(text: &str) -> Option<(&str, &str)> {
    let mode = DelimiterMode::resolve(text)?;
    let delimiter = mode.delimiter();
    let (raw, remainder) = match text.split_once(delimiter) {
        Some((raw, remainder)) => (raw, remainder),
        None => (text, ""),
    };
    Some((raw.trim_matches(&['@', '{', '}', ' '][..]), remainder))
}
