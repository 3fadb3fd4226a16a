//! Guard against overlapping bare-URL autolinks.

/// The character run a bare URL occupies, starting at `start`: up to the
/// next whitespace or `<`.
pub(crate) fn url_run_end(context: &str, start: usize) -> usize {
    context
        .get(start..)
        .and_then(|rest| rest.find(|c: char| c.is_whitespace() || c == '<'))
        .map_or(context.len(), |offset| start + offset)
}

/// Whether a bare-URL candidate whose scheme starts at `scheme_start`
/// must be suppressed because an earlier bare URL in the already
/// consumed context overlaps it. The earlier match owns the link; a
/// second match inside its span would produce nested or duplicated
/// anchors for the same text.
pub(crate) fn suppresses_autolink(context: &str, scheme_start: usize) -> bool {
    let Some(head) = context.get(..scheme_start) else {
        return false;
    };
    let mut from = 0;
    while let Some(found) = find_scheme(head, from) {
        if url_run_end(context, found) > scheme_start {
            tracing::trace!(found, scheme_start, "suppressing overlapping autolink");
            return true;
        }
        from = found + 1;
    }
    false
}

/// Find the next `http://` or `https://` occurrence at or after `from`.
fn find_scheme(haystack: &str, from: usize) -> Option<usize> {
    let rest = haystack.get(from..)?;
    let http = rest.find("http://").map(|p| p + from);
    let https = rest.find("https://").map(|p| p + from);
    match (http, https) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (position, None) | (None, position) => position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_run_stops_at_whitespace_or_tag_open() {
        let context = "https://example.com/a next";
        assert_eq!(url_run_end(context, 0), 21);
        assert_eq!(url_run_end("https://a<b", 0), 9);
        assert_eq!(url_run_end("https://a", 0), 9);
    }

    #[test]
    fn candidate_inside_an_earlier_url_is_suppressed() {
        let context = "https://example.com/?redirect=https://other.example";
        let inner = context.rfind("https://").unwrap();
        assert!(suppresses_autolink(context, inner));
    }

    #[test]
    fn separated_urls_are_both_allowed() {
        let context = "see https://a.example and https://b.example";
        let second = context.rfind("https://").unwrap();
        assert!(!suppresses_autolink(context, second));
    }

    #[test]
    fn first_url_in_a_context_is_allowed() {
        let context = "go to https://a.example now";
        let first = context.find("https://").unwrap();
        assert!(!suppresses_autolink(context, first));
    }
}
