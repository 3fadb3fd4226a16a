/// Drop the redundant self-closing slash from a serialized void-element
/// tag, per HTML5. `<img src="x"/>` and `<img src="x" />` both become
/// `<img src="x">`; anything not ending in `/>` passes through, which
/// makes the transform idempotent.
#[must_use]
pub fn normalize_void_tag(tag: String) -> String {
    if tag.len() > 2 && tag.ends_with("/>") {
        let head = tag
            .get(..tag.len() - 2)
            .unwrap_or_default()
            .trim_end()
            .to_string();
        let mut normalized = head;
        normalized.push('>');
        return normalized;
    }
    tag
}
