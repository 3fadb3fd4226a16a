//! Attribute injection: strip an `@` annotation off an element's
//! content and merge the parsed attributes into its attribute map.

use crate::{
    delimiter::split_annotation,
    grammar::ParsedAttributeSet,
    model::{Content, Element},
};

/// Apply an `@` annotation carried by `element`, if any. For `img`
/// elements the annotation lives in the `alt` attribute; for everything
/// else it prefixes the text content. Returns whether the element was
/// modified.
///
/// Merge rules: `id` keeps the first value seen (a pre-existing `id` on
/// the element wins over the annotation), classes concatenate onto any
/// pre-existing `class`, and every other key overwrites.
pub(crate) fn inject_attributes(element: &mut Element) -> bool {
    if element.name == "img" {
        let Some(alt) = element.attributes.get("alt") else {
            return false;
        };
        let Some((set, remainder)) = parse_annotation(alt) else {
            return false;
        };
        let remainder = clean_remainder(&remainder);
        merge(set, element);
        element.attributes.set("alt", remainder);
        tracing::trace!(name = %element.name, "injected attributes from alt text");
        return true;
    }

    let Some(text) = element.text_content() else {
        return false;
    };
    let Some((set, remainder)) = parse_annotation(text) else {
        return false;
    };
    let remainder = clean_remainder(&remainder);
    merge(set, element);
    element.content = Content::Text(remainder);
    tracing::trace!(name = %element.name, "injected attributes from content");
    true
}

/// Split and parse an annotation. `None` covers both failure modes that
/// recover as pass-through: no delimiter mode applies, or the raw string
/// reduces to an empty set.
fn parse_annotation(text: &str) -> Option<(ParsedAttributeSet, String)> {
    let (raw, remainder) = split_annotation(text)?;
    let set = ParsedAttributeSet::parse(raw);
    if set.is_empty() {
        return None;
    }
    Some((set, remainder.to_string()))
}

/// Clean the content remainder: NBSP and vertical tab become spaces,
/// then the edges are trimmed. Interior newlines of multi-line block
/// content survive.
fn clean_remainder(remainder: &str) -> String {
    remainder
        .replace(['\u{a0}', '\u{b}'], " ")
        .trim_matches(&['\t', '\n', '\r', '\0', ' '][..])
        .to_string()
}

fn merge(set: ParsedAttributeSet, element: &mut Element) {
    if let Some(id) = set.id {
        if !element.attributes.contains("id") {
            element.attributes.set("id", id);
        }
    }
    if !set.classes.is_empty() {
        element.attributes.append_class(&set.classes.join(" "));
    }
    for (key, value) in set.pairs {
        element.attributes.set(key, value);
    }
}
