//! Inline span scanner: strong and emphasis runs, links, images, and
//! bare-URL autolinks.

use crate::{
    autolink::url_run_end,
    hooks::EngineHooks,
    model::{Content, Element},
    options::Options,
};

/// Run the finalize hook on a freshly built element, then parse its
/// remaining text into spans. Elements whose text carries no inline
/// markup keep their [`Content::Text`] form.
pub(crate) fn finalize_element<H: EngineHooks>(element: &mut Element, hooks: &H, options: &Options) {
    hooks.on_element_finalize(element);
    inline_content(element, hooks, options);
}

/// Parse an element's text content into inline spans without invoking
/// the finalize hook again. Used where finalization already happened at
/// a different point, such as table header cells.
pub(crate) fn inline_content<H: EngineHooks>(element: &mut Element, hooks: &H, options: &Options) {
    if element.name == "img" {
        return;
    }
    let Some(text) = element.text_content() else {
        return;
    };
    let text = text.to_string();
    let spans = parse_spans(&text, hooks, options);
    if spans.is_empty() {
        return;
    }
    if spans.len() == 1 && spans.first().is_some_and(Element::is_text_leaf) {
        return;
    }
    element.content = Content::Children(spans);
}

/// Scan `text` left to right, producing text leaves interleaved with
/// inline elements.
pub(crate) fn parse_spans<H: EngineHooks>(text: &str, hooks: &H, options: &Options) -> Vec<Element> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;
    while let Some(rest) = text.get(pos..) {
        if rest.is_empty() {
            break;
        }
        if let Some((span, consumed)) = match_span(text, pos, rest, hooks, options) {
            flush(&mut plain, &mut spans);
            spans.push(span);
            pos += consumed;
            continue;
        }
        let Some(c) = rest.chars().next() else {
            break;
        };
        plain.push(c);
        pos += c.len_utf8();
    }
    flush(&mut plain, &mut spans);
    spans
}

fn flush(plain: &mut String, spans: &mut Vec<Element>) {
    if !plain.is_empty() {
        spans.push(Element::text(std::mem::take(plain)));
    }
}

/// Try to match one inline span at the current position. Returns the
/// finished element and the number of source bytes it consumed.
fn match_span<H: EngineHooks>(
    text: &str,
    pos: usize,
    rest: &str,
    hooks: &H,
    options: &Options,
) -> Option<(Element, usize)> {
    if rest.starts_with("![") {
        return match_image(rest, hooks, options);
    }
    if rest.starts_with('[') {
        return match_link(rest, hooks, options);
    }
    if rest.starts_with("**") || rest.starts_with("__") {
        return match_delimited(rest, 2, "strong", hooks, options);
    }
    if rest.starts_with('*') {
        return match_delimited(rest, 1, "em", hooks, options);
    }
    if rest.starts_with('_') && !prev_is_alphanumeric(text, pos) {
        return match_delimited(rest, 1, "em", hooks, options);
    }
    if rest.starts_with("http://") || rest.starts_with("https://") {
        return match_autolink(text, pos, hooks, options);
    }
    None
}

fn prev_is_alphanumeric(text: &str, pos: usize) -> bool {
    text.get(..pos)
        .and_then(|head| head.chars().next_back())
        .is_some_and(char::is_alphanumeric)
}

/// `**strong**`, `__strong__`, `*em*`, `_em_`.
fn match_delimited<H: EngineHooks>(
    rest: &str,
    width: usize,
    name: &str,
    hooks: &H,
    options: &Options,
) -> Option<(Element, usize)> {
    let marker = rest.get(..width)?;
    let body = rest.get(width..)?;
    let close = body.find(marker)?;
    let inner = body.get(..close)?;
    if inner.is_empty() || inner.contains('\n') {
        return None;
    }
    let mut element = Element::new(name, inner);
    finalize_element(&mut element, hooks, options);
    Some((element, width + close + width))
}

/// `[label](href)`.
fn match_link<H: EngineHooks>(
    rest: &str,
    hooks: &H,
    options: &Options,
) -> Option<(Element, usize)> {
    let (label, href, consumed) = bracket_pair(rest, 1)?;
    let mut element = Element::new("a", label);
    element.attributes.set("href", href);
    finalize_element(&mut element, hooks, options);
    Some((element, consumed))
}

/// `![alt](src)`. The element is a leaf; the finalize hook may rewrite
/// its `alt` attribute but its content is never inline-parsed.
fn match_image<H: EngineHooks>(
    rest: &str,
    hooks: &H,
    options: &Options,
) -> Option<(Element, usize)> {
    let (alt, src, consumed) = bracket_pair(rest, 2)?;
    let mut element = Element::new("img", "");
    element.attributes.set("src", src);
    element.attributes.set("alt", alt);
    finalize_element(&mut element, hooks, options);
    Some((element, consumed))
}

/// Split `[..](..)` starting after an `open`-byte prefix. Returns the
/// bracketed text, the parenthesized target, and the consumed length.
fn bracket_pair(rest: &str, open: usize) -> Option<(&str, &str, usize)> {
    let body = rest.get(open..)?;
    let close = body.find("](")?;
    let label = body.get(..close)?;
    let target_part = body.get(close + 2..)?;
    let end = target_part.find(')')?;
    let target = target_part.get(..end)?;
    Some((label, target, open + close + 2 + end + 1))
}

/// A bare `http(s)://` URL, linked as-is. The hook decides whether the
/// candidate stands; trailing sentence punctuation stays outside the
/// link.
fn match_autolink<H: EngineHooks>(
    text: &str,
    pos: usize,
    hooks: &H,
    options: &Options,
) -> Option<(Element, usize)> {
    if !options.urls_linked {
        return None;
    }
    if prev_is_alphanumeric(text, pos) {
        return None;
    }
    if !hooks.on_inline_url_candidate(text, pos) {
        return None;
    }
    let end = url_run_end(text, pos);
    let run = text.get(pos..end)?;
    let url = run.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    let scheme_len = if url.starts_with("https://") { 8 } else { 7 };
    if url.len() <= scheme_len {
        return None;
    }
    let mut element = Element::new("a", url);
    element.attributes.set("href", url);
    Some((element, url.len()))
}
