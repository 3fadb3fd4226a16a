use std::io::Write;

use attrdown_parser::{Content, Element, EngineHooks};

use crate::Error;

/// HTML5 elements with no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A simple trait for helping in rendering document nodes.
pub(crate) trait Render {
    fn render<W: Write, H: EngineHooks>(&self, w: &mut W, hooks: &H) -> Result<(), Error>;
}

impl Render for Element {
    fn render<W: Write, H: EngineHooks>(&self, w: &mut W, hooks: &H) -> Result<(), Error> {
        if self.is_text_leaf() {
            let text = self.text_content().unwrap_or_default();
            w.write_all(escape_text(text).as_bytes())?;
            return Ok(());
        }
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            // Serialized in the engine's historical self-closing form,
            // then passed through the tag hook, which the attribute
            // extension uses to rewrite `/>` as plain `>`.
            let tag = hooks.on_serialize_tag(void_tag(self));
            w.write_all(tag.as_bytes())?;
            return Ok(());
        }
        write!(w, "<{}", self.name)?;
        write_attributes(self, w)?;
        w.write_all(b">")?;
        match &self.content {
            Content::Text(text) => w.write_all(escape_text(text).as_bytes())?,
            Content::Children(children) => {
                for child in children {
                    child.render(w, hooks)?;
                }
            }
        }
        write!(w, "</{}>", self.name)?;
        Ok(())
    }
}

fn void_tag(element: &Element) -> String {
    let mut tag = String::new();
    tag.push('<');
    tag.push_str(&element.name);
    for (name, value) in element.attributes.iter() {
        tag.push(' ');
        tag.push_str(name);
        tag.push_str("=\"");
        tag.push_str(&escape_attr(value));
        tag.push('"');
    }
    tag.push_str(" />");
    tag
}

fn write_attributes<W: Write>(element: &Element, w: &mut W) -> Result<(), Error> {
    for (name, value) in element.attributes.iter() {
        write!(w, " {name}=\"{}\"", escape_attr(value))?;
    }
    Ok(())
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
