//! A small Markdown engine with an inline attribute-annotation
//! extension.
//!
//! Any element's text may start with an `@` annotation that assigns
//! HTML attributes to the element: `@#id`, `@.class`, `@key=value`, or
//! a brace group `@{#id .class key="value"}`. The extension also stamps
//! `data-label` attributes onto table body cells from the header row,
//! for card-style responsive table CSS.
//!
//! ```
//! let document = attrdown_parser::parse("# @.headline-1 Headline")?;
//! let heading = &document.elements[0];
//! assert_eq!(heading.attributes.get("class"), Some("headline-1"));
//! # Ok::<(), attrdown_parser::Error>(())
//! ```

mod attributes;
mod autolink;
mod blocks;
mod delimiter;
mod error;
mod extension;
mod grammar;
mod hooks;
mod inject;
mod inlines;
mod model;
mod options;
mod tables;
mod version;
mod void;

use std::path::Path;

use tracing::instrument;

pub use crate::{
    attributes::ElementAttributes,
    delimiter::DelimiterMode,
    error::Error,
    extension::{AttrExtension, MIN_ENGINE_VERSION},
    grammar::ParsedAttributeSet,
    hooks::{BaseHooks, EngineHooks},
    model::{Content, Document, Element},
    options::{Options, OptionsBuilder},
    tables::TableLabelMap,
    version::EngineVersion,
    void::normalize_void_tag,
};

/// The engine version the crate reports to extensions.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse `source` with the attribute extension enabled and default
/// options.
#[instrument(skip(source))]
pub fn parse(source: &str) -> Result<Document, Error> {
    parse_with_options(source, &Options::default())
}

/// Parse `source` with the attribute extension enabled.
#[instrument(skip(source, options))]
pub fn parse_with_options(source: &str, options: &Options) -> Result<Document, Error> {
    let extension = AttrExtension::for_engine(ENGINE_VERSION)?;
    Ok(parse_with_hooks(source, &extension, options))
}

/// Parse `source` with a caller-supplied hook set. Use [`BaseHooks`]
/// for the engine's plain behavior without the attribute extension.
#[instrument(skip_all)]
pub fn parse_with_hooks<H: EngineHooks>(source: &str, hooks: &H, options: &Options) -> Document {
    Document {
        elements: blocks::parse_blocks(source, hooks, options),
    }
}

/// Parse `source` without any extension.
#[instrument(skip(source))]
pub fn parse_plain(source: &str, options: &Options) -> Document {
    parse_with_hooks(source, &BaseHooks, options)
}

/// Read and parse a file with the attribute extension enabled.
#[instrument(skip(options))]
pub fn parse_file<P: AsRef<Path> + std::fmt::Debug>(
    path: P,
    options: &Options,
) -> Result<Document, Error> {
    let source = std::fs::read_to_string(path)?;
    parse_with_options(&source, options)
}
