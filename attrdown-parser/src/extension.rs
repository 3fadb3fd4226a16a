//! The attribute-annotation extension, wired into the engine through
//! [`EngineHooks`].

use std::str::FromStr;

use crate::{
    Error,
    autolink::suppresses_autolink,
    hooks::EngineHooks,
    inject::inject_attributes,
    model::Element,
    tables::{TableLabelMap, apply_column_labels, collect_column_labels},
    version::EngineVersion,
    void::normalize_void_tag,
};

/// Oldest engine the extension knows how to run against.
pub const MIN_ENGINE_VERSION: EngineVersion = EngineVersion::new(0, 8, 0);

/// Hook set implementing inline `@` attribute annotations and
/// responsive-table `data-label` stamping.
///
/// The extension is stateless: all per-table state travels through the
/// [`TableLabelMap`] the engine threads between the header and row
/// hooks, so one instance can serve any number of parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttrExtension;

impl AttrExtension {
    /// Construct the extension for an engine reporting `version`. Fails
    /// up front when the engine is older than [`MIN_ENGINE_VERSION`] or
    /// the version string does not parse.
    pub fn for_engine(version: &str) -> Result<Self, Error> {
        let found = EngineVersion::from_str(version)?;
        if found < MIN_ENGINE_VERSION {
            return Err(Error::IncompatibleEngine {
                required: MIN_ENGINE_VERSION,
                found,
            });
        }
        tracing::debug!(engine = %found, "attribute extension enabled");
        Ok(Self)
    }
}

impl EngineHooks for AttrExtension {
    fn on_element_finalize(&self, element: &mut Element) {
        inject_attributes(element);
    }

    fn on_table_header(&self, header: &Element) -> TableLabelMap {
        collect_column_labels(header)
    }

    fn on_table_row(&self, row: &mut Element, labels: &TableLabelMap) {
        apply_column_labels(row, labels);
    }

    fn on_serialize_tag(&self, tag: String) -> String {
        normalize_void_tag(tag)
    }

    fn on_inline_url_candidate(&self, context: &str, scheme_start: usize) -> bool {
        !suppresses_autolink(context, scheme_start)
    }
}
