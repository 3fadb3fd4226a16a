//! Extension points the engine offers to transformation hooks.
//!
//! The engine never subclasses and is never subclassed: extensions
//! implement [`EngineHooks`] and the engine calls into the registered
//! implementation at well-defined points. Every method has a default
//! no-op body, so an implementation only overrides the seams it cares
//! about.

use crate::{model::Element, tables::TableLabelMap};

pub trait EngineHooks {
    /// Called once per constructed element, before its text content is
    /// inline-parsed, so a hook can rewrite content and attributes while
    /// the raw source text is still visible.
    fn on_element_finalize(&self, _element: &mut Element) {}

    /// Called once per table block with the finished `<thead>` element.
    /// The returned map is threaded through the block's body rows and
    /// discarded when the block ends.
    fn on_table_header(&self, _header: &Element) -> TableLabelMap {
        TableLabelMap::new()
    }

    /// Called for each body `<tr>` of a table block, with the label map
    /// returned by [`EngineHooks::on_table_header`] for the same block.
    fn on_table_row(&self, _row: &mut Element, _labels: &TableLabelMap) {}

    /// Called by serializers with each fully serialized childless tag
    /// string before it is written out.
    fn on_serialize_tag(&self, tag: String) -> String {
        tag
    }

    /// Called when the inline scanner sits on a bare-URL scheme whose
    /// colon is followed by `//`. Returning `false` rejects the match
    /// and the candidate text is treated as plain content.
    fn on_inline_url_candidate(&self, _context: &str, _scheme_start: usize) -> bool {
        true
    }
}

/// The stock hook set: every extension point keeps the engine's default
/// behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseHooks;

impl EngineHooks for BaseHooks {}
