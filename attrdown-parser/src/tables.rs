//! Responsive-table support: copy header cell text onto body cells as
//! `data-label` attributes, so card-style CSS can render each cell with
//! its column heading without duplicating markup.

use rustc_hash::FxHashMap;

use crate::{
    attributes::normalize_attr_text,
    model::{Content, Element},
};

/// Transient mapping from column index to header-derived label text,
/// scoped to a single table block. Columns whose header cell is empty
/// have no entry and their body cells are never stamped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableLabelMap(FxHashMap<usize, String>);

impl TableLabelMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(&column).map(String::as_str)
    }

    pub fn insert(&mut self, column: usize, label: String) {
        self.0.insert(column, label);
    }
}

/// Phase 1: extract per-column labels from a `<thead>` element. A
/// footnote-style marker `[^...]` in the header text is rewritten to
/// superscript markup so the label stays visually equivalent.
///
/// A header without the expected row/cell structure contributes nothing;
/// the table then renders through the engine's plain output.
pub(crate) fn collect_column_labels(header: &Element) -> TableLabelMap {
    let mut labels = TableLabelMap::new();
    let Some(row) = header.children().and_then(<[Element]>::first) else {
        return labels;
    };
    let Some(cells) = row.children() else {
        return labels;
    };
    for (column, cell) in cells.iter().enumerate() {
        let Some(text) = cell.text_content() else {
            continue;
        };
        if text.trim().is_empty() {
            continue;
        }
        let label = if text.contains("[^") {
            text.replace("[^", "<sup>").replace(']', "</sup>")
        } else {
            text.to_string()
        };
        labels.insert(column, label);
    }
    tracing::trace!(columns = cells.len(), "collected table column labels");
    labels
}

/// Phase 2: stamp `data-label` onto each cell of a body `<tr>` whose
/// column index has a label. Labels are whitespace-normalized at stamp
/// time so the attribute value is safe to embed regardless of source
/// formatting.
pub(crate) fn apply_column_labels(row: &mut Element, labels: &TableLabelMap) {
    if labels.is_empty() {
        return;
    }
    let Content::Children(cells) = &mut row.content else {
        return;
    };
    for (column, cell) in cells.iter_mut().enumerate() {
        if let Some(label) = labels.get(column) {
            cell.attributes.set("data-label", normalize_attr_text(label));
        }
    }
}
