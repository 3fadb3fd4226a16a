//! Block-level parsing: ATX headings, pipe tables, and paragraphs.

use crate::{
    hooks::EngineHooks,
    inlines::{finalize_element, inline_content},
    model::{Content, Element},
    options::Options,
};

/// Column alignment taken from a table's divider row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    fn style(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Left => Some("text-align: left;"),
            Self::Center => Some("text-align: center;"),
            Self::Right => Some("text-align: right;"),
        }
    }
}

/// Parse a whole source text into top-level block elements.
pub(crate) fn parse_blocks<H: EngineHooks>(
    source: &str,
    hooks: &H,
    options: &Options,
) -> Vec<Element> {
    let lines: Vec<&str> = source.lines().collect();
    let mut elements = Vec::new();
    let mut i = 0;
    while let Some(line) = lines.get(i) {
        if line.trim().is_empty() {
            i += 1;
            continue;
        }
        if let Some(mut heading) = match_heading(line) {
            finalize_element(&mut heading, hooks, options);
            elements.push(heading);
            i += 1;
            continue;
        }
        if let Some((table, consumed)) = match_table(&lines, i, hooks, options) {
            elements.push(table);
            i += consumed;
            continue;
        }
        let (paragraph, consumed) = match_paragraph(&lines, i, hooks, options);
        elements.push(paragraph);
        i += consumed;
    }
    tracing::debug!(blocks = elements.len(), "parsed block elements");
    elements
}

/// `#` through `######`. A space after the hashes is optional, so an
/// annotation can sit directly against them: `#@.headline-1 Headline`.
fn match_heading(line: &str) -> Option<Element> {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = trimmed.get(level..)?;
    Some(Element::new(format!("h{level}"), rest.trim()))
}

/// A pipe-delimited header row followed by a divider row, then any
/// number of body rows. Header cells are finalized before the header
/// hook fires, so annotations are already merged when labels are
/// collected; inline parsing of cell text happens afterwards.
fn match_table<H: EngineHooks>(
    lines: &[&str],
    start: usize,
    hooks: &H,
    options: &Options,
) -> Option<(Element, usize)> {
    let header_line = lines.get(start)?;
    if !header_line.contains('|') {
        return None;
    }
    let alignments = divider_alignments(lines.get(start + 1)?)?;

    let mut ths = Vec::new();
    for (column, cell) in split_row(header_line).into_iter().enumerate() {
        let mut th = Element::new("th", cell);
        apply_alignment(&mut th, &alignments, column);
        hooks.on_element_finalize(&mut th);
        ths.push(th);
    }
    let mut thead = Element::container("thead", vec![Element::container("tr", ths)]);
    let labels = hooks.on_table_header(&thead);
    for_each_cell(&mut thead, |cell| inline_content(cell, hooks, options));

    let mut body_rows = Vec::new();
    let mut consumed = 2;
    while let Some(line) = lines.get(start + consumed) {
        if line.trim().is_empty() || !line.contains('|') {
            break;
        }
        let mut tds = Vec::new();
        for (column, cell) in split_row(line).into_iter().enumerate() {
            let mut td = Element::new("td", cell);
            apply_alignment(&mut td, &alignments, column);
            hooks.on_element_finalize(&mut td);
            tds.push(td);
        }
        let mut tr = Element::container("tr", tds);
        hooks.on_table_row(&mut tr, &labels);
        if let Content::Children(cells) = &mut tr.content {
            for cell in cells {
                inline_content(cell, hooks, options);
            }
        }
        body_rows.push(tr);
        consumed += 1;
    }

    let mut children = vec![thead];
    if !body_rows.is_empty() {
        children.push(Element::container("tbody", body_rows));
    }
    Some((Element::container("table", children), consumed))
}

/// Consecutive non-blank lines that start neither a heading nor a
/// table, joined with newlines into one paragraph.
fn match_paragraph<H: EngineHooks>(
    lines: &[&str],
    start: usize,
    hooks: &H,
    options: &Options,
) -> (Element, usize) {
    let mut collected = Vec::new();
    let mut consumed = 0;
    while let Some(line) = lines.get(start + consumed) {
        if line.trim().is_empty() || match_heading(line).is_some() {
            break;
        }
        let next = lines.get(start + consumed + 1).copied().unwrap_or("");
        if consumed > 0 && line.contains('|') && divider_alignments(next).is_some() {
            break;
        }
        collected.push(line.trim());
        consumed += 1;
    }
    let mut paragraph = Element::new("p", collected.join("\n"));
    finalize_element(&mut paragraph, hooks, options);
    (paragraph, consumed.max(1))
}

/// Split a table row on `|`, dropping the optional outer pipes.
fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Parse a divider row such as `| --- | :---: |` into per-column
/// alignments. `None` when the line is not a divider.
fn divider_alignments(line: &str) -> Option<Vec<Alignment>> {
    if !line.contains('-') || !line.contains('|') {
        return None;
    }
    let mut alignments = Vec::new();
    for cell in split_row(line) {
        let bare = cell.trim_start_matches(':').trim_end_matches(':');
        if bare.is_empty() || !bare.chars().all(|c| c == '-') {
            return None;
        }
        let alignment = match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        };
        alignments.push(alignment);
    }
    Some(alignments)
}

fn apply_alignment(cell: &mut Element, alignments: &[Alignment], column: usize) {
    if let Some(style) = alignments.get(column).copied().and_then(Alignment::style) {
        cell.attributes.set("style", style);
    }
}

fn for_each_cell(section: &mut Element, mut apply: impl FnMut(&mut Element)) {
    let Content::Children(rows) = &mut section.content else {
        return;
    };
    for row in rows {
        let Content::Children(cells) = &mut row.content else {
            continue;
        };
        for cell in cells {
            apply(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{extension::AttrExtension, hooks::BaseHooks};

    fn blocks(source: &str) -> Vec<Element> {
        parse_blocks(source, &BaseHooks, &Options::default())
    }

    #[test]
    fn headings_map_to_their_level() {
        let elements = blocks("# One\n\n### Three");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name, "h1");
        assert_eq!(elements[0].text_content(), Some("One"));
        assert_eq!(elements[1].name, "h3");
    }

    #[test]
    fn headings_do_not_require_a_space_after_the_hashes() {
        let elements = blocks("##Two");
        assert_eq!(elements[0].name, "h2");
        assert_eq!(elements[0].text_content(), Some("Two"));
    }

    #[test]
    fn annotation_directly_against_the_hashes_is_injected() {
        let ext = AttrExtension::for_engine("1.0.0").unwrap();
        let elements = parse_blocks("#@.headline-1 Headline", &ext, &Options::default());
        let heading = &elements[0];
        assert_eq!(heading.name, "h1");
        assert_eq!(heading.attributes.get("class"), Some("headline-1"));
        assert_eq!(heading.text_content(), Some("Headline"));
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        let elements = blocks("####### nope");
        assert_eq!(elements[0].name, "p");
    }

    #[test]
    fn paragraphs_join_consecutive_lines() {
        let elements = blocks("first line\nsecond line\n\nnext para");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text_content(), Some("first line\nsecond line"));
        assert_eq!(elements[1].text_content(), Some("next para"));
    }

    #[test]
    fn pipe_table_structure() {
        let elements = blocks("| Name | Age |\n| --- | --- |\n| Ann | 30 |\n| Ben | 31 |");
        assert_eq!(elements.len(), 1);
        let table = &elements[0];
        assert_eq!(table.name, "table");
        let sections = table.children().unwrap();
        assert_eq!(sections[0].name, "thead");
        assert_eq!(sections[1].name, "tbody");
        let header_cells = sections[0].children().unwrap()[0].children().unwrap();
        assert_eq!(header_cells[0].name, "th");
        assert_eq!(header_cells[0].text_content(), Some("Name"));
        assert_eq!(sections[1].children().unwrap().len(), 2);
    }

    #[test]
    fn divider_colons_become_alignment_styles() {
        let elements = blocks("| A | B | C |\n| :--- | :---: | ---: |\n| 1 | 2 | 3 |");
        let table = &elements[0];
        let sections = table.children().unwrap();
        let header_cells = sections[0].children().unwrap()[0].children().unwrap();
        assert_eq!(header_cells[0].attributes.get("style"), Some("text-align: left;"));
        assert_eq!(
            header_cells[1].attributes.get("style"),
            Some("text-align: center;")
        );
        assert_eq!(
            header_cells[2].attributes.get("style"),
            Some("text-align: right;")
        );
        let body_cells = sections[1].children().unwrap()[0].children().unwrap();
        assert_eq!(body_cells[1].attributes.get("style"), Some("text-align: center;"));
    }

    #[test]
    fn pipe_line_without_divider_is_a_paragraph() {
        let elements = blocks("| just | text |");
        assert_eq!(elements[0].name, "p");
    }

    #[test]
    fn extension_stamps_data_labels_on_body_cells() {
        let ext = AttrExtension::for_engine("1.0.0").unwrap();
        let elements = parse_blocks(
            "| Name | Age |\n| --- | --- |\n| Ann | 30 |",
            &ext,
            &Options::default(),
        );
        let table = &elements[0];
        let sections = table.children().unwrap();
        let body_cells = sections[1].children().unwrap()[0].children().unwrap();
        assert_eq!(body_cells[0].attributes.get("data-label"), Some("Name"));
        assert_eq!(body_cells[1].attributes.get("data-label"), Some("Age"));
    }

    #[test]
    fn annotated_header_cell_keeps_its_label_after_injection() {
        let ext = AttrExtension::for_engine("1.0.0").unwrap();
        let elements = parse_blocks(
            "| @.col-name Name | Age |\n| --- | --- |\n| Ann | 30 |",
            &ext,
            &Options::default(),
        );
        let table = &elements[0];
        let sections = table.children().unwrap();
        let header_cells = sections[0].children().unwrap()[0].children().unwrap();
        assert_eq!(header_cells[0].attributes.get("class"), Some("col-name"));
        assert_eq!(header_cells[0].text_content(), Some("Name"));
        let body_cells = sections[1].children().unwrap()[0].children().unwrap();
        assert_eq!(body_cells[0].attributes.get("data-label"), Some("Name"));
    }

    #[test]
    fn annotated_heading_is_injected_then_inline_parsed() {
        let ext = AttrExtension::for_engine("1.0.0").unwrap();
        let elements = parse_blocks("# @.headline-1 A **bold** title", &ext, &Options::default());
        let heading = &elements[0];
        assert_eq!(heading.attributes.get("class"), Some("headline-1"));
        let spans = heading.children().unwrap();
        assert_eq!(spans[1].name, "strong");
    }
}
