//! End-to-end parses exercising the attribute extension through the
//! public API.

use attrdown_parser::{Content, Element, Options, parse, parse_plain, parse_with_options};
use pretty_assertions::assert_eq;

fn first(document: &attrdown_parser::Document) -> &Element {
    document.elements.first().expect("at least one element")
}

#[test]
fn heading_class_shorthand() {
    let document = parse("# @.headline-1 Headline").unwrap();
    let heading = first(&document);
    assert_eq!(heading.name, "h1");
    assert_eq!(heading.attributes.get("class"), Some("headline-1"));
    assert_eq!(heading.text_content(), Some("Headline"));
}

#[test]
fn heading_annotation_without_a_space_after_the_hash() {
    let document = parse("#@.headline-1 Headline").unwrap();
    let heading = first(&document);
    assert_eq!(heading.name, "h1");
    assert_eq!(heading.attributes.get("class"), Some("headline-1"));
    assert_eq!(heading.text_content(), Some("Headline"));
}

#[test]
fn annotated_link_keeps_href_and_gains_class() {
    let document = parse("go [@.link-class label](url) now").unwrap();
    let paragraph = first(&document);
    let spans = paragraph.children().expect("inline spans");
    let link = spans.iter().find(|s| s.name == "a").expect("link");
    assert_eq!(link.attributes.get("href"), Some("url"));
    assert_eq!(link.attributes.get("class"), Some("link-class"));
    assert_eq!(link.text_content(), Some("label"));
}

#[test]
fn paragraph_brace_group() {
    let document = parse("@{#lead .intro data-x=\"y\"} Opening text").unwrap();
    let paragraph = first(&document);
    assert_eq!(paragraph.name, "p");
    assert_eq!(paragraph.attributes.get("id"), Some("lead"));
    assert_eq!(paragraph.attributes.get("class"), Some("intro"));
    assert_eq!(paragraph.attributes.get("data-x"), Some("y"));
    assert_eq!(paragraph.text_content(), Some("Opening text"));
}

#[test]
fn inline_annotations_inside_a_paragraph() {
    let document = parse("plain **@data-label='Full Name' ABBR** end").unwrap();
    let paragraph = first(&document);
    let spans = paragraph.children().expect("inline spans");
    let strong = spans.iter().find(|s| s.name == "strong").expect("strong");
    assert_eq!(strong.attributes.get("data-label"), Some("Full Name"));
    assert_eq!(strong.text_content(), Some("ABBR"));
}

#[test]
#[tracing_test::traced_test]
fn table_cells_gain_data_labels() {
    let source = "| Name | Age |\n| --- | --- |\n| Ann | 30 |\n| Ben | 31 |";
    let document = parse(source).unwrap();
    let table = first(&document);
    let sections = table.children().expect("table sections");
    let tbody = sections.iter().find(|s| s.name == "tbody").expect("tbody");
    for row in tbody.children().expect("rows") {
        let cells = row.children().expect("cells");
        assert_eq!(cells[0].attributes.get("data-label"), Some("Name"));
        assert_eq!(cells[1].attributes.get("data-label"), Some("Age"));
    }
}

#[test]
fn plain_parse_skips_the_extension() {
    let document = parse_plain("# @.headline-1 Headline", &Options::default());
    let heading = first(&document);
    assert!(heading.attributes.is_empty());
    assert_eq!(heading.text_content(), Some("@.headline-1 Headline"));
}

#[test]
fn autolink_option_is_honored() {
    let options = Options::builder().with_urls_linked(false).build();
    let document = parse_with_options("see https://example.com", &options).unwrap();
    let paragraph = first(&document);
    assert_eq!(paragraph.text_content(), Some("see https://example.com"));
}

#[test]
fn reparsing_rendered_text_is_stable() {
    let document = parse("# @.headline-1 Headline").unwrap();
    let heading = first(&document);
    let text = heading.text_content().expect("text").to_string();
    let again = parse(&format!("# {text}")).unwrap();
    let reparsed = first(&again);
    assert!(reparsed.attributes.is_empty());
    assert_eq!(reparsed.text_content(), Some("Headline"));
}

#[test]
fn malformed_annotation_passes_through() {
    let document = parse("@??? not an annotation").unwrap();
    let paragraph = first(&document);
    assert!(paragraph.attributes.is_empty());
    assert_eq!(paragraph.text_content(), Some("@??? not an annotation"));
}

#[test]
fn mixed_document_shape() {
    let source = "\
# @#top Title

@.lead An *intro* paragraph.

| H1 | H2 |
| --- | --- |
| a | b |
";
    let document = parse(source).unwrap();
    assert_eq!(document.elements.len(), 3);
    assert_eq!(document.elements[0].attributes.get("id"), Some("top"));
    assert_eq!(document.elements[1].attributes.get("class"), Some("lead"));
    assert_eq!(document.elements[2].name, "table");
    match &document.elements[1].content {
        Content::Children(spans) => {
            assert!(spans.iter().any(|s| s.name == "em"));
        }
        Content::Text(text) => panic!("expected inline spans, got text {text:?}"),
    }
}
