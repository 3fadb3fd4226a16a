//! Source-to-HTML tests through the full pipeline.

use attrdown_converters_html::Processor;
use attrdown_parser::Options;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn render(source: &str) -> String {
    Processor::new(Options::default())
        .unwrap()
        .render_str(source)
        .unwrap()
}

#[rstest]
#[case("# @.headline-1 Headline", "<h1 class=\"headline-1\">Headline</h1>")]
#[case("#@.headline-1 Headline", "<h1 class=\"headline-1\">Headline</h1>")]
#[case("## @#section-2 Second", "<h2 id=\"section-2\">Second</h2>")]
#[case(
    "@{#lead .intro data-x=\"y\"} Opening",
    "<p id=\"lead\" class=\"intro\" data-x=\"y\">Opening</p>"
)]
#[case("plain paragraph", "<p>plain paragraph</p>")]
fn annotated_blocks(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source), expected);
}

#[test]
fn inline_annotation_inside_strong() {
    let html = render("see **@data-label='Full Name' ABBR** here");
    assert_eq!(
        html,
        "<p>see <strong data-label=\"Full Name\">ABBR</strong> here</p>"
    );
}

#[test]
fn annotated_link_renders_with_class() {
    let html = render("go [@.link-class label](url) now");
    assert_eq!(
        html,
        "<p>go <a href=\"url\" class=\"link-class\">label</a> now</p>"
    );
}

#[test]
fn annotated_image_renders_without_self_closing_slash() {
    let html = render("![@.image-class alttext](srcurl)");
    assert_eq!(
        html,
        "<p><img src=\"srcurl\" alt=\"alttext\" class=\"image-class\"></p>"
    );
}

#[test]
fn plain_processor_keeps_self_closing_images() {
    let html = Processor::plain(Options::default())
        .render_str("![alttext](srcurl)")
        .unwrap();
    assert_eq!(html, "<p><img src=\"srcurl\" alt=\"alttext\" /></p>");
}

#[test]
#[tracing_test::traced_test]
fn table_body_cells_carry_data_labels() {
    let source = "| Name | Age |\n| --- | --- |\n| Ann | 30 |";
    let html = render(source);
    assert_eq!(
        html,
        "<table><thead><tr><th>Name</th><th>Age</th></tr></thead>\
         <tbody><tr><td data-label=\"Name\">Ann</td><td data-label=\"Age\">30</td></tr></tbody></table>"
    );
}

#[test]
fn footnote_header_labels_are_escaped_in_attributes() {
    let source = "| Price[^1] |\n| --- |\n| 10 |";
    let html = render(source);
    assert_eq!(
        html,
        "<table><thead><tr><th>Price[^1]</th></tr></thead>\
         <tbody><tr><td data-label=\"Price&lt;sup&gt;1&lt;/sup&gt;\">10</td></tr></tbody></table>"
    );
}

#[test]
fn aligned_columns_get_inline_styles() {
    let source = "| A | B |\n| :--- | ---: |\n| 1 | 2 |";
    let html = render(source);
    assert_eq!(
        html,
        "<table><thead><tr><th style=\"text-align: left;\">A</th>\
         <th style=\"text-align: right;\">B</th></tr></thead>\
         <tbody><tr><td style=\"text-align: left;\" data-label=\"A\">1</td>\
         <td style=\"text-align: right;\" data-label=\"B\">2</td></tr></tbody></table>"
    );
}

#[test]
fn bare_urls_become_anchors() {
    let html = render("go to https://example.com/a now");
    assert_eq!(
        html,
        "<p>go to <a href=\"https://example.com/a\">https://example.com/a</a> now</p>"
    );
}

#[test]
fn text_content_is_escaped() {
    let html = render("1 < 2 & 3 > 2");
    assert_eq!(html, "<p>1 &lt; 2 &amp; 3 &gt; 2</p>");
}

#[test]
fn blocks_are_separated_by_newlines() {
    let html = render("# Title\n\nbody text");
    assert_eq!(html, "<h1>Title</h1>\n<p>body text</p>");
}
