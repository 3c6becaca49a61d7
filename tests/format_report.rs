use stima::domain::report::{Section, format};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn empty_input_round_trips_to_empty() {
    assert_eq!(format(""), "");
}

#[test]
fn text_without_markers_produces_no_section_blocks() {
    let html = format("A fine putter.\n\n- light wear\n\nAsk: the seller");
    for section in Section::ALL {
        assert!(!html.contains(section.css_class()));
    }
}

#[test]
fn every_section_open_has_exactly_one_close() {
    let inputs = [
        "",
        "no sections at all",
        "**Basic Information**",
        "**Basic Information**\nYear: 1999\n**Comparable Models**\n- Newport",
        "**Current Market Value**\n$100 - $200\n\n\n**Current Market Value**\ntwice",
        "- a\n- b\n\nLabel: v\n#### h",
    ];
    for input in inputs {
        let html = format(input);
        assert_eq!(
            count(&html, "<div"),
            count(&html, "</div>"),
            "unbalanced output for {input:?}"
        );
    }
}

#[test]
fn adjacent_sections_stay_flat_and_keep_their_own_text() {
    let html = format("**Current Market Value**\nA\n**Basic Information**\nB");
    assert_eq!(
        html,
        "<div class=\"market-value-section\"><h2 class=\"market-value-title\">Current Market Value</h2>\nA\n</div>\n<div class=\"section basic-info-section\"><h2>Basic Information</h2>\nB\n</div>"
    );
}

#[test]
fn bullet_run_becomes_one_list_in_order() {
    assert_eq!(
        format("- a\n- b\n- c"),
        "<ul class=\"bullet-list\"><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn price_range_keeps_amounts_and_separator() {
    let html = format("$100 - $200");
    assert_eq!(
        html,
        "<p><span class=\"price-range\">$100 - $200</span></p>"
    );

    let worded = format("$1,250.50 to $1,800");
    assert!(worded.contains("$1,250.50 to $1,800"));
    assert_eq!(count(&worded, "price-range"), 1);
}

#[test]
fn key_value_lines_become_independent_rows() {
    let html = format("Label: Value\nLabel2: Value2");
    assert_eq!(count(&html, "<div class=\"info-row\">"), 2);
    assert!(html.contains(
        "<span class=\"info-label\">Label:</span> <span class=\"info-value\">Value</span>"
    ));
    assert!(html.contains(
        "<span class=\"info-label\">Label2:</span> <span class=\"info-value\">Value2</span>"
    ));
}

#[test]
fn markdown_headers_convert_by_depth_only_up_to_four() {
    let html = format("# One\n## Two\n### Three\n#### Four\n##### Five");
    assert!(html.contains("<h1>One</h1>"));
    assert!(html.contains("<h2>Two</h2>"));
    assert!(html.contains("<h3>Three</h3>"));
    assert!(html.contains("<h4>Four</h4>"));
    assert!(html.contains("##### Five"));
    assert!(!html.contains("<h5>"));
}

#[test]
fn emphasis_converts_after_section_markers_are_consumed() {
    let html = format("**Basic Information**\nA **milled** face with *patina*");
    assert_eq!(count(&html, "<strong>"), 1);
    assert!(html.contains("<strong>milled</strong>"));
    assert!(html.contains("<em>patina</em>"));
    // The marker itself was not emphasis-converted.
    assert!(!html.contains("<strong>Basic Information</strong>"));
}

#[test]
fn unknown_bold_labels_do_not_open_sections() {
    let html = format("**Provenance**\ndetails follow");
    assert!(html.contains("<strong>Provenance</strong>"));
    assert_eq!(count(&html, "<div class=\"section"), 0);
}

#[test]
fn untrusted_text_is_escaped() {
    let html = format("Face: <script>alert('x')</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn fixture_report_renders_every_section_once() {
    let raw = include_str!("fixtures/sample_report.txt");
    let html = format(raw);

    for section in Section::ALL {
        let open = if section.is_primary() {
            format!("<div class=\"{}\">", section.css_class())
        } else {
            format!("<div class=\"section {}\">", section.css_class())
        };
        assert_eq!(count(&html, &open), 1, "missing section {:?}", section);
        assert!(html.contains(&format!("<h2>{}</h2>", section.label())) || section.is_primary());
    }

    // Overview precedes the first section and wraps the intro paragraph.
    assert!(html.starts_with("<div class=\"report-overview\">"));
    let overview_end = html.find("</div>").expect("overview closes");
    assert!(html[..overview_end].contains("most played blade"));

    // Structure holds together: balanced blocks, flat lists, highlighted prices.
    assert_eq!(count(&html, "<div"), count(&html, "</div>"));
    assert_eq!(count(&html, "<ul"), count(&html, "</ul>"));
    assert!(!html.contains("<ul class=\"bullet-list\"></ul>"));
    assert_eq!(count(&html, "price-range"), 3);
    assert!(html.contains("<h4>Fine print</h4>"));
    assert!(html.contains("<em>three to four months</em>"));
    assert!(html.contains(
        "<span class=\"info-label\">Year of release:</span> <span class=\"info-value\">1996</span>"
    ));
}
