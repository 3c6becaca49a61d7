//! Inline span rendering: escaping, emphasis, and price-range highlighting.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern"));

static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern"));

// Amounts are grouped dollar figures: `$1,250.50`. Ungrouped thousands
// (`$1000`) deliberately stay plain, matching the report grammar.
static PRICE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d{1,3}(?:,\d{3})*(?:\.\d+)?\s*(?:-|to)\s*\$\d{1,3}(?:,\d{3})*(?:\.\d+)?")
        .expect("price range pattern")
});

/// Render one span of raw report text into inline markup: escape first, then
/// emphasis, then price highlighting. Bold runs before italic so `**` pairs
/// are never consumed as two italics.
pub(crate) fn render(text: &str) -> String {
    let escaped = escape(text);
    let strong = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let emphasized = ITALIC.replace_all(&strong, "<em>$1</em>");
    PRICE_RANGE
        .replace_all(&emphasized, |caps: &regex::Captures<'_>| {
            format!("<span class=\"price-range\">{}</span>", &caps[0])
        })
        .into_owned()
}

/// Whether the text holds a full price-range expression. Used by the line
/// classifier to keep ranges out of key-value labels.
pub(crate) fn contains_price_range(text: &str) -> bool {
    PRICE_RANGE.is_match(text)
}

/// Escape text destined for markup output. The upstream model is untrusted,
/// so every literal span passes through here before any tag is added.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn converts_bold_then_italic() {
        assert_eq!(
            render("a **bold** and *subtle* word"),
            "a <strong>bold</strong> and <em>subtle</em> word"
        );
    }

    #[test]
    fn nested_emphasis_resolves_outside_in() {
        assert_eq!(render("***both***"), "<em><strong>both</strong></em>");
    }

    #[test]
    fn unpaired_asterisks_stay_literal() {
        assert_eq!(render("5** stars"), "5** stars");
        assert_eq!(render("lone * here"), "lone * here");
    }

    #[test]
    fn highlights_price_ranges_preserving_separator() {
        assert_eq!(
            render("around $1,250.50 to $1,800 today"),
            "around <span class=\"price-range\">$1,250.50 to $1,800</span> today"
        );
        assert_eq!(
            render("$100 - $200"),
            "<span class=\"price-range\">$100 - $200</span>"
        );
    }

    #[test]
    fn single_amounts_are_not_highlighted() {
        assert_eq!(render("retail was $379"), "retail was $379");
        assert!(!contains_price_range("a flat $450"));
        assert!(contains_price_range("worth $450 - $600 used"));
    }

    #[test]
    fn escaped_text_still_matches_prices() {
        assert_eq!(
            render("<= $100 - $200"),
            "&lt;= <span class=\"price-range\">$100 - $200</span>"
        );
    }
}
