//! Line classification for raw report text.
//!
//! Each input line resolves to exactly one [`Line`] variant; the assembler
//! never re-inspects raw text. Classification order matters: markers win over
//! headings, headings over bullets, bullets over key-value rows, and anything
//! left is plain text.

use super::inline;
use super::section::Section;

/// One classified input line. Borrowed slices point into the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Marker(Section),
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    KeyValue { label: &'a str, value: &'a str },
    Text(&'a str),
}

pub(crate) fn classify(raw: &str) -> Vec<Line<'_>> {
    raw.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(section) = Section::from_marker(trimmed) {
        return Line::Marker(section);
    }
    if let Some((level, text)) = heading(trimmed) {
        return Line::Heading { level, text };
    }
    if let Some(item) = bullet(trimmed) {
        return Line::Bullet(item);
    }
    if let Some((label, value)) = key_value(trimmed) {
        return Line::KeyValue { label, value };
    }
    Line::Text(line)
}

/// One to four hashes followed by whitespace and content. Five or more
/// hashes, or hashes glued to the text, stay literal.
fn heading(trimmed: &str) -> Option<(u8, &str)> {
    let hashes = trimmed.bytes().take_while(|&b| b == b'#').count();
    if !(1..=4).contains(&hashes) {
        return None;
    }
    let rest = &trimmed[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

/// A dash, whitespace, and non-empty content. Indentation was already
/// stripped, so nesting depth collapses to a single flat level.
fn bullet(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix('-')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}

/// `label: value` where the label carries no colon, no emphasis markup, and
/// no price range, and the value is non-empty. Bold pseudo-labels such as
/// `**Note**: …` fall through to plain text and get emphasis treatment there.
fn key_value(trimmed: &str) -> Option<(&str, &str)> {
    let (label, value) = trimmed.split_once(':')?;
    let label = label.trim();
    let value = value.trim();
    if label.is_empty() || value.is_empty() {
        return None;
    }
    if label.contains('*') || inline::contains_price_range(label) {
        return None;
    }
    Some((label, value))
}
