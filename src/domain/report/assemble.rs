//! The structuring pass: classified lines in, one balanced document out.
//!
//! This pass is total. Any classification sequence, including unterminated
//! sections or text with no sections at all, produces tag-balanced markup:
//! every block that opens here also closes here.

use super::classify::Line;
use super::inline;
use super::section::Section;

pub(crate) fn assemble(lines: &[Line<'_>]) -> String {
    let first_marker = lines
        .iter()
        .position(|line| matches!(line, Line::Marker(_)));
    // Non-blank content ahead of the first section is the report overview.
    let has_overview = first_marker
        .map(|idx| lines[..idx].iter().any(|line| !matches!(line, Line::Blank)))
        .unwrap_or(false);
    let pure = pure_text_segments(lines);

    let mut doc = Document::default();
    if has_overview {
        doc.open_overview();
    }
    for (idx, line) in lines.iter().enumerate() {
        match line {
            Line::Blank => doc.break_blocks(),
            Line::Marker(section) => doc.open_section(*section),
            Line::Heading { level, text } => doc.push_heading(*level, text),
            Line::Bullet(item) => doc.push_bullet(item),
            Line::KeyValue { label, value } => doc.push_key_value(label, value),
            Line::Text(text) if pure[idx] => doc.push_paragraph_line(text),
            Line::Text(text) => doc.push_bare_text(text),
        }
    }
    doc.finish()
}

/// Blank-separated segments made up solely of text lines become paragraphs;
/// text lines sharing a segment with any block element stay unwrapped.
fn pure_text_segments(lines: &[Line<'_>]) -> Vec<bool> {
    let mut pure = vec![false; lines.len()];
    let mut start = 0;
    for idx in 0..=lines.len() {
        let boundary = idx == lines.len() || matches!(lines[idx], Line::Blank);
        if !boundary {
            continue;
        }
        if idx > start
            && lines[start..idx]
                .iter()
                .all(|line| matches!(line, Line::Text(_)))
        {
            for flag in &mut pure[start..idx] {
                *flag = true;
            }
        }
        start = idx + 1;
    }
    pure
}

#[derive(Default)]
struct Document {
    blocks: Vec<String>,
    paragraph: Vec<String>,
    list_items: Vec<String>,
    overview_open: bool,
    section_open: bool,
}

impl Document {
    fn open_overview(&mut self) {
        self.blocks.push("<div class=\"report-overview\">".to_string());
        self.overview_open = true;
    }

    fn open_section(&mut self, section: Section) {
        self.break_blocks();
        if self.section_open {
            self.blocks.push("</div>".to_string());
        } else if self.overview_open {
            self.blocks.push("</div>".to_string());
            self.overview_open = false;
        }
        self.blocks.push(section.open_tag());
        self.section_open = true;
    }

    fn push_heading(&mut self, level: u8, text: &str) {
        self.break_blocks();
        let body = inline::render(text);
        self.blocks.push(format!("<h{level}>{body}</h{level}>"));
    }

    fn push_bullet(&mut self, item: &str) {
        self.flush_paragraph();
        self.list_items.push(format!("<li>{}</li>", inline::render(item)));
    }

    fn push_key_value(&mut self, label: &str, value: &str) {
        self.break_blocks();
        self.blocks.push(format!(
            "<div class=\"info-row\"><span class=\"info-label\">{}:</span> <span class=\"info-value\">{}</span></div>",
            inline::render(label),
            inline::render(value)
        ));
    }

    fn push_paragraph_line(&mut self, text: &str) {
        self.paragraph.push(inline::render(text));
    }

    fn push_bare_text(&mut self, text: &str) {
        self.break_blocks();
        self.blocks.push(inline::render(text));
    }

    /// End any run in progress. A blank line or a non-bullet block closes the
    /// open list, so consecutive runs never nest.
    fn break_blocks(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let body = self.paragraph.join("\n");
        self.paragraph.clear();
        self.blocks.push(format!("<p>{body}</p>"));
    }

    fn flush_list(&mut self) {
        if self.list_items.is_empty() {
            return;
        }
        let items = self.list_items.concat();
        self.list_items.clear();
        self.blocks
            .push(format!("<ul class=\"bullet-list\">{items}</ul>"));
    }

    fn finish(mut self) -> String {
        self.break_blocks();
        if self.section_open || self.overview_open {
            self.blocks.push("</div>".to_string());
        }
        self.blocks.join("\n")
    }
}
