// src/core/html.rs
//
// Tolerant, case-insensitive scanning over known HTML blocks. County sites
// vary in attribute order and whitespace; local block scanning holds up
// better than full-document selectors.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Iterator over the inner content of repeated `<tag ...>...</tag>` blocks.
/// Yields the text between the end of the open tag and the close tag.
pub struct TagBlocks<'a> {
    doc: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

/// Scan `doc` for every `<tag ...>...</tag>` block, case-insensitively.
pub fn tag_blocks<'a>(doc: &'a str, tag: &str) -> TagBlocks<'a> {
    TagBlocks {
        doc,
        lc: to_lower(doc),
        open: format!("<{}", to_lower(tag)),
        close: format!("</{}>", to_lower(tag)),
        pos: 0,
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // ASCII-only lowercasing keeps byte offsets identical to `doc`.
        let start = self.lc.get(self.pos..)?.find(&self.open)? + self.pos;
        let open_end = self.doc.get(start..)?.find('>')? + start + 1;
        let end = self.lc.get(open_end..)?.find(&self.close)? + open_end;
        self.pos = end + self.close.len();
        Some(&self.doc[open_end..end])
    }
}

/// Visible text of a fragment: tags dropped, entities and whitespace normalized.
pub fn inner_text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}
