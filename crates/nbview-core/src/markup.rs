//! Small text utilities shared by the highlighter seam and the renderer

/// Escape a string for safe inclusion in HTML text or attribute content
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Split text into lines, retaining the line terminators
///
/// `"a\nb\n"` splits into `["a\n", "b\n"]` and `"a\nb"` into
/// `["a\n", "b"]`. The count of returned fragments equals the count of
/// input lines, which is what keeps highlighted display fragments aligned
/// index-for-index with their source lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (index, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(text[start..=index].to_string());
            start = index + 1;
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}
