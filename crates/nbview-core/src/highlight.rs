//! Syntax highlighting seam
//!
//! Real highlighting is an external concern; the engine only depends on
//! the line-count contract: highlighting a cell's joined source and
//! splitting it back must yield one markup fragment per input line, so
//! that diff decomposition can pair fragment `i` with raw line `i`.

use crate::markup::{escape_html, split_lines};

/// Language assumed for code cells with no magic directive
pub const DEFAULT_LANGUAGE: &str = "py";

/// External syntax highlighter contract
///
/// Implementations take a language identifier and the joined source text
/// and return styled markup. The markup must contain exactly the same
/// line structure as the input: line terminators pass through unchanged
/// and no lines are added or removed.
pub trait SyntaxHighlighter {
    /// Highlight `source` as `language`, returning markup text
    fn highlight(&self, language: &str, source: &str) -> String;
}

/// Escape-only highlighter
///
/// Produces no styling at all, just HTML-safe text. Upholds the line
/// structure contract by construction since escaping never touches
/// newlines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainHighlighter;

impl PlainHighlighter {
    /// Create a new plain highlighter
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SyntaxHighlighter for PlainHighlighter {
    fn highlight(&self, _language: &str, source: &str) -> String {
        escape_html(source)
    }
}

/// Highlight a cell's source lines into per-line display fragments
///
/// With no forced language, a first line of the form `%%<token>` (an
/// IPython cell magic such as `%%bash`) selects the language: the
/// directive line is stripped from the text handed to the highlighter and
/// a `language-tag` span is prepended to the result, so the fragment list
/// stays aligned index-for-index with the original lines. Without a
/// directive the language defaults to [`DEFAULT_LANGUAGE`].
///
/// A forced language is used verbatim and the directive is never
/// consulted; markdown cells use this to force plain-text treatment.
#[must_use]
pub fn highlight_lines(
    highlighter: &dyn SyntaxHighlighter,
    lines: &[String],
    force_language: Option<&str>,
) -> Vec<String> {
    let (directive, language, body) = match force_language {
        Some(language) => (None, language.to_string(), lines),
        None => match lines.first().and_then(|line| magic_language(line)) {
            Some(language) => (
                Some(lines[0].as_str()),
                language.to_string(),
                &lines[1..],
            ),
            None => (None, DEFAULT_LANGUAGE.to_string(), lines),
        },
    };

    let markup = highlighter.highlight(&language, &body.concat());
    let mut fragments = split_lines(&markup);

    if let Some(directive) = directive {
        fragments.insert(
            0,
            format!(
                "<span class=\"language-tag\">{}</span>",
                escape_html(directive)
            ),
        );
    }

    fragments
}

/// Extract the language token from a `%%` cell magic directive line
fn magic_language(line: &str) -> Option<&str> {
    let token = line.strip_prefix("%%")?;
    Some(token.trim_end_matches(['\r', '\n']))
}
