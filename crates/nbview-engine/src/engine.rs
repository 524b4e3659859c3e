//! Top-level notebook engine
//!
//! Entry points for rendering a whole document and for building
//! per-side diff blocks, plus the small metadata hooks a document
//! viewer uses to pick this engine for a file.

use crate::diff::{side_blocks, EngineBlocks};
use crate::render::{render_row, render_table};
use nbview_core::{
    decompose, escape_html, Notebook, PlainHighlighter, RenderMode, Result, SyntaxHighlighter,
};
use log::debug;

/// Content score for files with a notebook extension
const SCORE_IPYNB: u32 = 2000;

/// Content score for other probably-JSON files
const SCORE_DEFAULT: u32 = 500;

/// Notebook rendering and diff engine
///
/// Holds the syntax highlighter the decomposer and renderer call
/// through; defaults to the escape-only [`PlainHighlighter`].
pub struct NotebookEngine {
    highlighter: Box<dyn SyntaxHighlighter>,
}

impl Default for NotebookEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NotebookEngine {
    /// Create an engine with the default plain highlighter
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: Box::new(PlainHighlighter),
        }
    }

    /// Create an engine with a custom syntax highlighter
    #[must_use]
    pub fn with_highlighter(highlighter: Box<dyn SyntaxHighlighter>) -> Self {
        Self { highlighter }
    }

    /// Render a full document into notebook table markup
    ///
    /// # Errors
    ///
    /// Returns the document-level validation error when the bytes do not
    /// form a renderable notebook; no partial document is ever rendered.
    pub fn render_document(&self, bytes: &[u8]) -> Result<String> {
        let notebook = Notebook::parse(bytes)?;
        let units = decompose(&notebook, RenderMode::Full, self.highlighter.as_ref());

        debug!("rendering {} cells", units.len());

        let mut rows = String::new();
        for unit in &units {
            rows.push_str(&render_row(self.highlighter.as_ref(), unit));
        }

        Ok(format!(
            "<div class=\"jupyter-document\">{}</div>",
            render_table(&rows)
        ))
    }

    /// Render a full document, substituting the error message for the
    /// document body when validation fails
    #[must_use]
    pub fn render_document_or_message(&self, bytes: &[u8]) -> String {
        match self.render_document(bytes) {
            Ok(markup) => markup,
            Err(error) => format!(
                "<div class=\"jupyter-message\">{}</div>",
                escape_html(&error.to_string())
            ),
        }
    }

    /// Build diff blocks for two document sides
    ///
    /// Each side is decomposed independently; a side that fails
    /// validation contributes a message instead of a block list, and the
    /// other side's blocks are still returned.
    #[must_use]
    pub fn diff_blocks(&self, old_bytes: &[u8], new_bytes: &[u8]) -> EngineBlocks {
        let mut blocks = EngineBlocks::default();

        for bytes in [old_bytes, new_bytes] {
            match side_blocks(bytes, self.highlighter.as_ref()) {
                Ok(list) => blocks.add_block_list(list),
                Err(error) => blocks.add_message(error.to_string()),
            }
        }

        blocks
    }

    /// Whether callers should schedule rendering off the hot path
    ///
    /// Always true: large notebooks can take a while. This is a
    /// scheduling hint only; rendering itself is synchronous.
    #[inline]
    #[must_use]
    pub const fn should_render_async(&self) -> bool {
        true
    }

    /// Engine affinity score for a file name
    ///
    /// Notebook extensions score far above the generic probably-JSON
    /// baseline so this engine wins the pick for `.ipynb` files.
    #[must_use]
    pub fn content_score(name: &str) -> u32 {
        if name.to_ascii_lowercase().ends_with(".ipynb") {
            SCORE_IPYNB
        } else {
            SCORE_DEFAULT
        }
    }

    /// Cheap probe for whether bytes could be a notebook document
    #[must_use]
    pub fn can_render(bytes: &[u8]) -> bool {
        bytes
            .iter()
            .find(|byte| !byte.is_ascii_whitespace())
            .is_some_and(|byte| *byte == b'{')
    }
}
