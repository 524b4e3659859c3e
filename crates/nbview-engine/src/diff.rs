//! Diff block assembly
//!
//! Decomposes each side of a two-document diff into per-unit blocks, each
//! carrying its rendered content and content digest. Sides fail
//! independently: a malformed document contributes a message while the
//! other side's blocks are still produced.

use crate::digest::{unit_digest, ContentDigest};
use crate::render::{render_row, render_table};
use nbview_core::{decompose, Notebook, RenderMode, Result, SyntaxHighlighter};
use log::debug;
use serde::Serialize;

/// One diffable block: a rendered unit plus its comparison digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffBlock {
    /// 1-based position of the block within its side
    pub key: usize,
    /// Content digest used as the diff-comparison key
    pub digest: ContentDigest,
    /// Rendered block markup
    pub content: String,
}

/// Block lists and failure messages assembled from both diff sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineBlocks {
    /// One block list per successfully decomposed side, in input order
    pub lists: Vec<Vec<DiffBlock>>,
    /// One message per failed side
    pub messages: Vec<String>,
}

impl EngineBlocks {
    /// Record a successfully decomposed side
    pub fn add_block_list(&mut self, blocks: Vec<DiffBlock>) {
        self.lists.push(blocks);
    }

    /// Record a failed side
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }
}

/// Decompose one document side into diff blocks
///
/// # Errors
///
/// Returns the document-level validation error when the bytes do not form
/// a renderable notebook. Callers fold this into [`EngineBlocks`] as a
/// per-side message.
pub fn side_blocks(bytes: &[u8], highlighter: &dyn SyntaxHighlighter) -> Result<Vec<DiffBlock>> {
    let notebook = Notebook::parse(bytes)?;
    let units = decompose(&notebook, RenderMode::Diff, highlighter);

    debug!("building {} diff blocks", units.len());

    let blocks = units
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let row = render_row(highlighter, unit);
            let content = format!(
                "<div class=\"jupyter-document jupyter-diff\">{}</div>",
                render_table(&row)
            );

            DiffBlock {
                key: index + 1,
                digest: unit_digest(unit),
                content,
            }
        })
        .collect();

    Ok(blocks)
}
