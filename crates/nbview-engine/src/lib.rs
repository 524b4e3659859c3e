//! # nbview-engine
//!
//! Rendering, content fingerprinting and diff-block assembly for Jupyter
//! notebooks, on top of the model and decomposition in `nbview-core`.
//!
//! Two entry points sit over one shared decomposition routine:
//! - [`NotebookEngine::render_document`] renders a whole document into
//!   table markup, one row per cell.
//! - [`NotebookEngine::diff_blocks`] splits code cells into per-line and
//!   per-output blocks, each carrying a stable content digest, so two
//!   document versions can be compared at sub-cell granularity.
//!
//! ## Example
//!
//! ```
//! use nbview_engine::NotebookEngine;
//!
//! let bytes = br#"{"nbformat":4,"cells":[{"cell_type":"markdown","source":["hi"]}]}"#;
//!
//! let engine = NotebookEngine::new();
//! let markup = engine.render_document(bytes)?;
//! assert!(markup.contains("jupyter-cell-markdown"));
//! # Ok::<(), nbview_core::NotebookError>(())
//! ```

/// Diff block assembly
pub mod diff;
/// Content fingerprinting
pub mod digest;
/// Top-level engine entry points
pub mod engine;
/// Output block formatting
pub mod output;
/// Unit rendering
pub mod render;

pub use diff::{side_blocks, DiffBlock, EngineBlocks};
pub use digest::{keyed_digest, unit_digest, ContentDigest, CONTENT_DIGEST_CONTEXT};
pub use engine::NotebookEngine;
pub use output::render_output;
pub use render::{render_row, render_table, render_unit, RenderedRow};
