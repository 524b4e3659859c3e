//! # nbview-core
//!
//! Jupyter notebook (nbformat 4) model, validation and cell decomposition
//! for nbview.
//!
//! This crate owns the structural half of the engine:
//! - parsing and validating raw notebook bytes ([`Notebook::parse`])
//! - decomposing the cell list into renderable units ([`decompose`]),
//!   either whole-cell for display or per-line/per-output for diffing
//! - the syntax-highlighting seam ([`SyntaxHighlighter`]) the decomposer
//!   calls through
//!
//! Rendering, fingerprinting and diff assembly live in `nbview-engine`.
//!
//! ## Example
//!
//! ```
//! use nbview_core::{decompose, Notebook, PlainHighlighter, RenderMode};
//!
//! let bytes = br#"{"nbformat":4,"cells":[{"cell_type":"markdown","source":["hi"]}]}"#;
//! let notebook = Notebook::parse(bytes)?;
//! let units = decompose(&notebook, RenderMode::Full, &PlainHighlighter);
//! assert_eq!(units.len(), 1);
//! # Ok::<(), nbview_core::NotebookError>(())
//! ```

/// Cell decomposition into renderable units
pub mod decompose;
/// Error types for notebook validation
pub mod error;
/// Syntax highlighting seam
pub mod highlight;
/// Markup text utilities
pub mod markup;
/// Notebook model and validation
pub mod notebook;

pub use decompose::{decompose, CellUnit, CodeLineUnit, RenderMode};
pub use error::{NotebookError, Result};
pub use highlight::{highlight_lines, PlainHighlighter, SyntaxHighlighter, DEFAULT_LANGUAGE};
pub use markup::{escape_html, split_lines};
pub use notebook::{Cell, Notebook, SUPPORTED_NBFORMAT};
