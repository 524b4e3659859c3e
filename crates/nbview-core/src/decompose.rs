//! Cell decomposition
//!
//! Turns a validated notebook's cell list into the flat unit sequence the
//! renderer and the fingerprinter both consume. Full mode keeps one unit
//! per cell. Diff mode splits every code cell into one unit per source
//! line plus one unit per output, so diffing and inline commenting can
//! address individual lines and output blocks instead of whole cells.

use crate::highlight::{highlight_lines, SyntaxHighlighter};
use crate::notebook::{Cell, Notebook};
use log::trace;
use serde_json::{json, Value};

/// Decomposition granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One unit per cell; normal document display
    Full,
    /// Code cells split into per-line and per-output units
    Diff,
}

/// One independently renderable and hashable piece of a notebook
#[derive(Debug, Clone, PartialEq)]
pub enum CellUnit {
    /// A markdown cell, whole
    Markdown(Cell),
    /// A code cell, whole (full mode only)
    Code(Cell),
    /// A single source line of a code cell (diff mode only)
    CodeLine(CodeLineUnit),
    /// A single output block of a code cell (diff mode only)
    CodeOutput(Value),
    /// A cell of unrecognized shape, kept verbatim
    Raw(Cell),
}

/// A single code line carrying enough context to render in isolation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLineUnit {
    /// Execution label, present only on the first line of its cell
    pub label: Option<String>,
    /// The raw source text of the line, terminator included
    pub raw: String,
    /// Pre-highlighted display markup for this line
    pub display: String,
    /// True only for the first line of the originating cell
    pub head: bool,
    /// True only for the last line of the originating cell
    pub last: bool,
}

impl CellUnit {
    /// Wrap a cell as a single pass-through unit, by cell type
    fn from_cell(cell: &Cell) -> Self {
        match cell.cell_type() {
            Some("markdown") => Self::Markdown(cell.clone()),
            Some("code") => Self::Code(cell.clone()),
            _ => Self::Raw(cell.clone()),
        }
    }

    /// Deterministic, order-preserving JSON view of the unit's complete data
    ///
    /// This is the fingerprinting input for every unit kind except
    /// [`CellUnit::CodeLine`] (which hashes its raw text alone), and the
    /// content of the raw-cell fallback renderer.
    #[must_use]
    pub fn canonical_value(&self) -> Value {
        match self {
            Self::Markdown(cell) | Self::Code(cell) | Self::Raw(cell) => {
                cell.raw_value().clone()
            }
            Self::CodeLine(line) => json!({
                "cell_type": "code/line",
                "label": line.label,
                "raw": line.raw,
                "display": line.display,
                "head": line.head,
                "last": line.last,
            }),
            Self::CodeOutput(output) => json!({
                "cell_type": "code/output",
                "output": output,
            }),
        }
    }
}

/// Decompose a notebook's cells into renderable units
///
/// Ordering is strictly preserved: cells in document order, and within a
/// split code cell all lines (in source order) before all outputs (in
/// output order). A code cell with no source lines still contributes its
/// output units.
#[must_use]
pub fn decompose(
    notebook: &Notebook,
    mode: RenderMode,
    highlighter: &dyn SyntaxHighlighter,
) -> Vec<CellUnit> {
    let mut units = Vec::with_capacity(notebook.cells().len());

    for cell in notebook.cells() {
        if mode == RenderMode::Full || cell.cell_type() != Some("code") {
            units.push(CellUnit::from_cell(cell));
            continue;
        }

        split_code_cell(cell, highlighter, &mut units);
    }

    trace!("decomposed notebook into {} units", units.len());

    units
}

/// Expand one code cell into per-line and per-output units
fn split_code_cell(cell: &Cell, highlighter: &dyn SyntaxHighlighter, units: &mut Vec<CellUnit>) {
    let label = cell.label();
    let lines = cell.source_lines();

    // Highlight once over the whole cell, then hand each line its own
    // display fragment. A magic directive keeps the fragment list aligned
    // with the raw lines by substituting a language tag for the directive.
    let display = highlight_lines(highlighter, &lines, None);

    let count = lines.len();
    for (index, raw) in lines.into_iter().enumerate() {
        let head = index == 0;
        let last = index == count - 1;

        units.push(CellUnit::CodeLine(CodeLineUnit {
            label: if head { label.clone() } else { None },
            raw,
            display: display.get(index).cloned().unwrap_or_default(),
            head,
            last,
        }));
    }

    for output in cell.outputs() {
        units.push(CellUnit::CodeOutput(output.clone()));
    }
}
