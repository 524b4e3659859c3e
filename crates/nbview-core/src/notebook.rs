//! Jupyter notebook (nbformat 4) model and validation
//!
//! Cells are kept as thin read-only wrappers over the parsed JSON rather
//! than fully typed structs: notebooks in the wild carry cells and outputs
//! of shapes this engine does not recognize, and those must survive
//! untouched so the raw-cell fallback renderer and the content
//! fingerprinter can see exactly what the document contained.

use crate::error::{NotebookError, Result};
use log::debug;
use serde_json::Value;

/// Notebook format version this engine accepts
pub const SUPPORTED_NBFORMAT: u64 = 4;

/// A validated notebook document
///
/// Holds the ordered cell list of an nbformat 4 document. Construction
/// via [`Notebook::parse`] is the only way to obtain one, so holding a
/// `Notebook` implies the format version and cell list already passed
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    cells: Vec<Cell>,
}

impl Notebook {
    /// Parse and validate a notebook from raw document bytes
    ///
    /// Validation is deliberately shallow: the format version must be the
    /// integer 4 and a non-empty `cells` array must be present. Anything
    /// beyond that is tolerated and handled per-cell at render time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the bytes are not valid JSON, or decode to a non-object
    ///   ([`NotebookError::MalformedInput`])
    /// - `nbformat` is absent or empty ([`NotebookError::MissingField`])
    /// - `nbformat` is not the integer 4 ([`NotebookError::UnsupportedVersion`])
    /// - `cells` is absent or not an array ([`NotebookError::MissingField`])
    /// - `cells` is empty ([`NotebookError::EmptyDocument`])
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let data: Value = serde_json::from_slice(bytes)
            .map_err(|e| NotebookError::MalformedInput(e.to_string()))?;

        let Some(map) = data.as_object() else {
            return Err(NotebookError::MalformedInput(
                "the document does not encode a JSON object".to_string(),
            ));
        };

        match map.get("nbformat") {
            // Degenerate shapes (booleans, arrays, objects) carry no
            // version at all and count as the field being absent.
            None
            | Some(Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
                return Err(NotebookError::MissingField("nbformat"));
            }
            Some(Value::String(s)) if s.is_empty() => {
                return Err(NotebookError::MissingField("nbformat"));
            }
            Some(Value::Number(n)) if n.as_u64() == Some(SUPPORTED_NBFORMAT) => {}
            Some(other) => {
                return Err(NotebookError::UnsupportedVersion {
                    found: display_version(other),
                    expected: SUPPORTED_NBFORMAT,
                });
            }
        }

        let Some(Value::Array(cells)) = map.get("cells") else {
            return Err(NotebookError::MissingField("cells"));
        };

        if cells.is_empty() {
            return Err(NotebookError::EmptyDocument);
        }

        debug!("parsed notebook with {} cells", cells.len());

        Ok(Self {
            cells: cells.iter().cloned().map(Cell::new).collect(),
        })
    }

    /// Ordered cell list of the document
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Render a version value for an error message without JSON quoting noise
fn display_version(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One entry in a notebook's cell list
///
/// The wrapped value is read-only and may be any JSON shape; accessors
/// degrade to empty/`None` rather than failing so that a single odd cell
/// never takes the whole document down.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: Value,
}

impl Cell {
    /// Wrap a raw cell value
    #[inline]
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The full raw cell value, exactly as parsed
    #[inline]
    #[must_use]
    pub const fn raw_value(&self) -> &Value {
        &self.value
    }

    /// The `cell_type` discriminant, if present and a string
    #[must_use]
    pub fn cell_type(&self) -> Option<&str> {
        self.value.get("cell_type").and_then(Value::as_str)
    }

    /// Source lines of the cell
    ///
    /// A missing or non-array `source` is treated as an empty cell.
    /// Non-string entries map to empty lines so that indices stay aligned
    /// with the highlighted display fragments.
    #[must_use]
    pub fn source_lines(&self) -> Vec<String> {
        match self.value.get("source") {
            Some(Value::Array(lines)) => lines
                .iter()
                .map(|line| line.as_str().unwrap_or_default().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Output list of a code cell, empty when absent or malformed
    #[must_use]
    pub fn outputs(&self) -> &[Value] {
        match self.value.get("outputs") {
            Some(Value::Array(outputs)) => outputs.as_slice(),
            _ => &[],
        }
    }

    /// Execution counter of a code cell, if present
    #[must_use]
    pub fn execution_count(&self) -> Option<i64> {
        self.value.get("execution_count").and_then(Value::as_i64)
    }

    /// The `In [n]:` execution label
    ///
    /// A zero, null or absent execution counter yields no label.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self.execution_count() {
            Some(count) if count != 0 => Some(format!("In [{count}]:")),
            _ => None,
        }
    }
}
