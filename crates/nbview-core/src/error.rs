//! Error types for notebook validation and decomposition

use thiserror::Error;

/// Error type for notebook validation operations
///
/// Every variant is a document-level failure: when one of these is
/// returned, no part of the document is rendered. Recoverable problems
/// (for example a malformed output entry inside an otherwise valid code
/// cell) are handled locally by the renderer and never surface here.
#[derive(Error, Debug)]
pub enum NotebookError {
    /// The document bytes are not valid JSON, or the decoded value is
    /// not a JSON object.
    #[error(
        "This is not a valid JSON document and can not be rendered as \
         a Jupyter notebook: {0}"
    )]
    MalformedInput(String),

    /// A required top-level field is absent or has the wrong shape.
    #[error("This Jupyter notebook is missing a required \"{0}\" field.")]
    MissingField(&'static str),

    /// The notebook format version is not the supported one.
    #[error(
        "This Jupyter notebook uses an unsupported version of the file \
         format (found version {found}, expected version {expected})."
    )]
    UnsupportedVersion {
        /// Version value found in the document, rendered for display
        found: String,
        /// Version this engine supports
        expected: u64,
    },

    /// The cell list is present but empty.
    #[error("This Jupyter notebook does not specify any notebook cells.")]
    EmptyDocument,
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_display() {
        let error = NotebookError::MalformedInput("expected value at line 1".to_string());
        let display = format!("{error}");
        assert!(display.contains("not a valid JSON document"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_missing_field_display() {
        let error = NotebookError::MissingField("nbformat");
        assert_eq!(
            format!("{error}"),
            "This Jupyter notebook is missing a required \"nbformat\" field."
        );
    }

    #[test]
    fn test_unsupported_version_names_both_versions() {
        let error = NotebookError::UnsupportedVersion {
            found: "5".to_string(),
            expected: 4,
        };
        let display = format!("{error}");
        assert!(display.contains("found version 5"));
        assert!(display.contains("expected version 4"));
    }

    #[test]
    fn test_empty_document_display() {
        let error = NotebookError::EmptyDocument;
        assert!(format!("{error}").contains("does not specify any notebook cells"));
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(NotebookError::EmptyDocument)
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        match outer() {
            Err(NotebookError::EmptyDocument) => {}
            other => panic!("expected EmptyDocument, got {other:?}"),
        }
    }
}
