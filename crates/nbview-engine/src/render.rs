//! Unit rendering
//!
//! Converts one decomposed unit into a labeled content row and assembles
//! rows into the notebook table markup. Dispatch is an exhaustive match
//! over the unit kind, so an unhandled kind is a compile error rather
//! than a silent fallthrough.

use crate::output::render_output;
use nbview_core::{
    escape_html, highlight_lines, CellUnit, CodeLineUnit, SyntaxHighlighter,
};

/// A rendered unit: an optional gutter label plus a content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Label text for the gutter cell (the `In [n]:` marker), if any
    pub label: Option<String>,
    /// Content markup for the body cell
    pub content: String,
}

/// Render one decomposed unit into a labeled row
#[must_use]
pub fn render_unit(highlighter: &dyn SyntaxHighlighter, unit: &CellUnit) -> RenderedRow {
    match unit {
        CellUnit::Markdown(cell) => {
            // Markdown is rendered as plain text on purpose: markdown
            // highlighting buys little and costs a lot.
            let content = highlight_lines(highlighter, &cell.source_lines(), Some("txt"));
            RenderedRow {
                label: None,
                content: format!(
                    "<div class=\"jupyter-cell-markdown\">{}</div>",
                    content.concat()
                ),
            }
        }
        CellUnit::Code(cell) => {
            let content = highlight_lines(highlighter, &cell.source_lines(), None);

            let mut body = format!(
                "<div class=\"jupyter-cell-code jupyter-cell-code-block \
                 jupyter-monospaced\">{}</div>",
                content.concat()
            );
            for output in cell.outputs() {
                body.push_str(&render_output(output));
            }

            RenderedRow {
                label: cell.label(),
                content: body,
            }
        }
        CellUnit::CodeLine(line) => render_code_line(line),
        CellUnit::CodeOutput(output) => RenderedRow {
            label: None,
            content: render_output(output),
        },
        CellUnit::Raw(cell) => {
            let pretty = serde_json::to_string_pretty(cell.raw_value())
                .unwrap_or_else(|_| cell.raw_value().to_string());
            RenderedRow {
                label: None,
                content: format!(
                    "<div class=\"jupyter-cell-raw jupyter-monospaced\">{}</div>",
                    escape_html(&pretty)
                ),
            }
        }
    }
}

/// Render a single code line with its head/last modifier classes
fn render_code_line(line: &CodeLineUnit) -> RenderedRow {
    let mut classes = vec![
        "jupyter-monospaced",
        "jupyter-cell-code",
        "jupyter-cell-code-line",
    ];

    if line.head {
        classes.push("jupyter-cell-code-head");
    }

    if line.last {
        classes.push("jupyter-cell-code-last");
    }

    RenderedRow {
        label: line.label.clone(),
        content: format!(
            "<div class=\"{}\">{}</div>",
            classes.join(" "),
            line.display
        ),
    }
}

/// Assemble one unit into a table row
///
/// Code-line body cells carry a flush class so consecutive split lines
/// visually join back into one block.
#[must_use]
pub fn render_row(highlighter: &dyn SyntaxHighlighter, unit: &CellUnit) -> String {
    let row = render_unit(highlighter, unit);

    let label = row
        .label
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();

    let content_class = match unit {
        CellUnit::CodeLine(_) => " class=\"jupyter-cell-flush\"",
        _ => "",
    };

    format!(
        "<tr><td class=\"jupyter-label\">{label}</td><td{content_class}>{}</td></tr>",
        row.content
    )
}

/// Wrap rendered rows into the notebook table markup
#[must_use]
pub fn render_table(rows: &str) -> String {
    format!("<table class=\"jupyter-notebook\">{rows}</table>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbview_core::{decompose, Notebook, PlainHighlighter, RenderMode};
    use serde_json::json;

    fn units(cells: serde_json::Value, mode: RenderMode) -> Vec<CellUnit> {
        let doc = json!({"nbformat": 4, "cells": cells});
        let notebook = Notebook::parse(doc.to_string().as_bytes()).unwrap();
        decompose(&notebook, mode, &PlainHighlighter)
    }

    #[test]
    fn test_markdown_cell_renders_unlabeled() {
        let units = units(
            json!([{"cell_type": "markdown", "source": ["hi"]}]),
            RenderMode::Full,
        );
        let row = render_unit(&PlainHighlighter, &units[0]);

        assert_eq!(row.label, None);
        assert_eq!(row.content, "<div class=\"jupyter-cell-markdown\">hi</div>");
    }

    #[test]
    fn test_markdown_cell_is_not_code_highlighted() {
        // A markdown cell starting with %% must not trigger the magic
        // language directive; markdown always highlights as plain text.
        let units = units(
            json!([{"cell_type": "markdown", "source": ["%%notalanguage\n", "text\n"]}]),
            RenderMode::Full,
        );
        let row = render_unit(&PlainHighlighter, &units[0]);
        assert!(row.content.contains("%%notalanguage"));
        assert!(!row.content.contains("language-tag"));
    }

    #[test]
    fn test_code_cell_renders_label_block_and_outputs() {
        let units = units(
            json!([{
                "cell_type": "code",
                "execution_count": 7,
                "source": ["x = 1\n", "x\n"],
                "outputs": [
                    {"output_type": "execute_result", "data": {"text/plain": ["1"]}},
                ],
            }]),
            RenderMode::Full,
        );
        let row = render_unit(&PlainHighlighter, &units[0]);

        assert_eq!(row.label.as_deref(), Some("In [7]:"));
        assert!(row.content.contains("jupyter-cell-code-block"));
        assert!(row.content.contains("x = 1\nx\n"));
        // Outputs follow the code block, in order.
        let block_at = row.content.find("jupyter-cell-code-block").unwrap();
        let output_at = row.content.find("jupyter-output").unwrap();
        assert!(block_at < output_at);
    }

    #[test]
    fn test_code_line_modifier_classes() {
        let units = units(
            json!([{
                "cell_type": "code",
                "execution_count": 1,
                "source": ["a\n", "b\n", "c\n"],
            }]),
            RenderMode::Diff,
        );

        let head = render_unit(&PlainHighlighter, &units[0]);
        assert_eq!(head.label.as_deref(), Some("In [1]:"));
        assert!(head.content.contains("jupyter-cell-code-head"));
        assert!(!head.content.contains("jupyter-cell-code-last"));

        let middle = render_unit(&PlainHighlighter, &units[1]);
        assert_eq!(middle.label, None);
        assert!(!middle.content.contains("jupyter-cell-code-head"));
        assert!(!middle.content.contains("jupyter-cell-code-last"));

        let last = render_unit(&PlainHighlighter, &units[2]);
        assert!(last.content.contains("jupyter-cell-code-last"));
    }

    #[test]
    fn test_raw_cell_renders_pretty_json() {
        let units = units(
            json!([{"cell_type": "widget", "payload": {"a": 1}}]),
            RenderMode::Full,
        );
        let row = render_unit(&PlainHighlighter, &units[0]);

        assert_eq!(row.label, None);
        assert!(row.content.contains("jupyter-cell-raw"));
        assert!(row.content.contains("&quot;payload&quot;"));
    }

    #[test]
    fn test_row_assembly_and_flush_class() {
        let all = units(
            json!([{
                "cell_type": "code",
                "source": ["x\n"],
                "outputs": [{"output_type": "stream", "text": ["y\n"]}],
            }]),
            RenderMode::Diff,
        );

        let line_row = render_row(&PlainHighlighter, &all[0]);
        assert!(line_row.starts_with("<tr><td class=\"jupyter-label\">"));
        assert!(line_row.contains("<td class=\"jupyter-cell-flush\">"));

        let output_row = render_row(&PlainHighlighter, &all[1]);
        assert!(!output_row.contains("jupyter-cell-flush"));
    }

    #[test]
    fn test_full_and_diff_agree_on_code_text() {
        // Splitting a cell into lines must not change the rendered source
        // text, only the wrappers around it.
        let cells = json!([{
            "cell_type": "code",
            "source": ["a = 1\n", "b = 2\n", "a + b\n"],
        }]);

        let full = units(cells.clone(), RenderMode::Full);
        let full_row = render_unit(&PlainHighlighter, &full[0]);

        let diff = units(cells, RenderMode::Diff);
        let mut diff_text = String::new();
        for unit in &diff {
            let CellUnit::CodeLine(line) = unit else {
                continue;
            };
            diff_text.push_str(&line.display);
        }

        assert!(full_row.content.contains(&diff_text));
    }
}
