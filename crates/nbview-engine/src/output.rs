//! Output block formatting
//!
//! Renders one execution output (stream text, rich display data) into a
//! styled markup block. A malformed output entry degrades to a literal
//! placeholder instead of failing the document.

use nbview_core::escape_html;
use serde_json::Value;

/// Image MIME types, scanned in this fixed priority order
///
/// The first present key wins and nothing after it is consulted, even if
/// richer entries exist later in the mapping. This is deliberate policy,
/// not an artifact of map iteration order.
const IMAGE_FORMATS: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/gif"];

/// Render one output payload into a styled markup block
///
/// Output entries that are not JSON objects render as a literal
/// `<Invalid Output>` placeholder.
#[must_use]
pub fn render_output(output: &Value) -> String {
    let Some(map) = output.as_object() else {
        return escape_html("<Invalid Output>");
    };

    let mut classes = vec!["jupyter-output", "jupyter-monospaced"];

    if map.get("name").and_then(Value::as_str) == Some("stderr") {
        classes.push("jupyter-output-stderr");
    }

    let output_type = map.get("output_type").and_then(Value::as_str);

    let content = match output_type {
        Some("execute_result" | "display_data") => {
            render_display_data(map.get("data"), &mut classes)
        }
        // Stream output, and the fallback for unrecognized output types.
        _ => escape_html(&join_text(map.get("text"))),
    };

    format!("<div class=\"{}\">{}</div>", classes.join(" "), content)
}

/// Render the `data` mapping of a rich output
fn render_display_data(data: Option<&Value>, classes: &mut Vec<&'static str>) -> String {
    let Some(data) = data.and_then(Value::as_object) else {
        return String::new();
    };

    for format in IMAGE_FORMATS {
        if let Some(payload) = data.get(format) {
            // Multi-part payloads are chunked into an array of strings;
            // the chunks concatenate into one base64 body.
            let body = join_payload(Some(payload));
            return format!(
                "<img src=\"{}\"/>",
                escape_html(&format!("data:{format};base64,{body}"))
            );
        }
    }

    if let Some(html) = data.get("text/html") {
        classes.push("jupyter-output-html");
        return join_payload(Some(html));
    }

    if let Some(script) = data.get("application/javascript") {
        classes.push("jupyter-output-html");
        return join_payload(Some(script));
    }

    if let Some(text) = data.get("text/plain") {
        return escape_html(&join_payload(Some(text)));
    }

    String::new()
}

/// Flatten a string-or-array-of-strings `data` payload into one string
///
/// The scalar-wrap leniency applies to `data` mapping values only; the
/// stream `text` field goes through [`join_text`] instead.
fn join_payload(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .map(|part| part.as_str().unwrap_or_default())
            .collect(),
        _ => String::new(),
    }
}

/// Concatenate a stream `text` line list; anything but an array is empty
fn join_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(parts)) => parts
            .iter()
            .map(|part| part.as_str().unwrap_or_default())
            .collect(),
        _ => String::new(),
    }
}
