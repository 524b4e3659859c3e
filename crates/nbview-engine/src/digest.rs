//! Content fingerprinting
//!
//! Every decomposed unit gets a stable digest used as its diff-comparison
//! key. Digests are compared for equality only and never decoded, so the
//! exact algorithm is not part of any wire contract; what matters is that
//! equal input bytes under the same context string always produce equal
//! digests.

use nbview_core::CellUnit;
use sha2::{Digest, Sha256};
use std::fmt;

/// Domain-separation context for notebook content digests
pub const CONTENT_DIGEST_CONTEXT: &str = "nbview.content-digest";

/// A fixed-size content digest, compared for equality only
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Raw digest bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering of the digest
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(64);
        for byte in self.0 {
            hex.push_str(&format!("{byte:02x}"));
        }
        hex
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({})", self.to_hex())
    }
}

// Digests cross into the presentation layer as opaque comparison keys,
// so they serialize as their hex form.
impl serde::Serialize for ContentDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Digest input bytes under a fixed context string
///
/// The context string is mixed into the hash state ahead of the input (with
/// a separator byte so context/input boundaries are unambiguous), keeping
/// these digests distinct from any other use of the same hash primitive.
#[must_use]
pub fn keyed_digest(input: &[u8], context: &str) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(context.as_bytes());
    hasher.update([0u8]);
    hasher.update(input);
    ContentDigest(hasher.finalize().into())
}

/// Compute the diff-comparison digest of a decomposed unit
///
/// A code line hashes its raw source text alone, so two lines with the
/// same text hash identically regardless of position, label or head/last
/// status; the diff key is "this exact source line", not "this line at
/// this position". Every other unit kind hashes the canonical
/// serialization of its complete data.
#[must_use]
pub fn unit_digest(unit: &CellUnit) -> ContentDigest {
    match unit {
        CellUnit::CodeLine(line) => keyed_digest(line.raw.as_bytes(), CONTENT_DIGEST_CONTEXT),
        other => keyed_digest(
            other.canonical_value().to_string().as_bytes(),
            CONTENT_DIGEST_CONTEXT,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbview_core::CodeLineUnit;
    use serde_json::json;

    fn code_line(raw: &str, label: Option<&str>, head: bool, last: bool) -> CellUnit {
        CellUnit::CodeLine(CodeLineUnit {
            label: label.map(ToString::to_string),
            raw: raw.to_string(),
            display: format!("styled:{raw}"),
            head,
            last,
        })
    }

    #[test]
    fn test_keyed_digest_is_deterministic() {
        let a = keyed_digest(b"x = 1\n", CONTENT_DIGEST_CONTEXT);
        let b = keyed_digest(b"x = 1\n", CONTENT_DIGEST_CONTEXT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyed_digest_separates_contexts() {
        let a = keyed_digest(b"x = 1\n", "nbview.content-digest");
        let b = keyed_digest(b"x = 1\n", "nbview.other-use");
        assert_ne!(a, b);
    }

    #[test]
    fn test_code_line_digest_ignores_position() {
        // Same raw text, different label/head/last: identical digest.
        let head = code_line("x = 1\n", Some("In [1]:"), true, false);
        let tail = code_line("x = 1\n", None, false, true);
        assert_eq!(unit_digest(&head), unit_digest(&tail));
    }

    #[test]
    fn test_code_line_digest_ignores_display_markup() {
        let plain = code_line("x = 1\n", None, false, false);
        let CellUnit::CodeLine(mut styled) = plain.clone() else {
            unreachable!()
        };
        styled.display = "<span class=\"kw\">x</span> = 1\n".to_string();
        assert_eq!(unit_digest(&plain), unit_digest(&CellUnit::CodeLine(styled)));
    }

    #[test]
    fn test_code_line_digest_differs_by_text() {
        let a = code_line("x = 1\n", None, false, false);
        let b = code_line("x = 2\n", None, false, false);
        assert_ne!(unit_digest(&a), unit_digest(&b));
    }

    #[test]
    fn test_output_digest_covers_full_payload() {
        let a = CellUnit::CodeOutput(json!({"output_type": "stream", "text": ["a\n"]}));
        let b = CellUnit::CodeOutput(json!({"output_type": "stream", "text": ["b\n"]}));
        assert_eq!(unit_digest(&a), unit_digest(&a.clone()));
        assert_ne!(unit_digest(&a), unit_digest(&b));
    }

    #[test]
    fn test_hex_rendering() {
        let digest = keyed_digest(b"x", CONTENT_DIGEST_CONTEXT);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(format!("{digest}"), hex);
    }
}
