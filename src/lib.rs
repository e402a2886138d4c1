//! Fold a parsed JSON document into an ordered sequence of display lines.
//!
//! The core is [`materialize`]: a depth-first walk over a `serde_json::Value`
//! that emits one [`LineRecord`] per scalar, object member, or bracket, with
//! 1-based line numbers, indentation depth, type tags, and exact trailing
//! comma placement. Collapse state is a set of structural paths
//! ([`CollapseSet`]) owned by the host; a collapsed container renders as a
//! single summary line and contributes no interior records.
//!
//! Around the core sit the text transforms of a JSON formatting tool
//! ([`transform`]) and a plain-text renderer ([`render`]) that lays records
//! out as a pretty-printed document.

pub mod collapse;
pub mod errors;
pub mod line;
pub mod materialize;
pub mod path;
pub mod render;
pub mod transform;

pub use collapse::CollapseSet;
pub use errors::{Error, PathParseError, TransformError};
pub use line::{LineKind, LineRecord};
pub use materialize::{materialize, MaterializeOptions};
pub use path::{NodePath, Segment};
pub use render::{render_lines, RenderConfig};

use serde_json::Value;
use tracing::debug;

/// The parse boundary. Malformed text never reaches the materializer; the
/// error message carries serde_json's line/column diagnostics verbatim.
pub fn parse_text(text: &str) -> Result<Value, Error> {
    let value = serde_json::from_str(text)?;
    debug!(bytes = text.len(), "parsed document");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_accepts_valid_documents() {
        assert!(parse_text(r#"{"a":1}"#).is_ok());
        assert!(parse_text("[]").is_ok());
        assert!(parse_text("null").is_ok());
    }

    #[test]
    fn parse_text_surfaces_parser_diagnostics() {
        let err = parse_text(r#"{"a":}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 1"), "message was: {msg}");
    }
}
