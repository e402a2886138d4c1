use serde_json::Value;
use tracing::debug;

use crate::collapse::CollapseSet;
use crate::line::{LineKind, LineRecord};
use crate::path::NodePath;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaterializeOptions {
    /// Containers at this depth are summarized instead of descended into,
    /// so the walk is stack-safe on untrusted documents.
    pub max_depth: usize,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Walks a parsed document and emits one `LineRecord` per display line.
///
/// Depth-first, pre-order for opens and scalars, post-order for closes.
/// Line numbers are `1..=N` in emission order; the numbering lives in the
/// output vector itself, so there is no counter to reset between passes.
/// `collapsed` is read-only for the duration of the call and the walk itself
/// cannot fail: malformed text must be rejected at the parse boundary before
/// a `Value` ever exists.
pub fn materialize(
    value: &Value,
    collapsed: &CollapseSet,
    options: &MaterializeOptions,
) -> Vec<LineRecord> {
    let mut walk = Walk {
        collapsed,
        max_depth: options.max_depth,
        out: Vec::new(),
    };
    let mut path = NodePath::root();
    walk.node(value, None, 0, &mut path, true);
    debug!(records = walk.out.len(), "materialized document");
    walk.out
}

struct Walk<'a> {
    collapsed: &'a CollapseSet,
    max_depth: usize,
    out: Vec<LineRecord>,
}

impl Walk<'_> {
    fn emit(
        &mut self,
        depth: usize,
        key: Option<&str>,
        kind: LineKind,
        text: String,
        comma: bool,
    ) {
        self.out.push(LineRecord {
            number: self.out.len() + 1,
            depth,
            key: key.map(str::to_string),
            kind,
            text,
            comma,
        });
    }

    /// `last` is true when this node is the final sibling at its level; the
    /// trailing comma flag is its negation.
    fn node(
        &mut self,
        value: &Value,
        key: Option<&str>,
        depth: usize,
        path: &mut NodePath,
        last: bool,
    ) {
        match value {
            Value::Null => self.emit(depth, key, LineKind::Null, "null".to_string(), !last),
            Value::Bool(b) => self.emit(depth, key, LineKind::Bool, b.to_string(), !last),
            Value::Number(n) => self.emit(depth, key, LineKind::Num, n.to_string(), !last),
            Value::String(s) => {
                let literal = serde_json::to_string(s)
                    .unwrap_or_else(|_| format!("\"{s}\""));
                self.emit(depth, key, LineKind::Str, literal, !last);
            }
            Value::Array(items) => {
                if items.is_empty() {
                    self.emit(depth, key, LineKind::ArrayOpen, "[]".to_string(), !last);
                } else if self.collapsed.contains(path) || depth >= self.max_depth {
                    // Single combined record; the subtree contributes no
                    // further records or line numbers.
                    let summary = format!("[... {} items]", items.len());
                    self.emit(depth, key, LineKind::ArrayOpen, summary, !last);
                } else {
                    self.emit(depth, key, LineKind::ArrayOpen, "[".to_string(), false);
                    let n = items.len();
                    for (i, item) in items.iter().enumerate() {
                        path.push_index(i);
                        self.node(item, None, depth + 1, path, i + 1 == n);
                        path.pop();
                    }
                    self.emit(depth, None, LineKind::ArrayClose, "]".to_string(), !last);
                }
            }
            Value::Object(map) => {
                if map.is_empty() {
                    self.emit(depth, key, LineKind::ObjectOpen, "{}".to_string(), !last);
                } else if self.collapsed.contains(path) || depth >= self.max_depth {
                    let summary = format!("{{... {} keys}}", map.len());
                    self.emit(depth, key, LineKind::ObjectOpen, summary, !last);
                } else {
                    self.emit(depth, key, LineKind::ObjectOpen, "{".to_string(), false);
                    let n = map.len();
                    // Insertion order, straight out of the parsed map.
                    for (i, (k, v)) in map.iter().enumerate() {
                        path.push_key(k);
                        self.node(v, Some(k), depth + 1, path, i + 1 == n);
                        path.pop();
                    }
                    self.emit(depth, None, LineKind::ObjectClose, "}".to_string(), !last);
                }
            }
        }
    }
}
