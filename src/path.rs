use std::fmt;
use std::str::FromStr;

use crate::errors::PathParseError;

/// One step of descent into a JSON document.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Position of a node in a JSON document, as a list of segments.
///
/// Equality and hashing work on the segments themselves, not on a joined
/// string, so keys containing `.` or `[` cannot collide with paths of a
/// different shape. The root is the empty path.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Child path without mutating `self`.
    pub fn child_key(&self, key: &str) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            match seg {
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{k}")?,
                // Bracket notation for keys that would be ambiguous in dot form.
                Segment::Key(k) => {
                    let escaped = k.replace('\\', "\\\\").replace('"', "\\\"");
                    write!(f, "[\"{escaped}\"]")?
                }
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = PathParseError;

    /// Parses the display notation back into segments: `.key`, `[0]`,
    /// `["quoted key"]`. The empty string is the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let mut path = NodePath::root();
        let mut pos = 0usize;
        while pos < bytes.len() {
            match bytes[pos] {
                b'.' => {
                    let start = pos + 1;
                    let mut end = start;
                    while end < bytes.len() && bytes[end] != b'.' && bytes[end] != b'[' {
                        end += 1;
                    }
                    if end == start {
                        return Err(PathParseError::new("empty key after '.'", pos));
                    }
                    path.push_key(&s[start..end]);
                    pos = end;
                }
                b'[' => {
                    if pos + 1 < bytes.len() && bytes[pos + 1] == b'"' {
                        let (key, next) = parse_quoted_key(s, pos + 1)?;
                        path.push_key(&key);
                        pos = next;
                    } else {
                        let start = pos + 1;
                        let mut end = start;
                        while end < bytes.len() && bytes[end] != b']' {
                            end += 1;
                        }
                        if end == bytes.len() {
                            return Err(PathParseError::new("unterminated index", pos));
                        }
                        let index: usize = s[start..end]
                            .parse()
                            .map_err(|_| PathParseError::new("invalid index", start))?;
                        path.push_index(index);
                        pos = end + 1;
                    }
                }
                _ => return Err(PathParseError::new("expected '.' or '['", pos)),
            }
        }
        Ok(path)
    }
}

/// Parses `"..."]` starting at the opening quote; returns the unescaped key
/// and the offset just past the closing `]`.
fn parse_quoted_key(s: &str, quote: usize) -> Result<(String, usize), PathParseError> {
    let bytes = s.as_bytes();
    let mut key = String::new();
    let mut pos = quote + 1;
    loop {
        match bytes.get(pos) {
            None => return Err(PathParseError::new("unterminated quoted key", quote)),
            Some(b'"') => break,
            Some(b'\\') => match bytes.get(pos + 1) {
                Some(b'"') => {
                    key.push('"');
                    pos += 2;
                }
                Some(b'\\') => {
                    key.push('\\');
                    pos += 2;
                }
                _ => return Err(PathParseError::new("invalid escape in quoted key", pos)),
            },
            Some(_) => {
                // Step over one full UTF-8 character.
                let ch = s[pos..].chars().next().ok_or_else(|| {
                    PathParseError::new("invalid utf-8 boundary in quoted key", pos)
                })?;
                key.push(ch);
                pos += ch.len_utf8();
            }
        }
    }
    match bytes.get(pos + 1) {
        Some(b']') => Ok((key, pos + 2)),
        _ => Err(PathParseError::new("expected ']' after quoted key", pos + 1)),
    }
}
