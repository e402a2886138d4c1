/// Type tag for one emitted display line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineKind {
    Str,
    Num,
    Bool,
    Null,
    ArrayOpen,
    ArrayClose,
    ObjectOpen,
    ObjectClose,
}

impl LineKind {
    /// Whether this line stands for a container node the host can offer a
    /// collapse toggle on (open lines only; combined empty/collapsed lines
    /// keep their open kind).
    pub fn is_open(self) -> bool {
        matches!(self, LineKind::ArrayOpen | LineKind::ObjectOpen)
    }
}

/// One row of the materialized tree.
///
/// `text` is the rendered fragment without key label, indentation, or
/// trailing comma: a scalar literal (`"hi"`, `3.5`, `true`, `null`), a bare
/// bracket (`[`, `}`), a bracket pair (`{}`), or a bracket pair with a
/// collapse summary (`[... 3 items]`). Records are never mutated after
/// emission.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRecord {
    /// 1-based, strictly increasing in emission order within one pass.
    pub number: usize,
    pub depth: usize,
    /// Object-member label, unescaped. `None` for array elements, the root,
    /// and close lines.
    pub key: Option<String>,
    pub kind: LineKind,
    pub text: String,
    /// True iff another sibling follows at this nesting level.
    pub comma: bool,
}
