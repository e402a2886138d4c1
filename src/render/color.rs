use crate::line::LineKind;

/// Desired color behavior, resolved against the output TTY at startup.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorMode {
    On,
    Off,
    Auto,
}

impl ColorMode {
    pub fn effective(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorMode::On => true,
            ColorMode::Off => false,
            ColorMode::Auto => stdout_is_terminal,
        }
    }
}

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";

fn code_for(kind: LineKind) -> Option<&'static str> {
    match kind {
        LineKind::Str => Some(GREEN),
        LineKind::Num => Some(YELLOW),
        LineKind::Bool | LineKind::Null => Some(MAGENTA),
        LineKind::ArrayOpen
        | LineKind::ArrayClose
        | LineKind::ObjectOpen
        | LineKind::ObjectClose => None,
    }
}

/// Colors a record's value fragment by its type tag.
pub fn paint_value(kind: LineKind, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    match code_for(kind) {
        Some(code) => format!("{code}{text}{RESET}"),
        None => text.to_string(),
    }
}

pub fn paint_key(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{CYAN}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn paint_gutter(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{DIM}{text}{RESET}")
    } else {
        text.to_string()
    }
}
