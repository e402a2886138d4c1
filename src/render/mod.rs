pub mod color;

use self::color::ColorMode;
use crate::line::LineRecord;

/// Text-layout knobs for turning line records into output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderConfig {
    pub indent_unit: String,
    /// Separator between `"key":` and the value.
    pub space: String,
    pub newline: String,
    /// Prefix each line with its 1-based number.
    pub gutter: bool,
    /// Desired color mode as requested by the caller.
    pub color_mode: ColorMode,
    /// Resolved color enablement after considering color_mode and the
    /// output TTY.
    pub color_enabled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            space: " ".to_string(),
            newline: "\n".to_string(),
            gutter: false,
            color_mode: ColorMode::Auto,
            color_enabled: false,
        }
    }
}

/// Lays the records out as text. With the default config and no collapsed
/// paths this is byte-for-byte a standard pretty-print of the document.
/// No trailing newline.
pub fn render_lines(records: &[LineRecord], cfg: &RenderConfig) -> String {
    let width = records.len().to_string().len();
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push_str(&cfg.newline);
        }
        if cfg.gutter {
            let gutter = format!("{:>width$} ", record.number);
            out.push_str(&color::paint_gutter(&gutter, cfg.color_enabled));
        }
        out.push_str(&cfg.indent_unit.repeat(record.depth));
        if let Some(key) = &record.key {
            let label = serde_json::to_string(key)
                .unwrap_or_else(|_| format!("\"{key}\""));
            out.push_str(&color::paint_key(&label, cfg.color_enabled));
            out.push(':');
            out.push_str(&cfg.space);
        }
        out.push_str(&color::paint_value(
            record.kind,
            &record.text,
            cfg.color_enabled,
        ));
        if record.comma {
            out.push(',');
        }
    }
    out
}
