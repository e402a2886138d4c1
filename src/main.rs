use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jsonfold::render::color::ColorMode;
use jsonfold::{
    materialize, parse_text, render_lines, transform, CollapseSet, MaterializeOptions, NodePath,
    RenderConfig,
};

#[derive(Parser, Debug)]
#[command(name = "jsonfold", version, about = "Fold JSON from stdin into numbered display lines")]
struct Cli {
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Tree)]
    format: Format,

    #[arg(long = "indent", default_value = "  ")]
    indent: String,

    /// Structural paths to collapse in tree output, e.g. `.user.roles[0]`.
    #[arg(short = 'c', long = "collapse")]
    collapse: Vec<String>,

    #[arg(long = "max-depth", default_value_t = 128)]
    max_depth: usize,

    /// Show the line-number gutter in tree output.
    #[arg(short = 'g', long = "gutter", default_value_t = false)]
    gutter: bool,

    #[arg(long = "color", conflicts_with = "no_color")]
    color: bool,

    #[arg(long = "no-color")]
    no_color: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// Collapsible tree lines (the default).
    Tree,
    /// Re-indented JSON.
    Pretty,
    /// Whitespace-free JSON.
    Min,
    /// JSON string-content escaping of the raw input text.
    Escape,
    /// Inverse of escape.
    Unescape,
    /// XML rendition of the document.
    Xml,
}

fn color_mode(cli: &Cli) -> ColorMode {
    if cli.color {
        ColorMode::On
    } else if cli.no_color {
        ColorMode::Off
    } else {
        ColorMode::Auto
    }
}

fn run_tree(cli: &Cli, input: &str) -> Result<String> {
    let mut collapsed = CollapseSet::new();
    for raw in &cli.collapse {
        let path: NodePath = raw
            .parse()
            .with_context(|| format!("bad --collapse value {raw:?}"))?;
        collapsed.insert(path);
    }
    let value = parse_text(input)?;
    let records = materialize(
        &value,
        &collapsed,
        &MaterializeOptions {
            max_depth: cli.max_depth,
        },
    );
    debug!(records = records.len(), collapsed = collapsed.len(), "tree ready");
    let mode = color_mode(cli);
    let cfg = RenderConfig {
        indent_unit: cli.indent.clone(),
        gutter: cli.gutter,
        color_mode: mode,
        color_enabled: mode.effective(io::stdout().is_terminal()),
        ..RenderConfig::default()
    };
    Ok(render_lines(&records, &cfg))
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read from stdin")?;

    let output = match cli.format {
        Format::Tree => run_tree(&cli, &input)?,
        Format::Pretty => transform::pretty_print(&input, &cli.indent)?,
        Format::Min => transform::minify(&input)?,
        // Escape/unescape act on the raw text itself, not on parsed JSON;
        // strip the trailing newline most shells append.
        Format::Escape => transform::escape(input.strip_suffix('\n').unwrap_or(&input)),
        Format::Unescape => transform::unescape(input.strip_suffix('\n').unwrap_or(&input))?,
        Format::Xml => transform::to_xml(&input)?,
    };
    println!("{output}");

    Ok(())
}
