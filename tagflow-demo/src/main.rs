//! Tagflow demo - lays out a tag cloud in the terminal.
//!
//! The host owns the tags and their selection state, measures each tag with
//! monospace metrics, and hands only sizes to the layout.

mod render;
mod tags;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::{Parser, ValueEnum};
use tagflow::{Alignment, FlowLayout, LayoutConfig, Rect};
use tracing_subscriber::EnvFilter;

use crate::tags::TagList;

/// Width of a typical phone screen in points.
const DEFAULT_WIDTH: f32 = 390.0;

#[derive(Parser, Debug)]
#[command(name = "tagflow-demo", version)]
struct Cli {
    /// Width to lay the tags out in.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f32,

    /// Row alignment (overrides the config file).
    #[arg(long, value_enum)]
    alignment: Option<AlignmentArg>,

    /// Spacing between tags and rows (overrides the config file).
    #[arg(long)]
    spacing: Option<f32>,

    /// Layout config JSON, e.g. {"alignment": "leading", "spacing": 4}.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Toggle selection of the tag at this index. Repeatable.
    #[arg(long = "select")]
    select: Vec<usize>,

    /// Comma-separated tags to use instead of the built-in list.
    #[arg(long, value_delimiter = ',')]
    tags: Option<Vec<String>>,

    /// Print the arrangement as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignmentArg {
    Leading,
    Center,
    Trailing,
}

impl From<AlignmentArg> for Alignment {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Leading => Alignment::Leading,
            AlignmentArg::Center => Alignment::Center,
            AlignmentArg::Trailing => Alignment::Trailing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    print!("{}", output);
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    if !cli.width.is_finite() {
        bail!("--width must be a finite number, got {}", cli.width);
    }

    let base = match &cli.config {
        Some(path) => read_config(path)?,
        None => demo_config(),
    };
    let config = resolve_config(base, cli.alignment, cli.spacing)?;

    let mut list = match &cli.tags {
        Some(names) => {
            TagList::from_names(names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()))
        }
        None => TagList::demo(),
    };
    for &index in &cli.select {
        list.toggle(index)?;
    }

    let bounds = Rect::with_width(cli.width);
    let arrangement = FlowLayout::from_config(config)
        .arrange(list.tags(), bounds)
        .context("lay out tags")?;

    tracing::info!(
        "arranged {} tags into {} rows ({}x{})",
        list.tags().len(),
        arrangement.rows.len(),
        arrangement.size.width,
        arrangement.size.height
    );

    if cli.json {
        let mut json =
            render::render_json(list.tags(), &arrangement).context("encode layout JSON")?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render::render_text(list.tags(), &arrangement, bounds))
    }
}

/// Centered rows with no gaps between tags.
fn demo_config() -> LayoutConfig {
    LayoutConfig::new(Alignment::Center, 0.0)
}

fn read_config(path: &Path) -> anyhow::Result<LayoutConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    LayoutConfig::from_json(&text).with_context(|| format!("parse config '{}'", path.display()))
}

/// Apply command-line overrides on top of `base`.
fn resolve_config(
    base: LayoutConfig,
    alignment: Option<AlignmentArg>,
    spacing: Option<f32>,
) -> anyhow::Result<LayoutConfig> {
    let mut config = base;
    if let Some(alignment) = alignment {
        config = config.with_alignment(alignment.into());
    }
    if let Some(spacing) = spacing {
        config = config.with_spacing(spacing);
    }
    config.validate()?;
    Ok(config)
}
