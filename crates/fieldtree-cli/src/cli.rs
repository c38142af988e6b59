use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use fieldtree::{
    ExpandPersistState, ExpandStore, FieldPath, JsonViewer, build_fields, parse_json_reader,
};
use tracing::{debug, info};

use crate::config::{ResolvedOptions, ViewerConfig};
use crate::error::Result;
use crate::logging;
use crate::output::RowRecord;

#[derive(Debug, Parser)]
#[command(
    name = "fieldtree",
    about = "Render a JSON document as a collapsible tree with guide lines",
    version
)]
pub struct Cli {
    /// JSON document to read. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Expand every object on first display.
    #[arg(long)]
    pub expand_all: bool,

    /// Expand the object at KEY (JSON Pointer, e.g. `/data/items`).
    #[arg(long = "expand", value_name = "KEY")]
    pub expand: Vec<String>,

    /// Collapse the object at KEY.
    #[arg(long = "collapse", value_name = "KEY")]
    pub collapse: Vec<String>,

    /// Guide style: ascii, unicode, bold, double or rounded.
    #[arg(long, value_name = "STYLE")]
    pub guides: Option<String>,

    /// Clip each row to this many terminal columns.
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Viewer config file (TOML).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Expand-state file. Loaded if present and rewritten after rendering.
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Guide-lined text, one row per line.
    Text,
    /// One JSON object per row.
    Json,
}

pub fn run_from_env() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    run(&cli)
}

pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = BufReader::new(File::open(path)?);
            run_with_io(cli, file, &mut out)?;
        }
        _ => run_with_io(cli, io::stdin().lock(), &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Render `input` to `out` according to `cli`.
pub fn run_with_io(cli: &Cli, input: impl Read, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    let options =
        ResolvedOptions::resolve(&config, cli.guides.as_deref(), cli.expand_all, cli.width)?;

    let value = parse_json_reader(input)?;
    let fields = build_fields(&value);

    let store = ExpandStore::new();
    if let Some(path) = &cli.state
        && let Some(state) = load_state(path)?
    {
        store.restore_state(state);
    }
    store.initialize(&fields, options.policy);
    for key in &cli.expand {
        store.toggle(normalize_key(key), true);
    }
    for key in &cli.collapse {
        store.toggle(normalize_key(key), false);
    }

    let viewer = JsonViewer::new(&fields)
        .with_guides(options.guides)
        .with_labels(options.labels);
    let rows = match cli.format {
        OutputFormat::Text => {
            let lines = viewer.render_lines(&store, options.width);
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            lines.len()
        }
        OutputFormat::Json => {
            let rows = viewer.rows(&store);
            for row in &rows {
                let mut record = RowRecord::from_row(row);
                if let Some(width) = options.width {
                    record.text = fieldtree::truncate_to_width(&record.text, width).into_owned();
                }
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
            rows.len()
        }
    };
    info!(
        message = "fieldtree.cli.render",
        rows,
        format = ?cli.format,
        guides = ?options.guides
    );

    if let Some(path) = &cli.state {
        save_state(path, &store.save_state())?;
    }
    Ok(())
}

/// Accept keys with or without the leading `/`.
fn normalize_key(key: &str) -> String {
    FieldPath::parse_key(key).key()
}

fn load_state(path: &Path) -> Result<Option<ExpandPersistState>> {
    if !path.exists() {
        debug!(message = "fieldtree.cli.state.missing", path = %path.display());
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&text)?))
}

fn save_state(path: &Path, state: &ExpandPersistState) -> Result<()> {
    let mut text = serde_json::to_string_pretty(state)?;
    text.push('\n');
    fs::write(path, text)?;
    debug!(message = "fieldtree.cli.state.saved", path = %path.display());
    Ok(())
}
