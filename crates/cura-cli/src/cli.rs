use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cura_transform::KeyCase;
use cura_types::FieldKind;

#[derive(Parser)]
#[command(
    name = "cura",
    about = "Ordering, option-list, and payload utilities for form-building admin screens",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./cura.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reorder a token list by a desired order
    Reorder(ReorderArgs),
    /// Union two option lists by value; the second list wins
    Union(UnionArgs),
    /// Drop empty entries and repeated values from an option list
    Dedupe(DedupeArgs),
    /// Convert every object key of a document to camelCase or snake_case
    Keys(KeysArgs),
    /// Rank the most frequent entries of a list
    Top(TopArgs),
    /// Edit a form's field list
    Fields(FieldsArgs),
    /// Parse JSON, printing a fallback if the input is malformed
    Parse(ParseArgs),
}

#[derive(Args)]
pub struct ReorderArgs {
    #[arg(long, value_delimiter = ',', required = true)]
    pub list: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<String>,
    /// Overrides the configured placeholder token
    #[arg(long)]
    pub placeholder: Option<String>,
}

#[derive(Args)]
pub struct UnionArgs {
    pub first: PathBuf,
    pub second: PathBuf,
}

#[derive(Args)]
pub struct DedupeArgs {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct KeysArgs {
    pub input: PathBuf,
    #[arg(long)]
    pub case: Option<KeyCase>,
}

#[derive(Args)]
pub struct TopArgs {
    pub input: PathBuf,
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct FieldsArgs {
    pub input: PathBuf,
    /// Saved id order to reconcile against
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<String>,
    /// Drag a field, as FROM:TO positions
    #[arg(long = "move", value_parser = parse_move)]
    pub moves: Vec<(usize, usize)>,
    /// Drop a new field of this kind from the palette
    #[arg(long)]
    pub drop: Option<FieldKind>,
    /// Position for --drop (appends when omitted)
    #[arg(long, requires = "drop")]
    pub at: Option<usize>,
    #[arg(long)]
    pub remove: Vec<String>,
}

#[derive(Args)]
pub struct ParseArgs {
    pub input: PathBuf,
    #[arg(long, default_value = "null")]
    pub fallback: String,
}

fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got {s:?}"))?;
    let from = from.trim().parse().map_err(|e| format!("bad FROM in {s:?}: {e}"))?;
    let to = to.trim().parse().map_err(|e| format!("bad TO in {s:?}: {e}"))?;
    Ok((from, to))
}
