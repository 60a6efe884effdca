use anyhow::Context;
use colored::Colorize;
use cura_fields::FieldList;
use cura_merge::{dedupe_values, reorder_with_placeholder, union_values};
use cura_transform::{convert_keys, safe_parse_or, top_n_by};
use serde_json::{json, Value};
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;
use crate::input::{read_json, read_text};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");
    let format = cli.format;

    match cli.command {
        Command::Reorder(args) => emit(format, &cmd_reorder(args, &config), print_tokens),
        Command::Union(args) => emit(format, &cmd_union(args)?, print_options),
        Command::Dedupe(args) => emit(format, &cmd_dedupe(args)?, print_options),
        Command::Keys(args) => emit(format, &cmd_keys(args, &config)?, print_document),
        Command::Top(args) => emit(format, &cmd_top(args, &config)?, print_ranking),
        Command::Fields(args) => emit(format, &cmd_fields(args, &config)?, print_fields),
        Command::Parse(args) => emit(format, &cmd_parse(args)?, print_document),
    }
}

fn emit(format: OutputFormat, value: &Value, text: fn(&Value)) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

fn cmd_reorder(args: ReorderArgs, config: &CliConfig) -> Value {
    let placeholder = args.placeholder.as_deref().unwrap_or(&config.placeholder);
    json!(reorder_with_placeholder(&args.list, &args.order, placeholder))
}

fn cmd_union(args: UnionArgs) -> anyhow::Result<Value> {
    let first = read_json(&args.first)?;
    let second = read_json(&args.second)?;
    Ok(Value::Array(union_values(&first, &second)))
}

fn cmd_dedupe(args: DedupeArgs) -> anyhow::Result<Value> {
    Ok(Value::Array(dedupe_values(&read_json(&args.input)?)))
}

fn cmd_keys(args: KeysArgs, config: &CliConfig) -> anyhow::Result<Value> {
    let doc = read_json(&args.input)?;
    Ok(convert_keys(&doc, args.case.unwrap_or(config.key_case)))
}

fn cmd_top(args: TopArgs, config: &CliConfig) -> anyhow::Result<Value> {
    let doc = read_json(&args.input)?;
    let items = doc
        .as_array()
        .with_context(|| format!("{} must contain a JSON array", args.input.display()))?;
    let n = args.limit.unwrap_or(config.top_n);
    let ranked = top_n_by(items, n, |item| match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });
    Ok(Value::Array(
        ranked
            .into_iter()
            .map(|(entry, count)| json!({ "entry": entry, "count": count }))
            .collect(),
    ))
}

/// Edits apply in a fixed sequence: saved order, removals, palette drop, drags.
fn cmd_fields(args: FieldsArgs, config: &CliConfig) -> anyhow::Result<Value> {
    let doc = read_json(&args.input)?;
    let mut list: FieldList = serde_json::from_value(doc)
        .with_context(|| format!("{} is not a valid field list", args.input.display()))?;

    if !args.order.is_empty() {
        list.apply_order_with_placeholder(&args.order, &config.placeholder);
    }
    for id in &args.remove {
        list.remove(id)?;
    }
    if let Some(kind) = args.drop {
        let id = list.drop_new(kind, args.at.unwrap_or(usize::MAX));
        debug!(%id, "dropped new field");
    }
    for (from, to) in args.moves {
        list.move_field(from, to)?;
    }
    Ok(serde_json::to_value(&list)?)
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<Value> {
    let text = read_text(&args.input)?;
    let fallback = safe_parse_or(&args.fallback, Value::String(args.fallback.clone()));
    Ok(safe_parse_or(&text, fallback))
}

fn print_tokens(value: &Value) {
    let tokens: Vec<String> = value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|t| t.as_str().unwrap_or_default().yellow().to_string())
                .collect()
        })
        .unwrap_or_default();
    println!("{}", tokens.join(" "));
}

fn print_options(value: &Value) {
    let entries = value.as_array().map(Vec::as_slice).unwrap_or_default();
    if entries.is_empty() {
        println!("{}", "No options.".dimmed());
        return;
    }
    for entry in entries {
        let v = entry["value"].as_str().unwrap_or_default();
        let label = entry["label"].as_str().unwrap_or_default();
        println!("  {:<16} {}", v.yellow().bold(), label);
    }
}

fn print_document(value: &Value) {
    println!("{value:#}");
}

fn print_ranking(value: &Value) {
    for row in value.as_array().map(Vec::as_slice).unwrap_or_default() {
        let entry = row["entry"].as_str().unwrap_or_default();
        println!("  {:>5}  {}", row["count"].to_string().bold(), entry);
    }
}

fn print_fields(value: &Value) {
    for (i, field) in value.as_array().map(Vec::as_slice).unwrap_or_default().iter().enumerate() {
        let label = field["label"].as_str().unwrap_or_default();
        let kind = field["kind"].as_str().unwrap_or_default();
        let id = field["id"].as_str().unwrap_or_default();
        let required = if field["required"].as_bool().unwrap_or(false) { "*".red().to_string() } else { String::new() };
        println!("  {}. {}{} [{}] {}", i + 1, label.bold(), required, kind.cyan(), id.dimmed());
    }
}
