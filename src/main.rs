use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use jsonsift::config::Config;
use jsonsift::file::loader::{load_json_file, load_json_from_stdin, load_json_str};
use jsonsift::file::saver::{write_results_to_file, write_results_to_stdout};
use jsonsift::query::{QueryEngine, QueryOptions, QueryRequest};

/// jsonsift - filter JSON with slash-delimited path expressions
///
/// Pretty-prints JSON by default. If a file is given it is read for JSON
/// data; otherwise stdin is read instead.
#[derive(Parser)]
#[command(name = "jsonsift")]
#[command(version)]
#[command(about = "Extract, exclude and existence-check JSON values by path", long_about = None)]
struct Cli {
    /// JSON file to read (omit to read from stdin)
    #[arg(conflicts_with = "json")]
    file: Option<String>,

    /// Parse JSON from this argument instead of a file or stdin
    #[arg(short, long)]
    json: Option<String>,

    /// Extract one or more values matching PATH (may be repeated)
    #[arg(short = 'x', long = "extract", value_name = "PATH")]
    extract: Vec<String>,

    /// Trim out data matching PATH (may be repeated)
    #[arg(short = 'X', long = "exclude", value_name = "PATH")]
    exclude: Vec<String>,

    /// Exit non-zero unless PATH exists (may be repeated; does not affect output)
    #[arg(short = 'e', long = "exists", value_name = "PATH")]
    exists: Vec<String>,

    /// Convert output to name=value pairs for easy variable assignment
    #[arg(short, long)]
    pairs: bool,

    /// Quietly ignore paths that cannot be extracted or followed
    #[arg(short, long)]
    quiet: bool,

    /// Skip JSON serialization of output values (strings print bare)
    #[arg(short, long)]
    raw: bool,

    /// Do not sort object keys
    #[arg(short = 'S', long = "no-sort")]
    no_sort: bool,

    /// Field separator for paths
    #[arg(short = 'F', long = "fs", value_name = "CHAR")]
    separator: Option<char>,

    /// Indent JSON output with this many spaces (0 disables pretty-printing)
    #[arg(short, long, value_name = "N")]
    indent: Option<usize>,

    /// Write results to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Append to the output file instead of truncating it
    #[arg(long, requires = "output")]
    append: bool,

    /// Display debugging information on stderr
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug {
        EnvFilter::new("jsonsift=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load();
    let options = QueryOptions {
        indent: cli.indent.unwrap_or(config.indent),
        pairs: cli.pairs,
        sort_keys: if cli.no_sort { false } else { config.sort_keys },
        quiet: cli.quiet || config.quiet,
        separator: cli.separator.unwrap_or(config.separator),
        raw: cli.raw,
    };

    let mut doc = if let Some(text) = &cli.json {
        load_json_str(text)?
    } else if let Some(path) = &cli.file {
        load_json_file(path)?
    } else if !std::io::stdin().is_terminal() {
        load_json_from_stdin()?
    } else {
        anyhow::bail!("No JSON given to parse");
    };

    let request = QueryRequest {
        extract: cli.extract,
        exclude: cli.exclude,
        exists: cli.exists,
    };
    let engine = QueryEngine::new(options);
    let outcome = engine.run(&mut doc, &request)?;

    let lines: Vec<String> = outcome
        .results
        .iter()
        .map(|result| result.to_display_string(engine.options()))
        .collect();
    match &cli.output {
        Some(path) => write_results_to_file(path, &lines, cli.append)?,
        None => write_results_to_stdout(&lines)?,
    }

    if !outcome.all_exist {
        std::process::exit(1);
    }
    Ok(())
}
