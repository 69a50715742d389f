use anyhow::{Context, Result};
use clap::Parser;
use graph::{parse_log, render, GitWalker, History, OrderPolicy};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "gitgraph")]
#[command(about = "Draw a repository's commit history as an ASCII graph", long_about = None)]
struct Args {
    /// Path to the Git repository
    #[arg(default_value = ".")]
    path: PathBuf,
    /// Number of commits to show, newest first
    #[arg(short = 'n', long)]
    limit: Option<usize>,
    /// Maximum line width
    #[arg(short, long)]
    width: Option<usize>,
    /// Show commit IDs only
    #[arg(long)]
    no_messages: bool,
    /// Fail on commits listed before their parents instead of reordering
    #[arg(long)]
    strict: bool,
    /// Read `%h|%p|%s` log text instead of the repository ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
    /// Configuration file [default: <PATH>/.gitgraph.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print history statistics to stderr
    #[arg(long)]
    stats: bool,
    /// More logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::load(args.config.as_deref(), &args.path)?;
    if args.limit.is_some() {
        config.limit = args.limit;
    }
    if let Some(width) = args.width {
        config.render.max_width = width;
    }
    if args.no_messages {
        config.render.show_messages = false;
    }
    if args.strict {
        config.render.order = OrderPolicy::Strict;
    }

    let history = match &args.log_file {
        Some(file) => load_log(file, config.limit)?,
        None => GitWalker::new(Some(args.path.as_path()))?
            .with_abbrev(config.abbrev)
            .into_history(config.limit)?,
    };

    if args.stats {
        let stats = history.stats();
        eprintln!("Commits: {}", stats.total_commits);
        eprintln!("Merges:  {}", stats.merge_commits);
        eprintln!("Roots:   {}", stats.root_commits);
        eprintln!("Tips:    {}", stats.tip_commits);
    }

    let lines = render(&history, &config.render)?;
    info!(commits = history.len(), lines = lines.len(), "graph rendered");

    let mut out = io::stdout().lock();
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn load_log(file: &Path, limit: Option<usize>) -> Result<History> {
    let text = if file == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read log from stdin")?;
        text
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let mut nodes = parse_log(&text)?;
    if let Some(limit) = limit {
        nodes.truncate(limit);
    }
    Ok(History::from_newest_first(nodes)?)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
