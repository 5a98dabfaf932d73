use anyhow::{Context, Result};
use clap::Parser;
use git_quads::config::Config;
use git_quads::git::{import, ImportStats};
use git_quads::sink::{NQuadsWriter, QuadWriter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

/// Export git commit history as N-Quads for graph databases
#[derive(Parser, Debug)]
#[command(name = "git-quads", version, long_version = LONG_VERSION)]
struct Cli {
    /// Path to the repository (or any path inside it)
    repo: Option<PathBuf>,

    /// Write N-Quads to this file instead of stdout
    #[arg(short, long, env = "GIT_QUADS_OUTPUT")]
    output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print import stats as JSON (on stderr, keeping stdout clean for quads)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(repo) = cli.repo {
        config.source.path = repo;
    }
    if let Some(output) = cli.output {
        config.sink.output = Some(output);
    }

    let stats = match &config.sink.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            run(file, &config.source.path)?
        }
        None => run(std::io::stdout().lock(), &config.source.path)?,
    };

    if cli.json {
        eprintln!("{}", serde_json::to_string(&stats)?);
    } else {
        eprintln!("imported {} commits ({} quads)", stats.commits, stats.quads);
    }
    Ok(())
}

fn run<W: Write>(out: W, repo: &Path) -> Result<ImportStats> {
    let mut sink = NQuadsWriter::new(out);
    let stats = import(&mut sink, repo)?;
    sink.flush()?;
    Ok(stats)
}
