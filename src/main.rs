//! Subset CLI - print K random lines of the input

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal};

use anyhow::Context;
use clap::Parser;
use subset::cli::Args;
use subset::{subset_with, FilterOptions, OutputFormat, SeededRandom, ThreadRandom};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = FilterOptions {
        count: args.count,
        format: if args.json { OutputFormat::Json } else { OutputFormat::Human },
    };

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let output = BufWriter::new(io::stdout().lock());

    let result = match args.seed {
        Some(seed) => {
            debug!(seed, "using seeded generator");
            subset_with(&options, SeededRandom::new(seed), input, output)
        }
        None => subset_with(&options, ThreadRandom, input, output),
    };
    let report = match result {
        Ok(report) => report,
        // downstream closed the pipe; stop quietly like any Unix filter
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed early");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    debug!(
        lines_read = report.lines_read,
        lines_written = report.lines_written,
        "done"
    );
    Ok(())
}
