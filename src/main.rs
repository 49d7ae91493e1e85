use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgrepo::RepositoryBuilder;

/// Build a static PyPI simple index from a directory of wheels
#[derive(Parser, Debug)]
#[command(name = "pkgrepo", version, about)]
struct Cli {
    /// Directory searched recursively for .whl files
    wheel_dir: PathBuf,

    /// Output directory; the index is written to OUTPUT_DIR/simple
    output_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match RepositoryBuilder::new(cli.wheel_dir, &cli.output_dir).build() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
