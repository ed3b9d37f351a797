use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use permfix::{Error, ModeSet, RunOptions, run};

const EXIT_SUCCESS: u8 = 0;
const EXIT_NOT_FOUND: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// Recursively normalize directory and file permissions under a path
#[derive(Debug, Parser)]
#[command(name = "permfix", version)]
struct Cli {
    /// Path to fix
    path: PathBuf,

    /// Stop iterating over files and folders as soon as an error is
    /// encountered
    #[arg(short = 'f', long)]
    fail_early: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger();

    let options = RunOptions {
        fail_early: cli.fail_early,
    };
    match run(&cli.path, ModeSet::default(), options) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err @ Error::NotFound { .. }) => {
            error!("{err}");
            ExitCode::from(EXIT_NOT_FOUND)
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Install the stderr logger, prefixing every record with the invoking
/// program's name. Errors are always reported; `RUST_LOG` raises
/// verbosity.
fn init_logger() {
    let prog = program_name();
    env_logger::Builder::from_env(Env::default().default_filter_or("error"))
        .format(move |buf, record| writeln!(buf, "{prog}: {}", record.args()))
        .init();
}

/// Basename of argv[0], falling back to the compiled-in name.
fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
