//! Line-oriented front end for designing pipe layouts on a 3×3 grid.
//!
//! Commands are read from standard input, or from a script file, one per
//! line. Run `help` inside the program for the command list.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- --echo --script demos/loop.txt
//! ```
//!
//! Raise the log level with `-v` (repeatable) or `RUST_LOG`:
//!
//! ```sh
//! RUST_LOG=pipefit_engine=trace cargo run
//! ```

use std::{
    fs::File,
    io::{self, BufReader, IsTerminal as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::LevelFilter;

use self::{
    error::AppError,
    session::{Session, Summary},
    settings::Settings,
};

mod command;
mod error;
mod render;
mod session;
mod settings;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Read commands from this file instead of standard input.
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print each command before its output.
    #[arg(long)]
    echo: bool,

    /// Do not print the grid after each change.
    #[arg(long)]
    no_auto_show: bool,

    /// Stop with a failure status at the first rejected command.
    #[arg(long)]
    strict: bool,

    /// Log more detail. Repeatable.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            echo: self.echo,
            auto_show: !self.no_auto_show,
            strict: self.strict,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(args: &Args) -> Result<Summary, AppError> {
    let mut session = Session::new(args.settings());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| AppError::OpenScript {
                path: path.clone(),
                source,
            })?;
            log::info!("running script {}", path.display());
            session.run(BufReader::new(file), &mut out, false)
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            if prompt {
                println!("pipefit: type `help` for commands, `quit` to leave");
            }
            session.run(stdin.lock(), &mut out, prompt)
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(summary) => {
            log::info!(
                "session finished: {} commands, {} rejected",
                summary.executed,
                summary.rejected
            );
            if summary.aborted {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("pipefit: {e}");
            ExitCode::FAILURE
        }
    }
}
