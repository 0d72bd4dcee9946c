//! Unjumble - CLI
//!
//! Prints every dictionary word that can be spelled from the given letters.
//! Exit codes: 0 success, 1 usage, 2 dictionary or I/O, 3 too few letters,
//! 4 non-alphabetic letters, 10 no matches.

use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser, error::ErrorKind};
use env_logger::Builder;
use log::{LevelFilter, debug};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use unjumble::{
    UnjumbleError,
    commands::{UnjumbleConfig, UnjumbleOutcome, unjumble_file},
    core::{Jumble, RequiredLetter},
    error::{IO_FAILURE_EXIT, NO_MATCHES_EXIT},
    output::{formatters::PROGRAM, print_error, write_lines},
    pipeline::SortRequest,
    wordlists::DEFAULT_DICTIONARY,
};

#[derive(Parser)]
#[command(
    name = "unjumble",
    about = "Find every dictionary word that can be spelled from a jumble of letters",
    version,
    author,
    group(ArgGroup::new("sort").args(["alpha", "len", "longest"]))
)]
struct Cli {
    /// Sort matches alphabetically (case-insensitive)
    #[arg(long)]
    alpha: bool,

    /// Sort matches longest first, ties alphabetically
    #[arg(long)]
    len: bool,

    /// Print only the longest matches, ties alphabetically
    #[arg(long)]
    longest: bool,

    /// Only print words containing this letter
    #[arg(long, value_name = "LETTER")]
    include: Option<String>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Letters to unjumble (at least three)
    letters: String,

    /// Word list, one word per line
    dictionary: Option<PathBuf>,
}

impl Cli {
    const fn sort_request(&self) -> Option<SortRequest> {
        if self.alpha {
            Some(SortRequest::Alphabetical)
        } else if self.len {
            Some(SortRequest::ByLength)
        } else if self.longest {
            Some(SortRequest::Longest)
        } else {
            None
        }
    }
}

/// Accept the historical single-dash spellings (`-alpha`, `-include`, ...)
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag @ ("-alpha" | "-len" | "-longest" | "-include")) => {
                OsString::from(format!("-{flag}"))
            }
            _ => arg,
        })
        .collect()
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Validate arguments in the order the tool has always reported them:
/// include letter, then jumble length, then jumble characters.
fn build_config(cli: &Cli) -> Result<UnjumbleConfig, UnjumbleError> {
    let include = cli
        .include
        .as_deref()
        .map(RequiredLetter::new)
        .transpose()?;
    let jumble = Jumble::new(cli.letters.as_str())?;

    let mut config = UnjumbleConfig::new(jumble);
    config.sort = cli.sort_request();
    config.include = include;
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = build_config(&cli)?;
    let dictionary = cli
        .dictionary
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY));
    debug!(
        "jumble '{}', sort {:?}, include {:?}, dictionary {}",
        config.jumble,
        config.sort.map(SortRequest::name),
        config.include.map(RequiredLetter::letter),
        dictionary.display()
    );

    match unjumble_file(&config, &dictionary)? {
        UnjumbleOutcome::NoMatches => Ok(ExitCode::from(NO_MATCHES_EXIT)),
        UnjumbleOutcome::Found(result) => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_lines(&mut out, &result.lines)?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Exit code for a failed run; errors outside `UnjumbleError` are I/O failures
fn failure_exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<UnjumbleError>()
        .map_or(IO_FAILURE_EXIT, UnjumbleError::exit_code)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            print_error(&UnjumbleError::Usage);
            return ExitCode::from(UnjumbleError::Usage.exit_code());
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            if let Some(e) = err.downcast_ref::<UnjumbleError>() {
                print_error(e);
            } else {
                eprintln!("{PROGRAM}: {err:#}");
            }
            ExitCode::from(failure_exit_code(&err))
        }
    }
}
