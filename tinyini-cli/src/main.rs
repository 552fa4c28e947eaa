use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use tinyini::Error;

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_SOURCE_ERROR: u8 = 2;
const EXIT_PARSE_ERROR: u8 = 3;

#[derive(Debug, Clone, ValueEnum)]
enum Verbosity {
    Warnings,
    Silent,
    Debug,
}

/// Simple cli tool to introspect .ini files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path of the .ini file
    #[arg(short, long)]
    path: PathBuf,

    /// Section name. Leave empty for the global section.
    #[arg(short, long)]
    section: Option<String>,

    /// Key name
    #[arg(short, long)]
    key: String,

    /// Silent mode
    #[arg(value_enum, default_value_t = Verbosity::Warnings)]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.verbosity {
        Verbosity::Silent => (),
        Verbosity::Warnings => LoggerBuilder::new().filter(None, LevelFilter::Warn).init(),
        Verbosity::Debug => LoggerBuilder::new().filter(None, LevelFilter::Debug).init(),
    }

    if args.path.extension().is_none_or(|extension| extension != "ini") {
        log::warn!("Specified file does not have an .ini extension!");
    }

    // Try to read the file regardless

    let document = match tinyini::parse_file(&args.path) {
        Ok(document) => document,
        Err(err @ Error::Source(_)) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_SOURCE_ERROR);
        }
        Err(err @ Error::Parse(_)) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_PARSE_ERROR);
        }
    };

    let found_section = match args.section {
        None => document.global_section(),
        Some(ref name) => document.section(name),
    };

    let Some(section) = found_section else {
        eprintln!("error: The given ini file did not contain the specified section");
        return ExitCode::from(EXIT_NOT_FOUND);
    };

    match section.get(&args.key) {
        Some(value) => print!("{value}"),
        None => {
            eprintln!("error: The given section did not contain the specified key");
            return ExitCode::from(EXIT_NOT_FOUND);
        }
    }

    ExitCode::SUCCESS
}
