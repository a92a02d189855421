//! `wordcount {--count | --topcount} file`
//!
//! Prints every word of a file with its count, alphabetically (`--count`) or
//! as the twenty most frequent words (`--topcount`).

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use wordcount_core::{print_top, print_words};

const USAGE: &str = "usage: wordcount {--count | --topcount} file";

#[derive(Parser, Debug)]
#[command(name = "wordcount", disable_help_flag = true)]
struct Args {
    /// Report mode followed by the text file to count
    #[arg(num_args = 0..)]
    args: Vec<OsString>,
}

impl Args {
    /// Parse the raw command line with every argument taken as a value.
    ///
    /// The leading `--` ends clap's option handling, so `-h`, `--help` and a
    /// user-supplied `--` reach the dispatcher unchanged.
    fn from_raw(raw: impl IntoIterator<Item = OsString>) -> Result<Self, clap::Error> {
        let argv = ["wordcount", "--"].into_iter().map(OsString::from);
        Self::try_parse_from(argv.chain(raw))
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::from_raw(env::args_os().skip(1)) {
        Ok(args) => args.args,
        Err(err) => {
            debug!("argument error: {:?}", err.kind());
            Vec::new()
        }
    };

    let [option, filename] = args.as_slice() else {
        debug!("expected 2 arguments, got {}", args.len());
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    match run(&option.to_string_lossy(), Path::new(filename)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(option: &str, filename: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match option {
        "--count" => print_words(filename, &mut out)
            .with_context(|| format!("counting words in {}", filename.display()))?,
        "--topcount" => print_top(filename, &mut out)
            .with_context(|| format!("ranking words in {}", filename.display()))?,
        other => {
            writeln!(out, "unknown option: {other}")?;
        }
    }
    Ok(())
}
