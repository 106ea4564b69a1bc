//! Command-line interface for hookgen.
//!
//! Usage:
//!   hookgen                       - fetch the docs source, write to stdout
//!   hookgen DSTFILE               - fetch the docs source, write to DSTFILE
//!   hookgen SRCFILE DSTFILE       - read SRCFILE, write to DSTFILE
//!
//! A destination of `-` writes to stdout. Exit code is 0 on success and 1 on
//! any failure, usage errors included.

use std::fs;
use std::io::{self, Write};

use clap::{Arg, ArgAction, ArgMatches, Command};

use hookgen::fetch::{self, DEFAULT_URL};
use hookgen::{generate, Error};

fn main() {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // clap routes --help and --version through this path too; those
            // print to stdout and exit 0, real usage errors exit 1.
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn build_command() -> Command {
    Command::new("hookgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates the webhook event table from the GitHub Docs markdown source")
        .arg(
            Arg::new("paths")
                .value_names(["SRCFILE", "DSTFILE"])
                .num_args(0..=2)
                .help(
                    "Input markdown file and output destination. With a single path it is the \
                     destination and the source is fetched remotely; with none, output goes to \
                     stdout. A destination of '-' also means stdout",
                ),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .default_value(DEFAULT_URL)
                .help("Override the remote markdown source URL"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Trace each heading and table decision to stderr"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let paths: Vec<&str> = matches
        .get_many::<String>("paths")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();
    let url = matches.get_one::<String>("url").expect("url has a default");

    let source = match paths.as_slice() {
        &[srcfile, _] => fs::read_to_string(srcfile)
            .map_err(|err| Error::Io(format!("could not read {srcfile}: {err}")))?,
        _ => fetch::fetch(url)?,
    };

    let output = generate(&source, url)?;

    match paths.last() {
        None | Some(&"-") => {
            io::stdout()
                .write_all(output.as_bytes())
                .map_err(|err| Error::Io(format!("could not write output: {err}")))?;
            log::debug!("wrote output to stdout");
        }
        Some(&dstfile) => {
            fs::write(dstfile, &output)
                .map_err(|err| Error::Io(format!("could not write {dstfile}: {err}")))?;
            log::debug!("wrote output to {dstfile}");
        }
    }

    Ok(())
}
