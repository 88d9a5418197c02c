//! hostlookup entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tracing::debug;

use hostlookup::cli::args::{self, Args};
use hostlookup::constants;
use hostlookup::core::lookup::{self, LookupError};
use hostlookup::logger;
use hostlookup::resolver::SystemResolver;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    // Exits with status 2 on unknown flags or a wrong number of arguments.
    let args = Args::parse();
    logger::init(args.verbose)?;

    if args.help {
        eprint!("{}", args::help_text());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(query) = args.into_query() else {
        eprint!("{}", args::usage_text());
        return Ok(ExitCode::from(constants::EXIT_USAGE));
    };
    debug!(?query, version = constants::APP_VERSION, "starting");

    let resolver = SystemResolver::new();
    let mut stdout = io::stdout().lock();
    match lookup::run(&query, &resolver, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(LookupError::Resolve(e)) => {
            stdout.flush()?;
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
