use twrap::commands;
use twrap::config::{load_config, CliArgs};

use anyhow::{bail, Result};
use clap::Parser;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    init_logging(args.verbose)?;

    // Load configuration
    let conf = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", conf);
        return Ok(());
    }

    let Some(ref command) = args.command else {
        bail!("no command given, see --help");
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    commands::execute_command(&conf, command, &mut out)?;
    out.flush()?;

    Ok(())
}

// Diagnostics go to stderr so they never mix with the wrapped output
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    WriteLogger::init(level, LogConfig::default(), io::stderr())?;
    Ok(())
}
