use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use portfolio_cli::cli::Shell;
use portfolio_cli::config::{logging, ConfigPaths, Settings};

#[derive(Parser)]
#[command(
    name = "portfolio",
    version,
    about = "Terminal bookkeeping for new-build and renovation property projects",
    long_about = "Interactive portfolio manager. Create projects, record sales and \
                  purchases, load reports exported by the bookkeeping software and \
                  view totals including the expected VAT refund on new builds. \
                  Nothing is saved between runs."
)]
struct Cli {
    /// Load a report file before the menu starts
    #[arg(short, long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ConfigPaths::resolve(cli.config_dir)?;
    let settings = Settings::load_or_default(&paths)?;
    logging::init(cli.verbose, settings.log_filter.as_deref());
    tracing::debug!(config = %paths.settings_file().display(), "settings loaded");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), settings);

    if let Some(path) = cli.import {
        if let Err(e) = shell.load_report(&path) {
            println!("{}", e);
        }
        println!();
    }

    shell.run()?;

    Ok(())
}
