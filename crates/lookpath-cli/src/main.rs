#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod logging;

use clap::Parser;
use lookpath_core::{which, RealEnvironment, VERSION};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::debug;

/// Exit code when one or more commands were not found.
const EXIT_NOT_FOUND: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "lookpath")]
#[command(author, about = "Locate executables on the search path", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Command names to resolve, in order
    #[arg(required = true, value_name = "COMMAND")]
    commands: Vec<String>,

    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long)]
    json: bool,
}

/// Per-command result for JSON output.
#[derive(Serialize)]
struct Lookup {
    command: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json);

    let env = RealEnvironment;
    let mut lookups = Vec::with_capacity(cli.commands.len());

    for command in &cli.commands {
        let path = which(command, &env).await.into_diagnostic()?;
        debug!(command = %command, resolved = ?path, "lookup finished");
        lookups.push(Lookup {
            command: command.clone(),
            found: path.is_some(),
            path,
        });
    }

    let all_found = lookups.iter().all(|l| l.found);

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&lookups).into_diagnostic()?
        );
    } else {
        for lookup in &lookups {
            match &lookup.path {
                Some(path) => println!("{path}"),
                None => eprintln!("error: command '{}' not found", lookup.command),
            }
        }
    }

    if !all_found {
        std::process::exit(EXIT_NOT_FOUND);
    }

    Ok(())
}
