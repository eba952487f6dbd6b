use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    command::{self, CommandArgs},
    parse::{self, ParseArgs},
    points::{self, PointsArgs},
    progress::{self, ProgressArgs},
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "lnb", version, about = "Interpret LatNet Builder search output")]
struct Cli {
    /// Emit debug logs on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret a finished search transcript and write the result.
    Parse(ParseArgs),
    /// Reconstruct points from a result file.
    Points(PointsArgs),
    /// Print the command line of a search configuration.
    Command(CommandArgs),
    /// Report the progress of a running search.
    Progress(ProgressArgs),
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    match cli.command {
        Command::Parse(args) => parse::run(&args),
        Command::Points(args) => points::run(&args),
        Command::Command(args) => command::run(&args),
        Command::Progress(args) => progress::run(&args),
    }
}
