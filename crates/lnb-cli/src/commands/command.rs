use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lnb_search::{command_line, SearchConfig};

#[derive(Args, Debug)]
pub struct CommandArgs {
    /// YAML search configuration.
    #[arg(long)]
    pub config: PathBuf,
    /// Print the arguments as a JSON array instead of a shell line.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &CommandArgs) -> Result<(), Box<dyn Error>> {
    let config = SearchConfig::load(&args.config)?;
    let command = command_line(&config);
    if args.json {
        println!("{}", serde_json::to_string(&command)?);
    } else {
        println!("{}", command.join(" "));
    }
    Ok(())
}
