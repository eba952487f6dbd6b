use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use lnb_parse::latest_progress;

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Console transcript of a running search.
    #[arg(long)]
    pub stdout: PathBuf,
}

pub fn run(args: &ProgressArgs) -> Result<(), Box<dyn Error>> {
    let transcript = fs::read_to_string(&args.stdout)?;
    let progress = latest_progress(&transcript)?;
    println!(
        "dimensions: {:.1}% nets: {:.1}%",
        progress.dimension * 100.0,
        progress.nets * 100.0
    );
    Ok(())
}
