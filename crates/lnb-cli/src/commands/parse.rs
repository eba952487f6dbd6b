use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Args;
use lnb_core::{canonical_result_hash, text_hash, to_json, SearchFamily, SearchResult};
use lnb_parse::parse_output;
use lnb_search::SearchConfig;
use serde_json::json;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Console transcript written by the executable.
    #[arg(long)]
    pub stdout: PathBuf,
    /// Generating-matrix side file; defaults to the configuration's side file.
    #[arg(long)]
    pub side_file: Option<PathBuf>,
    /// Search family of the transcript.
    #[arg(long, required_unless_present = "config")]
    pub family: Option<SearchFamily>,
    /// Search configuration that produced the transcript.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for result artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

/// Side file named on the command line; it must be readable.
fn read_explicit_side_file(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|err| format!("cannot read side file {}: {err}", path.display()).into())
}

/// Side file taken from the search configuration; only a missing file reads
/// as absent.
fn read_configured_side_file(path: &Path) -> Result<Option<String>, Box<dyn Error>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "configured side file not found, continuing without matrices");
            Ok(None)
        }
        Err(err) => Err(format!("cannot read side file {}: {err}", path.display()).into()),
    }
}

fn summary(result: &SearchResult) -> String {
    let generator = result
        .latnet
        .gen
        .as_ref()
        .map(|gen| format!("[{gen}]"))
        .unwrap_or_else(|| "None".to_string());
    format!(
        "Result:\nLattice Size: {}\nGenerating Vector: {}\nMerit value: {}\nCPU Time: {} s",
        result.latnet.size, generator, result.merit, result.seconds
    )
}

pub fn run(args: &ParseArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.as_deref().map(SearchConfig::load).transpose()?;
    let family = match (args.family, &config) {
        (Some(family), _) => family,
        (None, Some(config)) => config.family(),
        (None, None) => return Err("--family is required unless --config is set".into()),
    };
    let console = fs::read_to_string(&args.stdout)?;
    let (side_path, side_file) = match (&args.side_file, &config) {
        _ if !family.reads_side_file() => (None, None),
        (Some(path), _) => (Some(path.clone()), Some(read_explicit_side_file(path)?)),
        (None, Some(config)) => (
            Some(config.side_file.clone()),
            read_configured_side_file(&config.side_file)?,
        ),
        (None, None) => (None, None),
    };

    let result = parse_output(&console, side_file.as_deref(), family)
        .map_err(|err| format!("output could not be interpreted: {err}"))?;

    fs::create_dir_all(&args.out)?;
    fs::write(args.out.join("result.json"), to_json(&result)?)?;
    let index = json!({
        "family": family.as_str(),
        "result_hash": canonical_result_hash(&result)?,
        "inputs": {
            "stdout": {
                "path": args.stdout.display().to_string(),
                "sha256": text_hash(&console),
            },
            "side_file": side_file.as_deref().map(|text| json!({
                "path": side_path.as_ref().map(|path| path.display().to_string()),
                "sha256": text_hash(text),
            })),
        },
    });
    fs::write(
        args.out.join("index.json"),
        serde_json::to_string_pretty(&index)?,
    )?;
    info!(out = %args.out.display(), "wrote result");

    println!("{}", summary(&result));
    Ok(())
}
