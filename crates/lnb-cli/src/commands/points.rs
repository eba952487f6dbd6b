use std::error::Error;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use lnb_core::from_json;
use lnb_points::{coordinate_points, point_table};
use tracing::info;

#[derive(Args, Debug)]
pub struct PointsArgs {
    /// Result file written by `lnb parse`.
    #[arg(long)]
    pub result: PathBuf,
    /// Only emit this coordinate.
    #[arg(long)]
    pub coord: Option<usize>,
    /// Truncate an embedded point set to `2^level` points.
    #[arg(long)]
    pub level: Option<u32>,
    /// CSV file receiving the points.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &PointsArgs) -> Result<(), Box<dyn Error>> {
    let result = from_json(&fs::read_to_string(&args.result)?)?;
    let (header, rows): (Vec<String>, Vec<Vec<f64>>) = match args.coord {
        Some(coord) => (
            vec![format!("x{coord}")],
            coordinate_points(&result, coord, args.level)?
                .into_iter()
                .map(|point| vec![point])
                .collect(),
        ),
        None => (
            (0..result.dimension()).map(|coord| format!("x{coord}")).collect(),
            point_table(&result, args.level)?,
        ),
    };

    let mut csv = BufWriter::new(fs::File::create(&args.out)?);
    writeln!(csv, "index,{}", header.join(","))?;
    for (index, row) in rows.iter().enumerate() {
        let values = row.iter().map(f64::to_string).collect::<Vec<_>>();
        writeln!(csv, "{index},{}", values.join(","))?;
    }
    csv.flush()?;
    info!(points = rows.len(), out = %args.out.display(), "wrote points");
    Ok(())
}
