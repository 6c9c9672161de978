use anyhow::{Context, Result};
use clap::Parser;

use std::{path::PathBuf, time::Instant};

use compute_sales::{
    compute_totals, format_and_save, load_sales, Catalogue, DEFAULT_CATALOGUE_PATH,
    DEFAULT_OUTPUT_PATH,
};

#[derive(Parser)]
#[command(version)]
/// Totals sales records against a product price catalogue.
///
/// The catalogue is derived from PRODUCT_LIST on the first run and cached,
/// so later runs use the cached catalogue as it stands.
struct Args {
    /// JSON file listing products, each with a `title` and `price`
    product_list: PathBuf,
    /// JSON files of sales records, each with a `Product` and `Quantity`
    #[arg(required = true)]
    sales_files: Vec<PathBuf>,
    #[arg(short, long, default_value = DEFAULT_CATALOGUE_PATH)]
    /// Where to cache the derived price catalogue
    catalogue: PathBuf,
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    /// Where to write the results
    output: PathBuf,
}

fn main() -> Result<()> {
    let start = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let catalogue = Catalogue::build_or_load(&args.product_list, &args.catalogue)
        .context("price catalogue could not be loaded")?;
    let sales = args
        .sales_files
        .iter()
        .map(|path| {
            load_sales(path)
                .with_context(|| format!("sales file {} could not be loaded", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    let totals = compute_totals(&catalogue, &sales);
    format_and_save(&totals, start.elapsed(), &args.output)?;
    Ok(())
}
