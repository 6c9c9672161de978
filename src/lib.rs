#![doc = include_str!("../README.md")]

mod catalogue;
mod error;
mod input;
mod report;
mod sales;
mod totals;
mod usd;

pub use catalogue::{Catalogue, PriceTable, Product};
pub use error::{Result, SalesError};
pub use input::load_records;
pub use report::{format_and_save, Report};
pub use sales::{load_sales, SaleRecord};
pub use totals::{compute_totals, Totals, Unmatched, COMBINED_LABEL};
pub use usd::Usd;

/// Where the derived price catalogue is cached, unless told otherwise.
pub const DEFAULT_CATALOGUE_PATH: &str = "priceCatalogue.json";

/// Where the results report is written, unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "SalesResults.txt";
