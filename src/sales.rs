use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

use std::path::Path;

use crate::{error::Result, input::load_records};

/// Defines the JSON format for sales data.
///
/// A record whose `Product` is missing or isn't a string still loads, with
/// `product` set to `None`, and is later reported as unrecognized. A missing
/// `Quantity` counts as zero.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SaleRecord {
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "Product", default)]
    pub product: Option<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: f64,
}

impl SaleRecord {
    #[must_use]
    pub fn new(product: &str, quantity: f64) -> Self {
        Self {
            product: Some(product.to_string()),
            quantity,
        }
    }
}

/// Reads the sales records in the JSON file at `path`.
///
/// # Errors
///
/// Returns any errors from opening or parsing the file, or if it holds no
/// records.
pub fn load_sales(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>> {
    load_records(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::SalesError;

    #[test]
    fn load_sales_fn_correctly_parses_sales_data() {
        let sales = load_sales("testdata/sales1.json").unwrap();
        assert_eq!(
            sales,
            vec![SaleRecord::new("Widget", 3.0), SaleRecord::new("Gizmo", 2.0)]
        );
    }

    #[test]
    fn load_sales_fn_tolerates_odd_records() {
        let sales = load_sales("testdata/sales.odd.json").unwrap();
        assert_eq!(
            sales,
            vec![
                SaleRecord::new("Widget", 0.0),
                SaleRecord {
                    product: None,
                    quantity: 4.0
                },
                SaleRecord {
                    product: None,
                    quantity: 1.0
                },
                SaleRecord::new("Sprocket", -1.5),
            ]
        );
    }

    #[test]
    fn load_sales_fn_returns_error_for_empty_file() {
        let err = load_sales("testdata/empty.json").unwrap_err();
        assert!(matches!(err, SalesError::Empty { .. }), "{err}");
    }
}
