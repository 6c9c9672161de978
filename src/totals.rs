use log::warn;

use std::fmt::Display;

use crate::{catalogue::Catalogue, sales::SaleRecord, usd::Usd};

pub const COMBINED_LABEL: &str = "Total Combined Sales";

/// A sale that contributed nothing to its file's total, because its product
/// isn't in the catalogue (or it names no product at all).
#[derive(Clone, Debug, PartialEq)]
pub struct Unmatched {
    /// 1-based index of the sales file the record came from.
    pub file: usize,
    pub product: Option<String>,
}

impl Display for Unmatched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.product {
            Some(product) => write!(
                f,
                "sales file {}: product {product:?} not found in catalogue",
                self.file
            ),
            None => write!(f, "sales file {}: sale record names no product", self.file),
        }
    }
}

/// Holds sales totals, one per sales file plus the combined total.
///
/// Iterate with [`Totals::entries`] to get labelled totals in report order:
/// `Sales File 1`, `Sales File 2`, ... then `Total Combined Sales`.
#[derive(Debug, Default, PartialEq)]
pub struct Totals {
    per_file: Vec<Usd>,
    combined: Usd,
    unmatched: Vec<Unmatched>,
}

impl Totals {
    #[must_use]
    pub fn per_file(&self) -> &[Usd] {
        &self.per_file
    }

    #[must_use]
    pub fn combined(&self) -> Usd {
        self.combined
    }

    /// Returns the sales that didn't match any catalogue product, in the
    /// order they were encountered.
    #[must_use]
    pub fn unmatched(&self) -> &[Unmatched] {
        &self.unmatched
    }

    /// Returns each label and its total, per-file totals first, in file
    /// order, then the combined total.
    pub fn entries(&self) -> impl Iterator<Item = (String, Usd)> + '_ {
        self.per_file
            .iter()
            .enumerate()
            .map(|(idx, total)| (file_label(idx + 1), *total))
            .chain(std::iter::once((COMBINED_LABEL.to_string(), self.combined)))
    }

    /// Returns the total for `label`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use compute_sales::{compute_totals, Catalogue, Product, SaleRecord, Usd};
    /// let catalogue = Catalogue::from_products(vec![Product {
    ///     title: "Widget".into(),
    ///     price: Usd::new(2.5),
    /// }]);
    /// let totals = compute_totals(&catalogue, &[vec![SaleRecord::new("Widget", 4.0)]]);
    /// assert_eq!(totals.get("Sales File 1"), Some(Usd::new(10.0)));
    /// assert_eq!(totals.get("Sales File 2"), None);
    /// ```
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Usd> {
        self.entries()
            .find(|(l, _)| l == label)
            .map(|(_, total)| total)
    }

    /// Returns the number of entries, including the combined total.
    #[must_use]
    pub fn len(&self) -> usize {
        self.per_file.len() + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn file_label(n: usize) -> String {
    format!("Sales File {n}")
}

/// Totals each collection of sales records against `catalogue`, and all of
/// them combined.
///
/// A record naming a product the catalogue doesn't have adds nothing to its
/// file's total. It is logged as a warning and listed in
/// [`Totals::unmatched`]; it never causes an error.
#[must_use]
pub fn compute_totals(catalogue: &Catalogue, sales: &[Vec<SaleRecord>]) -> Totals {
    let prices = catalogue.prices();
    let mut totals = Totals::default();
    for (idx, records) in sales.iter().enumerate() {
        let mut file_total = Usd::default();
        for record in records {
            match record.product.as_deref().and_then(|p| prices.price(p)) {
                Some(price) => file_total += price * record.quantity,
                None => {
                    let unmatched = Unmatched {
                        file: idx + 1,
                        product: record.product.clone(),
                    };
                    warn!("{unmatched}");
                    totals.unmatched.push(unmatched);
                }
            }
        }
        totals.per_file.push(file_total);
        totals.combined += file_total;
    }
    totals
}
