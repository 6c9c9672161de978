use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use std::{
    collections::HashMap,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{Result, SalesError},
    input::load_records,
    usd::Usd,
};

/// A product and its unit price.
///
/// When reading a product list, any fields other than `title` and `price` are
/// ignored, so writing a `Product` back out projects the entry down to those
/// two fields, in that order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Product {
    pub title: String,
    pub price: Usd,
}

/// Holds the price catalogue: the products that sales records are priced
/// against.
///
/// To derive a catalogue from a product list, caching it for later runs, use
/// [`Catalogue::build_or_load`].
///
/// To look up prices, use [`Catalogue::prices`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Returns the catalogue cached at `cache_path`, or derives it from the
    /// product list at `product_list_path` and caches it there.
    ///
    /// An existing cache is returned as it stands. It is not checked against
    /// the product list, which is not read at all in that case.
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// * The file to be read cannot be opened
    /// * It is not a JSON array of objects with `title` and `price` fields
    /// * It contains no products
    /// * The cache file cannot be written
    pub fn build_or_load(
        product_list_path: impl AsRef<Path>,
        cache_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let cache_path = cache_path.as_ref();
        if cache_path.exists() {
            return Ok(Self::from_products(load_records(cache_path)?));
        }
        let catalogue = Self::from_products(load_records(product_list_path)?);
        catalogue.save(cache_path)?;
        info!(
            "generated {} with {} products",
            cache_path.display(),
            catalogue.len()
        );
        Ok(catalogue)
    }

    /// Writes the catalogue to `path` as pretty-printed JSON, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns any errors from creating or writing the file. On error, any
    /// existing file at `path` is left as it was.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write_err = |source| SalesError::Write {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // Dropping `tmp` before `persist` deletes it, so a failed save never
        // leaves a partial catalogue at `path`.
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
            self.products
                .serialize(&mut ser)
                .map_err(|source| SalesError::Serialize {
                    path: path.to_path_buf(),
                    source,
                })?;
            writer.flush().map_err(write_err)?;
        }
        tmp.persist(path).map_err(|err| write_err(err.error))?;
        Ok(())
    }

    /// Returns a title-to-price lookup over the catalogue.
    ///
    /// If several products share a title, the last one wins.
    #[must_use]
    pub fn prices(&self) -> PriceTable<'_> {
        PriceTable(
            self.products
                .iter()
                .map(|p| (p.title.as_str(), p.price))
                .collect(),
        )
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Read-only title-to-price view, borrowed from a [`Catalogue`].
#[derive(Debug)]
pub struct PriceTable<'a>(HashMap<&'a str, Usd>);

impl PriceTable<'_> {
    /// Returns the unit price of `title`, if it is in the catalogue.
    ///
    /// Titles are case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use compute_sales::{Catalogue, Product, Usd};
    /// let catalogue = Catalogue::from_products(vec![Product {
    ///     title: "Widget".into(),
    ///     price: Usd::new(9.99),
    /// }]);
    /// let prices = catalogue.prices();
    /// assert_eq!(prices.price("Widget"), Some(Usd::new(9.99)));
    /// assert_eq!(prices.price("widget"), None);
    /// ```
    #[must_use]
    pub fn price(&self, title: &str) -> Option<Usd> {
        self.0.get(title).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
