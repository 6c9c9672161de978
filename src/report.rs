use std::{fmt::Display, fs, path::Path, time::Duration};

use crate::{
    error::{Result, SalesError},
    totals::Totals,
};

/// Holds finished sales totals and how long the run took to produce them.
///
/// To get a printable version of the report, use its [`Display`]
/// implementation. To write it to a file, use [`Report::save`].
#[derive(Debug)]
pub struct Report<'a> {
    totals: &'a Totals,
    elapsed: Duration,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(totals: &'a Totals, elapsed: Duration) -> Self {
        Self { totals, elapsed }
    }

    /// Writes the report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns any errors from writing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| SalesError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, total) in self.totals.entries() {
            writeln!(f, "{label}: {total}")?;
        }
        write!(f, "Execution Time: {:.4} seconds", self.elapsed.as_secs_f64())
    }
}

/// Prints the report for `totals` and `elapsed` to stdout, and saves it to
/// `output_path`.
///
/// # Errors
///
/// Returns any errors from writing the file.
pub fn format_and_save<'a>(
    totals: &'a Totals,
    elapsed: Duration,
    output_path: impl AsRef<Path>,
) -> Result<Report<'a>> {
    let report = Report::new(totals, elapsed);
    println!("{report}");
    report.save(output_path)?;
    Ok(report)
}
