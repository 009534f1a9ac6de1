//! CSV export of all stored contacts.

use super::ExchangeResult;
use crate::repo::contact_repo::ContactRepository;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fixed header line written before any contact row.
pub const CSV_HEADER: &str = "ID,Name,Phone Number,Category";

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Destination the file was written to.
    pub path: PathBuf,
    /// Number of contact rows written (header excluded).
    pub exported: u64,
}

/// Writes every stored contact to `path`, creating or overwriting the file.
///
/// Rows appear in the same ascending-ID order `list_contacts` returns.
/// Fields are joined with commas and not quoted, so embedded commas corrupt
/// row boundaries on re-import; callers needing arbitrary text should keep
/// commas out of contact fields.
///
/// On failure a partially written file may remain, but the file handle is
/// always released.
pub fn export_contacts_csv<R: ContactRepository>(
    repo: &R,
    path: impl AsRef<Path>,
) -> ExchangeResult<ExportReport> {
    let path = path.as_ref();
    let contacts = repo.list_contacts()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{CSV_HEADER}")?;
    let mut exported = 0u64;
    for contact in &contacts {
        writeln!(
            writer,
            "{},{},{},{}",
            contact.id, contact.name, contact.phone_number, contact.category
        )?;
        exported += 1;
    }
    writer.flush()?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        exported,
    })
}
