//! CSV import of contacts through the repository write path.

use super::ExchangeResult;
use crate::model::contact::NewContact;
use crate::repo::contact_repo::{ContactRepository, RepoError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Outcome of a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Source the file was read from.
    pub path: PathBuf,
    /// Rows inserted as new contacts.
    pub imported: u64,
    /// Rows skipped because they did not split into exactly 4 fields.
    pub skipped_malformed: u64,
    /// Rows skipped because the phone number failed the validation rule.
    pub skipped_invalid_phone: u64,
}

/// Reads `path` line by line and inserts each well-formed row as a new
/// contact.
///
/// The first line is discarded unconditionally as a header, whatever its
/// content. Remaining lines are split on commas with trailing empty fields
/// dropped, so a row ending in commas is malformed rather than a row with
/// empty trailing values; anything other than exactly 4 fields is counted
/// as malformed and skipped without a partial insert. Windows line endings
/// are tolerated. Well-formed rows take fields 1..=3 as name, phone and
/// category — the exported ID field is ignored, imported contacts get
/// fresh IDs.
///
/// Inserts go through the repository, so the phone rule applies here too:
/// rows failing validation are counted and skipped rather than written.
/// Engine-level failures abort the import; an unreadable file yields
/// `ExchangeError::Io`.
pub fn import_contacts_csv<R: ContactRepository>(
    repo: &R,
    path: impl AsRef<Path>,
) -> ExchangeResult<ImportReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut report = ImportReport {
        path: path.to_path_buf(),
        imported: 0,
        skipped_malformed: 0,
        skipped_invalid_phone: 0,
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // Header line, skipped regardless of content.
        if index == 0 {
            continue;
        }

        // lines() strips \n but keeps the \r of CRLF files.
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let mut fields: Vec<&str> = line.split(',').collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }
        if fields.len() != 4 {
            report.skipped_malformed += 1;
            continue;
        }

        let draft = NewContact::new(fields[1], fields[2], fields[3]);
        match repo.insert_contact(&draft) {
            Ok(_) => report.imported += 1,
            Err(RepoError::Validation(_)) => report.skipped_invalid_phone += 1,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(report)
}
