//! Contact use-case service.
//!
//! # Responsibility
//! - Wrap repository CRUD and CSV exchange behind one facade.
//! - Log every operation outcome so hosting callers can surface it.
//!
//! # Invariants
//! - Results are passed through unchanged; logging never alters outcomes.
//! - Storage stays behind the `ContactRepository` seam.

use crate::exchange::{
    export_contacts_csv, import_contacts_csv, ExchangeResult, ExportReport, ImportReport,
};
use crate::model::contact::{Contact, ContactId, NewContact};
use crate::repo::contact_repo::{ContactRepository, RepoResult};
use log::{error, info, warn};
use std::path::Path;

/// Facade over a contact repository, one instance per open store.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new contact; validation failures never reach the engine.
    pub fn add_contact(&self, draft: &NewContact) -> RepoResult<ContactId> {
        match self.repo.insert_contact(draft) {
            Ok(id) => {
                info!("event=contact_insert module=service status=ok id={id}");
                Ok(id)
            }
            Err(err) => {
                error!("event=contact_insert module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Returns all contacts in ascending ID order.
    pub fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        match self.repo.list_contacts() {
            Ok(contacts) => {
                info!(
                    "event=contact_list module=service status=ok count={}",
                    contacts.len()
                );
                Ok(contacts)
            }
            Err(err) => {
                error!("event=contact_list module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Replaces name/phone/category of an existing contact.
    ///
    /// `Ok(false)` means no row matched `id`; the operation itself
    /// succeeded with zero rows affected.
    pub fn update_contact(&self, id: ContactId, draft: &NewContact) -> RepoResult<bool> {
        match self.repo.update_contact(id, draft) {
            Ok(changed) => {
                if changed {
                    info!("event=contact_update module=service status=ok id={id}");
                } else {
                    warn!("event=contact_update module=service status=ok id={id} changed=0");
                }
                Ok(changed)
            }
            Err(err) => {
                error!("event=contact_update module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Deletes a contact by ID; deleting a missing ID is `Ok(false)`.
    pub fn delete_contact(&self, id: ContactId) -> RepoResult<bool> {
        match self.repo.delete_contact(id) {
            Ok(removed) => {
                info!(
                    "event=contact_delete module=service status=ok id={id} removed={}",
                    removed as u8
                );
                Ok(removed)
            }
            Err(err) => {
                error!("event=contact_delete module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Exports every contact to a CSV file at `path`.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> ExchangeResult<ExportReport> {
        match export_contacts_csv(&self.repo, path) {
            Ok(report) => {
                info!(
                    "event=csv_export module=service status=ok path={} rows={}",
                    report.path.display(),
                    report.exported
                );
                Ok(report)
            }
            Err(err) => {
                error!("event=csv_export module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Imports contacts from a CSV file at `path`.
    pub fn import_csv(&self, path: impl AsRef<Path>) -> ExchangeResult<ImportReport> {
        match import_contacts_csv(&self.repo, path) {
            Ok(report) => {
                info!(
                    "event=csv_import module=service status=ok path={} imported={} skipped_malformed={} skipped_invalid_phone={}",
                    report.path.display(),
                    report.imported,
                    report.skipped_malformed,
                    report.skipped_invalid_phone
                );
                Ok(report)
            }
            Err(err) => {
                error!("event=csv_import module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Exact-match search; declared for contract stability, currently
    /// always fails with `RepoError::NotImplemented`.
    pub fn search_contacts(&self, name: &str, category: &str) -> RepoResult<Vec<Contact>> {
        match self.repo.search_contacts(name, category) {
            Ok(contacts) => Ok(contacts),
            Err(err) => {
                error!("event=contact_search module=service status=error error={err}");
                Err(err)
            }
        }
    }
}
