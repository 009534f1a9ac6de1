//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for contact storage.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes enforce `NewContact::validate()` before persistence.
//! - Unimplemented contract members fail with a typed `NotImplemented`
//!   error, never silently.

pub mod contact_repo;
