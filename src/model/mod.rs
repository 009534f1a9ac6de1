//! Domain model for the contact store.
//!
//! # Responsibility
//! - Define the canonical contact record and its draft form.
//! - Host the phone-number validation rule shared by all write paths.
//!
//! # Invariants
//! - Every persisted contact is identified by a unique `ContactId`.
//! - Deletion is a hard delete; retired IDs are never reused.

pub mod contact;
