//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide stable entry points for presentation-layer callers.
//! - Emit one structured log event per operation outcome.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Service failures are returned to the caller; nothing terminates the
//!   process.

pub mod contact_service;
