//! Animalia registry client for Flokk.
//!
//! This crate is the I/O boundary between the flock-management backend and
//! the Animalia sheep registry. It covers:
//! - the EID codec (universal electronic tags vs. the registry's compact
//!   `member/individual (birth-year)` form),
//! - the registry's JSON wire model (Norwegian field names, reproduced
//!   bit-exact),
//! - the four remote operations behind the [`RegistryApi`] trait.
//!
//! No business logic lives here; identifier resolution and batch
//! orchestration are in `flokk-core`.

pub mod client;
pub mod eid;
pub mod error;
pub mod model;

// Re-export main types and errors
pub use client::{AnimaliaClient, AnimaliaConfig, Credentials, RegistryApi};
pub use eid::{format_registry_id, individual_from_outcome, parse_eid, EidParts};
pub use error::{RegistryError, Result};
pub use model::{
    FetalWireEntry, LivestockRecord, OutcomeIssue, Pasture, PastureWireEntry, RegistrationEnvelope,
    RegistrationOutcome,
};
