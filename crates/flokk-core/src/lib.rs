//! Flokk Core Library
//!
//! Identifier translation and batch registration against the Animalia sheep
//! registry. Callers (the routing layer) hand in batches keyed by universal
//! EIDs; this crate resolves them to registry-native identifiers, submits
//! the batch in one call, and maps the registry's per-item verdicts back to
//! the caller's identifier namespace.
//!
//! Everything here is request-scoped and stateless: livestock snapshots are
//! fetched fresh per invocation and discarded, so concurrent invocations
//! need no coordination.

pub mod error;
pub mod service;
pub mod telemetry;
pub mod translate;

pub use error::{Fault, Result, ServiceError};
pub use service::{
    FetalCountRegistration, LivestockFilter, PastureRegistration, RegistrationService,
};
pub use translate::{translate_to_registry_ids, ResolvedId};

pub use animalia_client::{
    format_registry_id, individual_from_outcome, parse_eid, AnimaliaClient, AnimaliaConfig,
    Credentials, EidParts, FetalWireEntry, LivestockRecord, OutcomeIssue, Pasture,
    PastureWireEntry, RegistrationOutcome, RegistryApi, RegistryError,
};

pub use telemetry::init_tracing;

/// Flokk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
