//! Service-level error taxonomy.

use animalia_client::RegistryError;
use thiserror::Error;

/// Who is at fault for a failed call.
///
/// Local validation failures are the caller's mistake; registry failures
/// are upstream. The routing layer maps this onto its status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Client,
    Server,
}

/// Call-level errors from the registration pipeline.
///
/// Either variant aborts the whole batch before or at submission — partial
/// per-item failures are not errors and come back inside the outcome list.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A fetal count was negative. Rejected before any network call.
    #[error("fetal count for {ewe} must be non-negative, got {count}")]
    InvalidFetusCount { ewe: String, count: i32 },

    /// The registry call itself failed (transport or non-2xx).
    #[error("registry call failed: {0}")]
    Registry(#[from] RegistryError),
}

impl ServiceError {
    /// Classify the failure for the caller.
    pub fn fault(&self) -> Fault {
        match self {
            ServiceError::InvalidFetusCount { .. } => Fault::Client,
            ServiceError::Registry(_) => Fault::Server,
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
