//! Registration orchestrator.
//!
//! The facade the routing layer calls. Both registration kinds run the same
//! pipeline: validate locally, translate all EIDs in one call, zip the
//! resolved identifiers back onto the per-item fields, submit the enriched
//! batch in one call, then rewrite the registry's identifiers back into the
//! caller's namespace. Call-level failures abort the whole batch; per-item
//! verdicts come back inside the outcome list.

use crate::error::{Result, ServiceError};
use crate::translate::translate_to_registry_ids;
use animalia_client::{
    individual_from_outcome, Credentials, FetalWireEntry, LivestockRecord, Pasture,
    PastureWireEntry, RegistrationOutcome, RegistryApi,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Optional server-side filters for the livestock listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LivestockFilter {
    /// Minimum birth year (`fraFodselsaar` on the wire).
    pub from_birth_year: Option<String>,
}

/// Caller request to move one animal to a pasture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastureRegistration {
    /// The animal's EID.
    pub animal_id: String,
    pub date: NaiveDate,
    pub pasture_id: String,
}

/// Caller request to record a pregnancy scan for one ewe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetalCountRegistration {
    /// The ewe's EID.
    pub ewe: String,
    pub date: NaiveDate,
    pub fetus_count: i32,
}

/// Caller-facing service over a registry backend.
///
/// Stateless apart from the backend handle; safe to share across concurrent
/// requests.
pub struct RegistrationService<C> {
    api: C,
}

impl<C: RegistryApi> RegistrationService<C> {
    pub fn new(api: C) -> Self {
        RegistrationService { api }
    }

    /// The underlying registry backend.
    pub fn api(&self) -> &C {
        &self.api
    }

    /// Livestock listing pass-through.
    pub async fn get_livestock(
        &self,
        creds: &Credentials,
        filter: &LivestockFilter,
    ) -> Result<Vec<LivestockRecord>> {
        let livestock = self
            .api
            .fetch_livestock(creds, filter.from_birth_year.as_deref())
            .await?;
        Ok(livestock)
    }

    /// Pasture listing pass-through.
    pub async fn get_pastures(&self, creds: &Credentials) -> Result<Vec<Pasture>> {
        Ok(self.api.fetch_pastures(creds).await?)
    }

    /// Register a batch of pasture movements.
    pub async fn register_pasture(
        &self,
        creds: &Credentials,
        batch: &[PastureRegistration],
    ) -> Result<Vec<RegistrationOutcome>> {
        let eids: Vec<String> = batch.iter().map(|item| item.animal_id.clone()).collect();
        let resolved = translate_to_registry_ids(&self.api, creds, &eids).await?;

        // Positional zip; the translator guarantees matching length/order.
        let entries: Vec<PastureWireEntry> = batch
            .iter()
            .zip(&resolved)
            .map(|(item, id)| PastureWireEntry {
                individ: id.registry_id.clone(),
                dato: item.date,
                beite_binge: item.pasture_id.clone(),
            })
            .collect();

        info!(count = entries.len(), "submitting pasture registrations");
        let outcomes = self.api.register_pasture(creds, &entries).await?;
        Ok(remap_outcomes(outcomes))
    }

    /// Register a batch of fetal counts.
    ///
    /// Negative counts are a local validation failure and abort the batch
    /// before any network call.
    pub async fn register_fetal_count(
        &self,
        creds: &Credentials,
        batch: &[FetalCountRegistration],
    ) -> Result<Vec<RegistrationOutcome>> {
        for item in batch {
            if item.fetus_count < 0 {
                return Err(ServiceError::InvalidFetusCount {
                    ewe: item.ewe.clone(),
                    count: item.fetus_count,
                });
            }
        }

        let eids: Vec<String> = batch.iter().map(|item| item.ewe.clone()).collect();
        let resolved = translate_to_registry_ids(&self.api, creds, &eids).await?;

        let entries: Vec<FetalWireEntry> = batch
            .iter()
            .zip(&resolved)
            .map(|(item, id)| FetalWireEntry {
                soye: id.registry_id.clone(),
                dato: item.date,
                antall_foster: item.fetus_count,
            })
            .collect();

        info!(count = entries.len(), "submitting fetal counts");
        let outcomes = self.api.register_fetal_count(creds, &entries).await?;
        Ok(remap_outcomes(outcomes))
    }
}

/// Rewrite each outcome's identifier from the registry's compact form back
/// to the individual number callers know. Order and cardinality mirror the
/// registry's response; callers correlate by identifier, not position.
fn remap_outcomes(mut outcomes: Vec<RegistrationOutcome>) -> Vec<RegistrationOutcome> {
    for outcome in &mut outcomes {
        outcome.individual = individual_from_outcome(&outcome.individual);
    }
    debug!(count = outcomes.len(), "remapped registration outcomes");
    outcomes
}
