//! Registry client.
//!
//! Stateless request/response wrapper over the four Animalia web service
//! operations. Every call is authenticated with a bearer token and a
//! producer number supplied per request; no token handling, retrying or
//! caching happens at this layer — a failed call surfaces immediately as a
//! [`RegistryError`] so the orchestrator can decide how to react.

use crate::error::{RegistryError, Result};
use crate::model::{
    FetalWireEntry, LivestockRecord, Pasture, PastureWireEntry, RegistrationEnvelope,
    RegistrationOutcome,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Per-request credentials, supplied by the auth collaborator and trusted
/// as pre-validated.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the registry.
    pub access_token: String,
    /// The caller's registry account identifier (`prodnr` on the wire).
    pub producer_number: String,
}

impl Credentials {
    pub fn new(access_token: &str, producer_number: &str) -> Self {
        Credentials {
            access_token: access_token.to_string(),
            producer_number: producer_number.to_string(),
        }
    }
}

/// Registry endpoint configuration.
#[derive(Debug, Clone)]
pub struct AnimaliaConfig {
    /// Base URL of the web service, without trailing slash.
    pub base_url: String,
}

impl Default for AnimaliaConfig {
    fn default() -> Self {
        AnimaliaConfig {
            base_url: std::env::var("ANIMALIA_BASE_URL")
                .unwrap_or_else(|_| "https://test-sau.animalia.no/webservice".to_string()),
        }
    }
}

impl AnimaliaConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific endpoint.
    pub fn new(base_url: &str) -> Self {
        AnimaliaConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// The four remote registry operations.
///
/// The orchestration layer depends on this trait, never on the concrete
/// HTTP client, so it can be exercised against an in-memory stub.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Full livestock listing for the producer, optionally filtered
    /// server-side by minimum birth year.
    async fn fetch_livestock(
        &self,
        creds: &Credentials,
        from_birth_year: Option<&str>,
    ) -> Result<Vec<LivestockRecord>>;

    /// Pastures registered for the producer.
    async fn fetch_pastures(&self, creds: &Credentials) -> Result<Vec<Pasture>>;

    /// Submit a batch of pasture entries; returns one outcome per item.
    async fn register_pasture(
        &self,
        creds: &Credentials,
        entries: &[PastureWireEntry],
    ) -> Result<Vec<RegistrationOutcome>>;

    /// Submit a batch of fetal-count entries; returns one outcome per item.
    async fn register_fetal_count(
        &self,
        creds: &Credentials,
        entries: &[FetalWireEntry],
    ) -> Result<Vec<RegistrationOutcome>>;
}

/// HTTP implementation of [`RegistryApi`] against the Animalia web service.
pub struct AnimaliaClient {
    config: AnimaliaConfig,
    http_client: reqwest::Client,
}

impl AnimaliaClient {
    /// Create a new client.
    pub fn new(config: AnimaliaConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("flokk-animalia-client/0.2.0")
            .build()
            .expect("Failed to create HTTP client");

        AnimaliaClient {
            config,
            http_client,
        }
    }

    /// Create client from environment variables.
    pub fn from_env() -> Self {
        Self::new(AnimaliaConfig::from_env())
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}", self.config.base_url, operation)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        creds: &Credentials,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .http_client
            .get(self.url(operation))
            .bearer_auth(&creds.access_token)
            .query(query)
            .send()
            .await?;
        Self::decode(operation, response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        operation: &str,
        creds: &Credentials,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http_client
            .post(self.url(operation))
            .bearer_auth(&creds.access_token)
            .json(body)
            .send()
            .await?;
        Self::decode(operation, response).await
    }

    /// Map a response to a payload or a call-level error. The error body is
    /// captured best-effort; the registry does not guarantee one.
    async fn decode<T: DeserializeOwned>(operation: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.ok().filter(|body| !body.is_empty());
            warn!(operation, status = status.as_u16(), "registry call failed");
            return Err(RegistryError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RegistryApi for AnimaliaClient {
    async fn fetch_livestock(
        &self,
        creds: &Credentials,
        from_birth_year: Option<&str>,
    ) -> Result<Vec<LivestockRecord>> {
        debug!(producer = %creds.producer_number, "fetching livestock snapshot");
        let mut query = vec![("prodnr", creds.producer_number.as_str())];
        if let Some(year) = from_birth_year {
            query.push(("fraFodselsaar", year));
        }
        self.get_json("hentBesetning", creds, &query).await
    }

    async fn fetch_pastures(&self, creds: &Credentials) -> Result<Vec<Pasture>> {
        debug!(producer = %creds.producer_number, "fetching pastures");
        let query = [("prodnr", creds.producer_number.as_str())];
        self.get_json("hentBeiteBinge", creds, &query).await
    }

    async fn register_pasture(
        &self,
        creds: &Credentials,
        entries: &[PastureWireEntry],
    ) -> Result<Vec<RegistrationOutcome>> {
        debug!(
            producer = %creds.producer_number,
            count = entries.len(),
            "registering pasture entries"
        );
        let body = RegistrationEnvelope {
            prodnr: &creds.producer_number,
            registreringer: entries,
        };
        self.post_json("registrerBeiteBinge", creds, &body).await
    }

    async fn register_fetal_count(
        &self,
        creds: &Credentials,
        entries: &[FetalWireEntry],
    ) -> Result<Vec<RegistrationOutcome>> {
        debug!(
            producer = %creds.producer_number,
            count = entries.len(),
            "registering fetal counts"
        );
        let body = RegistrationEnvelope {
            prodnr: &creds.producer_number,
            registreringer: entries,
        };
        self.post_json("registrerFostertelling", creds, &body).await
    }
}
