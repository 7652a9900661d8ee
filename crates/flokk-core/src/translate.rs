//! Identifier translation.
//!
//! EIDs carry no birth year, but the registry's compact identifier needs
//! one. Resolution fetches the producer's full livestock snapshot ONCE for
//! the whole batch and cross-references it in memory — never one lookup per
//! EID (the batch may be an entire flock).

use animalia_client::error::Result;
use animalia_client::{format_registry_id, parse_eid, Credentials, RegistryApi};
use tracing::debug;

/// A caller EID resolved against the livestock snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedId {
    pub member_number: Option<String>,
    pub individual_number: Option<String>,
    /// Birth year from the snapshot; empty when the EID could not be
    /// matched. The registry decides per item whether that is acceptable.
    pub birth_year: String,
    /// The registry-native identifier, `"<member>/<individual> (<year>)"`.
    pub registry_id: String,
}

/// Resolve a batch of EIDs to registry-native identifiers.
///
/// One livestock fetch per batch; a transport failure propagates
/// immediately with no partial results. On success the output has the same
/// length and order as the input, so callers can re-associate positionally.
/// An unmatched EID is not an error — it resolves with an empty birth year
/// and the registry passes its own judgement in the per-item outcomes.
pub async fn translate_to_registry_ids<C: RegistryApi + ?Sized>(
    api: &C,
    creds: &Credentials,
    eids: &[String],
) -> Result<Vec<ResolvedId>> {
    let livestock = api.fetch_livestock(creds, None).await?;
    debug!(
        batch = eids.len(),
        snapshot = livestock.len(),
        "cross-referencing EIDs against livestock snapshot"
    );

    Ok(eids
        .iter()
        .map(|eid| {
            let parts = parse_eid(eid);
            // Exact match on both birth numbers; first match wins. Matching
            // is skipped entirely for unparseable EIDs so they cannot pair
            // with records that also lack birth numbers.
            let birth_year = match (
                parts.member_number.as_deref(),
                parts.individual_number.as_deref(),
            ) {
                (Some(member), Some(individual)) => livestock
                    .iter()
                    .find(|animal| {
                        animal.fodselindividnr.as_deref() == Some(individual)
                            && animal.fodselmedlemsnr.as_deref() == Some(member)
                    })
                    .and_then(|animal| animal.fodselaar)
                    .map(|year| year.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            };
            let registry_id = format_registry_id(
                parts.member_number.as_deref().unwrap_or(""),
                parts.individual_number.as_deref().unwrap_or(""),
                &birth_year,
            );
            ResolvedId {
                member_number: parts.member_number,
                individual_number: parts.individual_number,
                birth_year,
                registry_id,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use animalia_client::{
        FetalWireEntry, LivestockRecord, Pasture, PastureWireEntry, RegistrationOutcome,
        RegistryError,
    };
    use async_trait::async_trait;

    struct StubRegistry {
        livestock: Vec<LivestockRecord>,
        fail_fetch: bool,
    }

    #[async_trait]
    impl RegistryApi for StubRegistry {
        async fn fetch_livestock(
            &self,
            _creds: &Credentials,
            _from_birth_year: Option<&str>,
        ) -> Result<Vec<LivestockRecord>> {
            if self.fail_fetch {
                return Err(RegistryError::Upstream {
                    status: 503,
                    status_text: "Service Unavailable".to_string(),
                    message: None,
                });
            }
            Ok(self.livestock.clone())
        }

        async fn fetch_pastures(&self, _creds: &Credentials) -> Result<Vec<Pasture>> {
            Ok(vec![])
        }

        async fn register_pasture(
            &self,
            _creds: &Credentials,
            _entries: &[PastureWireEntry],
        ) -> Result<Vec<RegistrationOutcome>> {
            Ok(vec![])
        }

        async fn register_fetal_count(
            &self,
            _creds: &Credentials,
            _entries: &[FetalWireEntry],
        ) -> Result<Vec<RegistrationOutcome>> {
            Ok(vec![])
        }
    }

    fn creds() -> Credentials {
        Credentials::new("token", "12345678901")
    }

    fn animal(member: &str, individual: &str, year: i32) -> LivestockRecord {
        LivestockRecord {
            fodselmedlemsnr: Some(member.to_string()),
            fodselindividnr: Some(individual.to_string()),
            fodselaar: Some(year),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_resolves_birth_year_from_snapshot() {
        let registry = StubRegistry {
            livestock: vec![animal("1234567", "0000001", 2021)],
            fail_fetch: false,
        };
        let resolved = translate_to_registry_ids(
            &registry,
            &creds(),
            &["555 12345670000001".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].birth_year, "2021");
        assert_eq!(resolved[0].registry_id, "1234567/0000001 (2021)");
    }

    #[tokio::test]
    async fn test_output_preserves_input_order_and_cardinality() {
        let registry = StubRegistry {
            livestock: vec![
                animal("1234567", "0000002", 2020),
                animal("1234567", "0000001", 2021),
            ],
            fail_fetch: false,
        };
        let eids = vec![
            "555 12345670000001".to_string(),
            "malformed".to_string(),
            "555 12345670000002".to_string(),
        ];
        let resolved = translate_to_registry_ids(&registry, &creds(), &eids)
            .await
            .unwrap();

        assert_eq!(resolved.len(), eids.len());
        assert_eq!(resolved[0].birth_year, "2021");
        assert_eq!(resolved[1].birth_year, "");
        assert_eq!(resolved[2].birth_year, "2020");
    }

    #[tokio::test]
    async fn test_empty_snapshot_yields_empty_birth_years() {
        let registry = StubRegistry {
            livestock: vec![],
            fail_fetch: false,
        };
        let resolved = translate_to_registry_ids(
            &registry,
            &creds(),
            &["555 12345670000001".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(resolved[0].birth_year, "");
        assert_eq!(resolved[0].registry_id, "1234567/0000001 ()");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let registry = StubRegistry {
            livestock: vec![],
            fail_fetch: true,
        };
        let result = translate_to_registry_ids(
            &registry,
            &creds(),
            &["555 12345670000001".to_string()],
        )
        .await;

        assert!(matches!(
            result,
            Err(RegistryError::Upstream { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_output() {
        let registry = StubRegistry {
            livestock: vec![animal("1234567", "0000001", 2021)],
            fail_fetch: false,
        };
        let resolved = translate_to_registry_ids(&registry, &creds(), &[])
            .await
            .unwrap();
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_eid_does_not_match_recordless_animals() {
        // A snapshot row without birth numbers must not pair with an EID
        // whose parts failed to parse.
        let registry = StubRegistry {
            livestock: vec![LivestockRecord {
                fodselaar: Some(2019),
                ..Default::default()
            }],
            fail_fetch: false,
        };
        let resolved = translate_to_registry_ids(&registry, &creds(), &["bogus".to_string()])
            .await
            .unwrap();
        assert_eq!(resolved[0].birth_year, "");
    }
}
