//! Wire model for the Animalia web services.
//!
//! Field names are the registry's own (Norwegian) names and must stay
//! bit-exact for interoperability; Rust-side names map onto them via
//! `rename_all = "camelCase"` or explicit renames. Dates cross the wire as
//! ISO date strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One animal as known to the registry.
///
/// Immutable snapshot row from `hentBesetning`; fetched fresh per request
/// and never cached. Identifier resolution only reads `fodselindividnr`,
/// `fodselmedlemsnr` and `fodselaar` — the rest is carried through to
/// callers of the livestock listing untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LivestockRecord {
    pub id: i64,
    pub selger_prodnr: Option<String>,
    pub selger_navn: Option<String>,
    /// Ear-tag number.
    pub oremerke: Option<String>,
    /// Individual number at birth; one half of the EID cross-reference key.
    pub fodselindividnr: Option<String>,
    /// Member number at birth; the other half of the cross-reference key.
    pub fodselmedlemsnr: Option<String>,
    /// Birth year, the datum the identifier translation is after.
    pub fodselaar: Option<i32>,
    pub kaaringsnr: Option<i64>,
    pub navn: Option<String>,
    /// ISO date string.
    pub kjopsdato: Option<String>,
    /// ISO date string.
    pub inndato: Option<String>,
    pub innkode_id: Option<i32>,
    pub rase_id: Option<i32>,
    /// ISO date string.
    pub fodseldato: Option<String>,
    pub kjonn_id: Option<i32>,
    pub mor: Option<String>,
    pub mor_fodselaar: Option<i32>,
    pub fostermor: Option<String>,
    pub fostermor_fodselaar: Option<i32>,
    pub far: Option<String>,
    pub far_fodselaar: Option<i32>,
    pub far_kaaringsnr: Option<i64>,
    pub far_navn: Option<String>,
    pub oppvekstkode_id: Option<i32>,
    /// ISO date string.
    pub fravendt_dato: Option<String>,
    pub farge_id: Option<i32>,
    pub tegning_monster_id: Option<i32>,
    pub fodselhjelp_id: Option<i32>,
    pub hornstatus: Option<i32>,
    pub utrangeringsaarsak_id: Option<i32>,
    pub speneantall: Option<i32>,
    pub beite_binge_id: Option<i64>,
    /// ISO date string.
    pub beite_binge_inndato: Option<String>,
    /// ISO date string.
    pub utdato: Option<String>,
    pub utkode_id: Option<i32>,
    pub kategorier: Option<String>,
}

/// A pasture (beite-binge) registered for the producer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pasture {
    pub id: i64,
    pub aktiv: i32,
    pub navn: String,
    pub beite_binge_type_id: i64,
}

/// One per-item issue flagged by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeIssue {
    pub field: String,
    pub message: String,
}

/// Per-item result of a batch registration.
///
/// An empty `errors` list signals success for that item. The registry fills
/// `individ` with its own compact identifier; the orchestrator rewrites it
/// to the caller's individual number before handing the list back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationOutcome {
    #[serde(rename = "individ")]
    pub individual: String,
    pub errors: Vec<OutcomeIssue>,
}

/// Wire entry for `registrerBeiteBinge`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PastureWireEntry {
    /// Registry-native animal identifier, `"<member>/<individual> (<year>)"`.
    pub individ: String,
    pub dato: NaiveDate,
    pub beite_binge: String,
}

/// Wire entry for `registrerFostertelling`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetalWireEntry {
    /// Registry-native ewe identifier.
    pub soye: String,
    pub dato: NaiveDate,
    pub antall_foster: i32,
}

/// POST body envelope shared by both registration operations.
#[derive(Debug, Serialize)]
pub struct RegistrationEnvelope<'a, T> {
    pub prodnr: &'a str,
    pub registreringer: &'a [T],
}
