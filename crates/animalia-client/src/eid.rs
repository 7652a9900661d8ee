//! EID codec.
//!
//! Animals carry a universal electronic tag ("EID") of the form
//! `"<flock-prefix> <15-digit-body>"`. The registry instead speaks a compact
//! `"<member-number>/<individual-number> (<birth-year>)"` identifier. This
//! module converts between the two; it never decides whether an identifier
//! is *valid* — unresolvable parts come back as `None`/empty and downstream
//! code defers that judgement to the registry.

/// Member and individual number extracted from an EID body.
///
/// Either field is `None` when the EID is malformed (missing body token or
/// body too short). Callers must treat `None` as "unresolvable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EidParts {
    pub member_number: Option<String>,
    pub individual_number: Option<String>,
}

/// Split an EID into member and individual numbers.
///
/// The body is the second space-separated token; its first 7 characters are
/// the member number and the rest (up to 20 characters) the individual
/// number. Malformed input is not an error.
pub fn parse_eid(eid: &str) -> EidParts {
    let body = eid.split(' ').nth(1).unwrap_or("");
    let member_number = body.get(0..7).map(str::to_string);
    let individual_number = if body.len() > 7 {
        body.get(7..body.len().min(20)).map(str::to_string)
    } else {
        None
    };
    EidParts {
        member_number,
        individual_number,
    }
}

/// Format a registry-native identifier.
///
/// `birth_year` may be empty when the animal could not be resolved against
/// the livestock snapshot; the registry is authoritative on whether that is
/// acceptable, so no validation happens here.
pub fn format_registry_id(member_number: &str, individual_number: &str, birth_year: &str) -> String {
    format!("{member_number}/{individual_number} ({birth_year})")
}

/// Extract the individual number from a registry response identifier.
///
/// Response identifiers look like `"<member>/<individual> (<year>) ..."`;
/// the substring after `/` and before the next space is the individual
/// number callers know the animal by. The format is a structural assumption
/// about the registry, not a verified contract — a deviation produces an
/// empty string and a warning rather than an error, so the per-item
/// outcomes around it survive.
pub fn individual_from_outcome(individual: &str) -> String {
    match individual.split_once('/') {
        Some((_, rest)) => rest.split(' ').next().unwrap_or("").to_string(),
        None => {
            tracing::warn!(
                identifier = individual,
                "registry outcome identifier missing '/' separator"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eid_valid() {
        let parts = parse_eid("555 12345670000001");
        assert_eq!(parts.member_number.as_deref(), Some("1234567"));
        assert_eq!(parts.individual_number.as_deref(), Some("0000001"));
    }

    #[test]
    fn test_parse_eid_missing_body() {
        let parts = parse_eid("555");
        assert_eq!(parts.member_number, None);
        assert_eq!(parts.individual_number, None);
    }

    #[test]
    fn test_parse_eid_short_body() {
        let parts = parse_eid("555 1234");
        assert_eq!(parts.member_number, None);
        assert_eq!(parts.individual_number, None);
    }

    #[test]
    fn test_parse_eid_empty() {
        let parts = parse_eid("");
        assert_eq!(parts.member_number, None);
        assert_eq!(parts.individual_number, None);
    }

    #[test]
    fn test_parse_then_format_round_trip() {
        let parts = parse_eid("555 12345670000001");
        let id = format_registry_id(
            parts.member_number.as_deref().unwrap(),
            parts.individual_number.as_deref().unwrap(),
            "2021",
        );
        assert_eq!(id, "1234567/0000001 (2021)");
    }

    #[test]
    fn test_format_registry_id_empty_birth_year() {
        assert_eq!(format_registry_id("1234567", "0000001", ""), "1234567/0000001 ()");
    }

    #[test]
    fn test_individual_from_outcome() {
        assert_eq!(
            individual_from_outcome("1234567/0000001 (2021) extra"),
            "0000001"
        );
    }

    #[test]
    fn test_individual_from_outcome_round_trip() {
        let formatted = format_registry_id("1234567", "0000001", "2021");
        assert_eq!(
            individual_from_outcome(&format!("{formatted} suffix")),
            "0000001"
        );
    }

    #[test]
    fn test_individual_from_outcome_missing_separator() {
        assert_eq!(individual_from_outcome("garbage"), "");
        assert_eq!(individual_from_outcome(""), "");
    }
}
