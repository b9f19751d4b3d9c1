//! # Record Normalizer
//!
//! Turns a raw record bag into a typed [`RecordSet`]. Rules are checked in a fixed order
//! (TXT, A, AAAA, CNAME, NS) and the first violation is returned. CNAME and NS targets are
//! canonicalized; TXT, A and AAAA values are kept as written.

use crate::error::{Field, RegistryError, Result};
use crate::validate;
use serde_json::{Map, Value};
use subreg_domain::declaration::RecordSet;

const TXT_RULE: &str = "TXT records must be an array of non-empty strings";
const A_RULE: &str = "A records must be an array of valid IPv4 addresses";
const AAAA_RULE: &str = "AAAA records must be an array of valid IPv6 addresses";
const CNAME_RULE: &str = "Invalid CNAME record";
const NS_RULE: &str = "NS records must be an array of valid domain names";
const NS_EXCLUSIVE_RULE: &str = "NS records cannot be used with A, AAAA or CNAME records";

/// Where a record bag was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    /// Record of a top-level declaration; NS is exclusive with A/AAAA/CNAME.
    Declaration,
    /// Record of a nested declaration; NS exclusivity is not enforced.
    Nested,
}

/// Lowercases a CNAME/NS target, collapses trailing dots and appends exactly one.
///
/// Idempotent: `normalize_target(&normalize_target(x)) == normalize_target(x)`.
#[must_use]
pub fn normalize_target(target: &str) -> String {
    let mut normalized = target.to_lowercase().trim_end_matches('.').to_owned();
    normalized.push('.');
    normalized
}

/// Validates and canonicalizes a raw record object.
///
/// # Errors
/// Returns [`RegistryError::Validation`] for the first violated rule: a TXT, A or AAAA
/// member failing its validator, an invalid CNAME target, NS declared next to
/// A/AAAA/CNAME (top-level scope only), or an invalid NS target. Record fields that are
/// present but not of the expected JSON type are rejected by the same rule.
pub fn normalize_record(raw: &Map<String, Value>, scope: RecordScope) -> Result<RecordSet> {
    let txt = string_list(raw.get("TXT"), validate::txt, Field::Txt, TXT_RULE)?;
    let a = string_list(raw.get("A"), validate::a, Field::A, A_RULE)?;
    let aaaa = string_list(raw.get("AAAA"), validate::aaaa, Field::Aaaa, AAAA_RULE)?;

    let cname = match raw.get("CNAME") {
        None | Some(Value::Null) => None,
        Some(Value::String(target)) if validate::cname(target) => Some(normalize_target(target)),
        other => return Err(RegistryError::invalid(Field::Cname, CNAME_RULE, other)),
    };

    let ns = match raw.get("NS") {
        None | Some(Value::Null) => None,
        declared => {
            if scope == RecordScope::Declaration && (a.is_some() || aaaa.is_some() || cname.is_some())
            {
                return Err(RegistryError::rule(Field::Ns, NS_EXCLUSIVE_RULE));
            }
            string_list(declared, validate::ns, Field::Ns, NS_RULE)?
                .map(|targets| targets.iter().map(|t| normalize_target(t)).collect())
        },
    };

    Ok(RecordSet { txt, a, aaaa, cname, ns })
}

/// Reads an optional array of strings, every member passing `accept`.
fn string_list(
    value: Option<&Value>,
    accept: fn(&str) -> bool,
    field: Field,
    rule: &str,
) -> Result<Option<Vec<String>>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        other => return Err(RegistryError::invalid(field, rule, other)),
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) if accept(s) => Ok(s.clone()),
            other => Err(RegistryError::invalid(field, rule, Some(other))),
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixtures are objects"),
        }
    }

    fn normalize(value: Value) -> Result<RecordSet> {
        normalize_record(&record(value), RecordScope::Declaration)
    }

    #[test]
    fn target_normalization() {
        assert_eq!(normalize_target("Bar.Example.COM"), "bar.example.com.");
        assert_eq!(normalize_target("bar.example.com..."), "bar.example.com.");
        assert_eq!(normalize_target("bar.example.com."), "bar.example.com.");
    }

    #[test]
    fn cname_is_canonicalized() {
        let set = normalize(json!({ "CNAME": "User.GitHub.io.." })).unwrap();
        assert_eq!(set.cname.as_deref(), Some("user.github.io."));
    }

    #[test]
    fn ns_targets_are_canonicalized() {
        let set = normalize(json!({ "NS": ["NS1.Example.com", "ns2.example.com."] })).unwrap();
        assert_eq!(set.ns, Some(vec!["ns1.example.com.".to_owned(), "ns2.example.com.".to_owned()]));
    }

    #[test]
    fn txt_a_aaaa_are_kept_verbatim() {
        let set = normalize(json!({
            "TXT": ["Hello World"],
            "A": ["1.2.3.4"],
            "AAAA": ["2001:DB8::1"]
        }))
        .unwrap();
        assert_eq!(set.txt, Some(vec!["Hello World".to_owned()]));
        assert_eq!(set.a, Some(vec!["1.2.3.4".to_owned()]));
        assert_eq!(set.aaaa, Some(vec!["2001:DB8::1".to_owned()]));
    }

    #[test]
    fn rules_fail_in_declared_order() {
        let err = normalize(json!({ "TXT": [""], "A": ["999.1.1.1"] })).unwrap_err();
        assert_eq!(err.field(), Some(Field::Txt));

        let err = normalize(json!({ "A": ["999.1.1.1"], "CNAME": "x" })).unwrap_err();
        assert_eq!(err.field(), Some(Field::A));
        assert_eq!(err.to_string(), "A records must be an array of valid IPv4 addresses: \"999.1.1.1\"");

        let err = normalize(json!({ "AAAA": ["zz::1"] })).unwrap_err();
        assert_eq!(err.field(), Some(Field::Aaaa));
    }

    #[test]
    fn ns_is_exclusive_at_top_level() {
        let err = normalize(json!({ "A": ["1.2.3.4"], "NS": ["ns1.example.com"] })).unwrap_err();
        assert_eq!(err.to_string(), NS_EXCLUSIVE_RULE);

        let err = normalize(json!({ "A": [], "NS": ["ns1.example.com"] })).unwrap_err();
        assert_eq!(err.field(), Some(Field::Ns));
    }

    #[test]
    fn ns_exclusivity_is_skipped_for_nested_records() {
        let raw = record(json!({ "CNAME": "x.example.com", "NS": ["ns1.example.com"] }));
        let set = normalize_record(&raw, RecordScope::Nested).unwrap();
        assert_eq!(set.cname.as_deref(), Some("x.example.com."));
        assert_eq!(set.ns, Some(vec!["ns1.example.com.".to_owned()]));
    }

    #[test]
    fn wrong_json_types_are_rejected() {
        let err = normalize(json!({ "TXT": "not-an-array" })).unwrap_err();
        assert_eq!(err.field(), Some(Field::Txt));

        let err = normalize(json!({ "A": [1, 2, 3, 4] })).unwrap_err();
        assert_eq!(err.value(), Some("1"));

        let err = normalize(json!({ "CNAME": ["a.example.com"] })).unwrap_err();
        assert_eq!(err.field(), Some(Field::Cname));
    }

    #[test]
    fn empty_cname_is_rejected() {
        let err = normalize(json!({ "CNAME": "" })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid CNAME record: \"\"");
    }

    #[test]
    fn nulls_count_as_absent() {
        let set = normalize(json!({ "A": null, "CNAME": null, "NS": ["ns1.example.com"] })).unwrap();
        assert!(set.a.is_none());
        assert!(set.cname.is_none());
        assert_eq!(set.len(), 1);
    }
}
