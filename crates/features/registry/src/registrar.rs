//! # Subdomain Registrar
//!
//! Validates raw declarations, applies defaults and canonicalization, and appends the
//! accepted result to a [`Registry`].
//!
//! ## Acceptance order
//! 1. The declaration must be an object.
//! 2. `domain`, `description` and `subdomain` pass their validators.
//! 3. The lowercased subdomain is not denylisted.
//! 4. `owner.repo` / `owner.email` are strings when present.
//! 5. `proxy` defaults to `true` unless it is a boolean.
//! 6. `record` is an object and passes the record rules.
//! 7. Each `nested` entry passes its own label and record rules.
//!
//! A declaration is built only after every step succeeds, so a failure never leaves a
//! partially normalized entry behind and the registry is untouched.

use crate::error::{Field, RegistryError, RegistryErrorExt, Result};
use crate::record::{RecordScope, normalize_record};
use crate::registry::Registry;
use crate::validate;
use fxhash::FxHashSet;
use serde_json::{Map, Value};
use std::borrow::Cow;
use subreg_domain::constants::DENYLIST;
use subreg_domain::declaration::{NestedDeclaration, Owner, SubdomainDeclaration};
use tracing::debug;

/// A raw declaration together with where it came from (file path, index, ...).
#[derive(Debug, Clone)]
pub struct RawDeclaration {
    pub origin: Cow<'static, str>,
    pub value: Value,
}

impl RawDeclaration {
    pub fn new(origin: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self { origin: origin.into(), value }
    }
}

impl From<Value> for RawDeclaration {
    fn from(value: Value) -> Self {
        Self::new("inline", value)
    }
}

/// Applies the acceptance rules and owns the denylist.
#[derive(Debug, Clone)]
pub struct Registrar {
    denylist: FxHashSet<String>,
}

impl Default for Registrar {
    fn default() -> Self {
        Self { denylist: DENYLIST.iter().map(|name| (*name).to_owned()).collect() }
    }
}

impl Registrar {
    /// Registrar with the built-in denylist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds labels to the denylist, trimmed and lowercased.
    #[must_use]
    pub fn deny<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.denylist.extend(labels.into_iter().map(|label| canonical_label(label.as_ref())));
        self
    }

    #[must_use]
    pub fn is_denied(&self, label: &str) -> bool {
        self.denylist.contains(label)
    }

    /// Validates `declaration`, normalizes it and appends it to `registry`.
    ///
    /// # Returns
    /// The stored, normalized declaration.
    ///
    /// # Errors
    /// Returns [`RegistryError::Validation`] naming the first field that broke a rule.
    /// The registry is not modified on failure.
    pub fn add_subdomain<'r>(
        &self,
        registry: &'r mut Registry,
        declaration: Value,
    ) -> Result<&'r SubdomainDeclaration> {
        let declaration = self.accept(&declaration)?;

        debug!(
            fqdn = %declaration.fqdn(),
            proxy = declaration.proxy,
            records = declaration.record.len(),
            nested = declaration.nested.len(),
            "Subdomain accepted"
        );

        Ok(registry.push(declaration))
    }

    /// Registers every declaration in order, stopping at the first failure.
    ///
    /// # Returns
    /// The number of declarations registered by this call.
    ///
    /// # Errors
    /// Returns the first [`RegistryError`], with the declaration's origin as context.
    /// Declarations before the failing one stay registered; the caller aborts the run.
    pub fn register_all<I, D>(&self, registry: &mut Registry, declarations: I) -> Result<usize>
    where
        I: IntoIterator<Item = D>,
        D: Into<RawDeclaration>,
    {
        let mut count = 0;
        for raw in declarations {
            let RawDeclaration { origin, value } = raw.into();
            self.add_subdomain(registry, value).map(|_| ()).context(origin)?;
            count += 1;
        }
        Ok(count)
    }

    fn accept(&self, raw: &Value) -> Result<SubdomainDeclaration> {
        let Value::Object(data) = raw else {
            return Err(RegistryError::rule(
                Field::Declaration,
                "Invalid subdomain data (must be an object)",
            ));
        };

        let domain = checked_str(data, "domain", validate::domain)
            .ok_or_else(|| RegistryError::invalid(Field::Domain, "Invalid domain name", data.get("domain")))?;
        let description = checked_str(data, "description", validate::description).ok_or_else(|| {
            RegistryError::invalid(
                Field::Description,
                "Invalid subdomain description",
                data.get("description"),
            )
        })?;
        let subdomain = checked_str(data, "subdomain", validate::sub_domain).ok_or_else(|| {
            RegistryError::invalid(Field::Subdomain, "Invalid subdomain name", data.get("subdomain"))
        })?;

        let subdomain = subdomain.to_lowercase();
        if self.is_denied(&subdomain) {
            return Err(RegistryError::Validation {
                field: Field::Subdomain,
                message: format!("Denied subdomain name: \"{subdomain}\"").into(),
                value: Some(subdomain),
                context: None,
            });
        }

        let owner = match data.get("owner") {
            Some(Value::Object(owner)) => Some(parse_owner(owner)?),
            _ => None,
        };

        let record = match data.get("record") {
            Some(Value::Object(record)) => normalize_record(record, RecordScope::Declaration)?,
            _ => {
                return Err(RegistryError::rule(
                    Field::Record,
                    "Invalid subdomain \"record\" property (must be an object)",
                ));
            },
        };

        let nested = match data.get("nested") {
            Some(Value::Array(entries)) => entries.iter().map(accept_nested).collect::<Result<_>>()?,
            _ => Vec::new(),
        };

        Ok(SubdomainDeclaration {
            domain: domain.to_owned(),
            description: description.to_owned(),
            subdomain,
            owner,
            proxy: proxy_flag(data),
            record,
            nested,
        })
    }
}

fn accept_nested(raw: &Value) -> Result<NestedDeclaration> {
    let Value::Object(data) = raw else {
        return Err(RegistryError::invalid(
            Field::Nested,
            "Invalid nested subdomain data (must be an object)",
            Some(raw),
        ));
    };

    let subdomain = checked_str(data, "subdomain", validate::sub_domain).ok_or_else(|| {
        RegistryError::invalid(Field::Nested, "Invalid nested subdomain name", data.get("subdomain"))
    })?;
    let subdomain = subdomain.to_lowercase();

    let record = match data.get("record") {
        Some(Value::Object(record)) => normalize_record(record, RecordScope::Nested)
            .context(format!("nested subdomain \"{subdomain}\""))?,
        _ => {
            return Err(RegistryError::invalid(
                Field::Nested,
                "Invalid nested subdomain \"record\" property (must be an object)",
                Some(&Value::String(subdomain)),
            ));
        },
    };

    Ok(NestedDeclaration { proxy: proxy_flag(data), subdomain, record })
}

fn parse_owner(owner: &Map<String, Value>) -> Result<Owner> {
    Ok(Owner {
        repo: optional_str(owner, "repo", "Invalid owner repo property (must be a string)")?,
        email: optional_str(owner, "email", "Invalid owner email property (must be a string)")?,
    })
}

fn optional_str(data: &Map<String, Value>, key: &str, rule: &'static str) -> Result<Option<String>> {
    match data.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RegistryError::rule(Field::Owner, rule)),
    }
}

/// The field as a string, if it is one and passes `accept`.
fn checked_str<'a>(
    data: &'a Map<String, Value>,
    key: &str,
    accept: fn(&str) -> bool,
) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str).filter(|value| accept(value))
}

fn proxy_flag(data: &Map<String, Value>) -> bool {
    data.get("proxy").and_then(Value::as_bool).unwrap_or(true)
}

/// Canonical form of a configured denylist entry.
fn canonical_label(label: &str) -> String {
    label.to_lowercase().trim().to_owned()
}
