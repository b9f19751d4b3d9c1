use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Declaration field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Declaration,
    Domain,
    Description,
    Subdomain,
    Owner,
    Record,
    Txt,
    A,
    Aaaa,
    Cname,
    Ns,
    Nested,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Declaration => "declaration",
            Self::Domain => "domain",
            Self::Description => "description",
            Self::Subdomain => "subdomain",
            Self::Owner => "owner",
            Self::Record => "record",
            Self::Txt => "TXT",
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while registering or compiling declarations.
#[subreg_derive::subreg_error]
pub enum RegistryError {
    /// A declaration broke an acceptance rule. `message` is the user-facing rule text,
    /// `value` the offending input as the contributor wrote it.
    #[error("{message}{}", format_context(.context))]
    Validation {
        field: Field,
        value: Option<String>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The IP-literal constructor refused an address during compilation.
    #[error("Invalid IP literal{}: {source}", format_context(.context))]
    Address { source: std::net::AddrParseError, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// Rule violation that is not tied to a single offending value.
    pub(crate) fn rule(field: Field, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { field, value: None, message: message.into(), context: None }
    }

    /// Rule violation quoting the offending value: `<rule>: "<value>"`.
    pub(crate) fn invalid(field: Field, rule: &str, value: Option<&Value>) -> Self {
        let value = render(value);
        Self::Validation {
            field,
            message: format!("{rule}: \"{value}\"").into(),
            value: Some(value),
            context: None,
        }
    }

    /// Field the error refers to, if it is a validation failure.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::Address { .. } => Some(Field::A),
        }
    }

    /// Offending value as written in the declaration.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Validation { value, .. } => value.as_deref(),
            Self::Address { .. } => None,
        }
    }
}

/// Renders a raw value the way it reads in a declaration file. Strings are unquoted,
/// missing fields read as `undefined`.
fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_quotes_the_value() {
        let err = RegistryError::invalid(Field::Domain, "Invalid domain name", Some(&json!("x.io")));
        assert_eq!(err.to_string(), "Invalid domain name: \"x.io\"");
        assert_eq!(err.field(), Some(Field::Domain));
        assert_eq!(err.value(), Some("x.io"));
    }

    #[test]
    fn missing_value_reads_as_undefined() {
        let err = RegistryError::invalid(Field::Description, "Invalid subdomain description", None);
        assert_eq!(err.to_string(), "Invalid subdomain description: \"undefined\"");
    }

    #[test]
    fn non_string_values_render_as_json() {
        let err = RegistryError::invalid(Field::Subdomain, "Invalid subdomain name", Some(&json!(42)));
        assert_eq!(err.value(), Some("42"));
    }

    #[test]
    fn context_is_appended() {
        let result: Result<()> = Err(RegistryError::rule(Field::Record, "broken"));
        let err = result.context("domains/foo.json").unwrap_err();
        assert_eq!(err.to_string(), "broken (domains/foo.json)");
    }
}
