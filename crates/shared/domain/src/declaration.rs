//! Normalized subdomain declarations as stored in the registry.

/// An accepted subdomain registration.
///
/// Instances are only built by the registrar, so every field is already canonical:
/// `subdomain` is lowercase, `proxy` is resolved, CNAME/NS targets end with
/// a single dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainDeclaration {
    pub domain: String,
    pub description: String,
    pub subdomain: String,
    pub owner: Option<Owner>,
    pub proxy: bool,
    pub record: RecordSet,
    pub nested: Vec<NestedDeclaration>,
}

impl SubdomainDeclaration {
    /// Fully-qualified host name, e.g. `foo.is-an.app` (or the bare domain for the apex).
    #[must_use]
    pub fn fqdn(&self) -> String {
        if self.subdomain == crate::constants::APEX {
            self.domain.clone()
        } else {
            format!("{}.{}", self.subdomain, self.domain)
        }
    }
}

/// A sub-subdomain declared inside a parent registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedDeclaration {
    pub subdomain: String,
    pub proxy: bool,
    pub record: RecordSet,
}

impl NestedDeclaration {
    /// Label relative to the root domain: `<nested>.<parent>`.
    #[must_use]
    pub fn qualified_label(&self, parent: &str) -> String {
        format!("{}.{parent}", self.subdomain)
    }
}

/// Informational owner metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    pub repo: Option<String>,
    pub email: Option<String>,
}

/// DNS records attached to a label.
///
/// `None` means the record type was not declared at all; an empty list is a declared
/// but empty record type and still counts as present for NS exclusivity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub txt: Option<Vec<String>>,
    pub a: Option<Vec<String>>,
    pub aaaa: Option<Vec<String>>,
    pub cname: Option<String>,
    pub ns: Option<Vec<String>>,
}

impl RecordSet {
    /// Number of record operations this set expands into.
    #[must_use]
    pub fn len(&self) -> usize {
        let lists = [&self.txt, &self.a, &self.aaaa, &self.ns];
        lists.into_iter().flatten().map(Vec::len).sum::<usize>() + usize::from(self.cname.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
