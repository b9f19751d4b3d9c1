//! # Commit Compiler
//!
//! Expands the registry into per-domain lists of record operations.
//!
//! For each declaration, operations are emitted for TXT, A, AAAA, CNAME and NS in that
//! order, keyed by the unqualified subdomain label. Nested declarations follow their
//! parent, in declaration order, keyed by `<nested>.<parent>` and with their own proxy
//! mode. Domains appear in the [`CommitMap`] in the order they were first seen.

use crate::error::{RegistryErrorExt, Result};
use crate::registry::Registry;
use std::net::Ipv4Addr;
use subreg_domain::declaration::RecordSet;
use subreg_domain::record::{ProxyMode, RecordOp};
use tracing::info;

/// Builds record operations. The compiler never inspects what it gets back.
pub trait RecordFactory {
    type Op;
    type Ip;

    /// Converts a validated IPv4 literal into the representation A records need.
    ///
    /// # Errors
    /// Returns [`crate::RegistryError::Address`] if the literal is not an IPv4 address.
    fn ip(&self, literal: &str) -> Result<Self::Ip>;
    fn txt(&self, name: &str, value: &str) -> Self::Op;
    fn a(&self, name: &str, address: Self::Ip, proxy: ProxyMode) -> Self::Op;
    fn aaaa(&self, name: &str, address: &str, proxy: ProxyMode) -> Self::Op;
    fn cname(&self, name: &str, target: &str, proxy: ProxyMode) -> Self::Op;
    fn ns(&self, name: &str, target: &str) -> Self::Op;
}

/// Factory producing [`RecordOp`] values.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRecords;

impl RecordFactory for StandardRecords {
    type Op = RecordOp;
    type Ip = Ipv4Addr;

    fn ip(&self, literal: &str) -> Result<Ipv4Addr> {
        Ok(literal.parse::<Ipv4Addr>()?)
    }

    fn txt(&self, name: &str, value: &str) -> RecordOp {
        RecordOp::Txt { name: name.to_owned(), value: value.to_owned() }
    }

    fn a(&self, name: &str, address: Ipv4Addr, proxy: ProxyMode) -> RecordOp {
        RecordOp::A { name: name.to_owned(), address, proxy }
    }

    fn aaaa(&self, name: &str, address: &str, proxy: ProxyMode) -> RecordOp {
        RecordOp::Aaaa { name: name.to_owned(), address: address.to_owned(), proxy }
    }

    fn cname(&self, name: &str, target: &str, proxy: ProxyMode) -> RecordOp {
        RecordOp::Cname { name: name.to_owned(), target: target.to_owned(), proxy }
    }

    fn ns(&self, name: &str, target: &str) -> RecordOp {
        RecordOp::Ns { name: name.to_owned(), target: target.to_owned() }
    }
}

/// Operations for one root domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCommit<Op> {
    pub domain: String,
    pub records: Vec<Op>,
}

/// Root domain to record operations, in first-seen domain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMap<Op> {
    domains: Vec<DomainCommit<Op>>,
}

impl<Op> Default for CommitMap<Op> {
    fn default() -> Self {
        Self { domains: Vec::new() }
    }
}

impl<Op> CommitMap<Op> {
    fn entry(&mut self, domain: &str) -> &mut Vec<Op> {
        let index = match self.domains.iter().position(|commit| commit.domain == domain) {
            Some(index) => index,
            None => {
                self.domains.push(DomainCommit { domain: domain.to_owned(), records: Vec::new() });
                self.domains.len() - 1
            },
        };
        &mut self.domains[index].records
    }

    /// Operations for `domain`, if any declaration targets it.
    #[must_use]
    pub fn get(&self, domain: &str) -> Option<&[Op]> {
        self.domains.iter().find(|commit| commit.domain == domain).map(|c| c.records.as_slice())
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|commit| commit.domain.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DomainCommit<Op>> {
        self.domains.iter()
    }

    /// Number of domains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Number of operations across all domains.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.domains.iter().map(|commit| commit.records.len()).sum()
    }
}

impl<'a, Op> IntoIterator for &'a CommitMap<Op> {
    type Item = &'a DomainCommit<Op>;
    type IntoIter = std::slice::Iter<'a, DomainCommit<Op>>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}

/// Walks the registry once and expands every declaration into record operations.
///
/// # Errors
/// Returns [`crate::RegistryError::Address`] if the factory's IP constructor rejects an
/// A record value.
pub fn compile<F: RecordFactory>(registry: &Registry, factory: &F) -> Result<CommitMap<F::Op>> {
    let mut commit = CommitMap::default();

    for declaration in registry {
        let records = commit.entry(&declaration.domain);

        let proxy = ProxyMode::from(declaration.proxy);
        expand(factory, &declaration.subdomain, proxy, &declaration.record, records)?;

        for nested in &declaration.nested {
            let label = nested.qualified_label(&declaration.subdomain);
            expand(factory, &label, ProxyMode::from(nested.proxy), &nested.record, records)?;
        }
    }

    info!(
        domains = commit.len(),
        declarations = registry.len(),
        operations = commit.operation_count(),
        "Commit map compiled"
    );

    Ok(commit)
}

fn expand<F: RecordFactory>(
    factory: &F,
    name: &str,
    proxy: ProxyMode,
    record: &RecordSet,
    records: &mut Vec<F::Op>,
) -> Result<()> {
    for value in record.txt.iter().flatten() {
        records.push(factory.txt(name, value));
    }
    for address in record.a.iter().flatten() {
        let ip = factory.ip(address).context(format!("A record \"{address}\" of \"{name}\""))?;
        records.push(factory.a(name, ip, proxy));
    }
    for address in record.aaaa.iter().flatten() {
        records.push(factory.aaaa(name, address, proxy));
    }
    if let Some(target) = &record.cname {
        records.push(factory.cname(name, target, proxy));
    }
    for target in record.ns.iter().flatten() {
        records.push(factory.ns(name, target));
    }
    Ok(())
}
