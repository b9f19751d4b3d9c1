//! # Subdomain Registry
//!
//! Validation and compilation engine for contributor-supplied subdomain declarations.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. [`Registrar::add_subdomain`] checks a raw JSON declaration against the
//!    [`validate`] predicates and the [`record`] rules, canonicalizes it and appends it
//!    to a [`Registry`].
//! 2. [`compile`] expands the registry into a [`CommitMap`] of record operations per
//!    root domain, using a [`RecordFactory`] to build each operation.
//! 3. [`CommitMap::submit`] hands each domain's operations to a [`CommitTarget`].
//!
//! The first failure aborts the run; nothing here retries or recovers.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use subreg_registry::{Registrar, Registry, StandardRecords, compile};
//!
//! let mut registry = Registry::new();
//! Registrar::new()
//!     .add_subdomain(
//!         &mut registry,
//!         json!({
//!             "domain": "is-an.app",
//!             "description": "desc!",
//!             "subdomain": "foo",
//!             "record": { "CNAME": "bar.example.com" }
//!         }),
//!     )
//!     .unwrap();
//!
//! let commit = compile(&registry, &StandardRecords).unwrap();
//! assert_eq!(commit.get("is-an.app").map(<[_]>::len), Some(1));
//! ```

pub mod commit;
pub mod compiler;
mod error;
pub mod record;
pub mod registrar;
pub mod registry;
pub mod validate;

pub use crate::commit::{CommitTarget, Submission};
pub use crate::compiler::{CommitMap, DomainCommit, RecordFactory, StandardRecords, compile};
pub use crate::error::{Field, RegistryError, RegistryErrorExt, Result};
pub use crate::record::{RecordScope, normalize_record, normalize_target};
pub use crate::registrar::{RawDeclaration, Registrar};
pub use crate::registry::Registry;
