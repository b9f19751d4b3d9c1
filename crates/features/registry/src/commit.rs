//! Hand-off of a compiled [`CommitMap`] to a DNS provider layer.

use crate::compiler::CommitMap;
use tracing::debug;

/// Receiver of per-domain record lists (registrar/provider submission).
pub trait CommitTarget<Op> {
    type Error;

    /// Submits the records of one root domain.
    ///
    /// # Errors
    /// Implementation-defined; the first error aborts the remaining submissions.
    fn submit(
        &mut self,
        domain: &str,
        registrar: &str,
        provider: &str,
        records: &[Op],
    ) -> Result<(), Self::Error>;
}

/// Registrar and provider handles passed with every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<'a> {
    pub registrar: &'a str,
    pub provider: &'a str,
}

impl<Op> CommitMap<Op> {
    /// Submits every domain to `target`, in map order.
    ///
    /// # Returns
    /// The number of domains submitted.
    ///
    /// # Errors
    /// Returns the target's first error.
    pub fn submit<T>(&self, submission: &Submission<'_>, target: &mut T) -> Result<usize, T::Error>
    where
        T: CommitTarget<Op>,
    {
        for commit in self {
            debug!(
                domain = %commit.domain,
                registrar = submission.registrar,
                provider = submission.provider,
                records = commit.records.len(),
                "Submitting domain"
            );
            target.submit(&commit.domain, submission.registrar, submission.provider, &commit.records)?;
        }
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Registrar, Registry, StandardRecords, compile};
    use serde_json::json;
    use subreg_domain::record::RecordOp;

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<(String, String, String, usize)>,
        fail_on: Option<&'static str>,
    }

    impl CommitTarget<RecordOp> for Recorder {
        type Error = String;

        fn submit(
            &mut self,
            domain: &str,
            registrar: &str,
            provider: &str,
            records: &[RecordOp],
        ) -> Result<(), String> {
            if self.fail_on == Some(domain) {
                return Err(format!("provider rejected {domain}"));
            }
            self.calls.push((domain.to_owned(), registrar.to_owned(), provider.to_owned(), records.len()));
            Ok(())
        }
    }

    fn compiled() -> CommitMap<RecordOp> {
        let mut registry = Registry::new();
        Registrar::new()
            .register_all(
                &mut registry,
                [
                    json!({ "domain": "is-an.app", "description": "first one", "subdomain": "one", "record": { "TXT": ["a", "b"] } }),
                    json!({ "domain": "1bt.uk", "description": "second one", "subdomain": "two", "record": { "CNAME": "x.example.com" } }),
                ],
            )
            .unwrap();
        compile(&registry, &StandardRecords).unwrap()
    }

    #[test]
    fn submits_each_domain_once_in_order() {
        let mut recorder = Recorder::default();
        let submission = Submission { registrar: "none", provider: "cloudflare" };

        let submitted = compiled().submit(&submission, &mut recorder).unwrap();

        assert_eq!(submitted, 2);
        assert_eq!(
            recorder.calls,
            [
                ("is-an.app".to_owned(), "none".to_owned(), "cloudflare".to_owned(), 2),
                ("1bt.uk".to_owned(), "none".to_owned(), "cloudflare".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn first_target_error_stops_submission() {
        let mut recorder = Recorder { fail_on: Some("is-an.app"), ..Recorder::default() };
        let submission = Submission { registrar: "none", provider: "cloudflare" };

        let err = compiled().submit(&submission, &mut recorder).unwrap_err();

        assert_eq!(err, "provider rejected is-an.app");
        assert!(recorder.calls.is_empty());
    }
}
