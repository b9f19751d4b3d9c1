//! JSON commit plan, the shipped [`CommitTarget`].

use serde::Serialize;
use std::borrow::Cow;
use std::convert::Infallible;
use std::io::Write;
use subreg_domain::record::RecordOp;
use subreg_registry::CommitTarget;

#[subreg_derive::subreg_error]
pub enum PlanError {
    #[error("Cannot serialize plan{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Cannot write plan{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// One submitted domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub domain: String,
    pub registrar: String,
    pub provider: String,
    pub records: Vec<RecordOp>,
}

/// Collects submissions and renders them as a JSON array.
#[derive(Debug, Default)]
pub struct JsonPlan {
    entries: Vec<PlanEntry>,
}

impl JsonPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Writes the plan to `writer`, followed by a newline.
    ///
    /// # Errors
    /// Returns [`PlanError`] if serialization or the write fails.
    pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> Result<(), PlanError> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut writer, &self.entries)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl CommitTarget<RecordOp> for JsonPlan {
    type Error = Infallible;

    fn submit(
        &mut self,
        domain: &str,
        registrar: &str,
        provider: &str,
        records: &[RecordOp],
    ) -> Result<(), Infallible> {
        self.entries.push(PlanEntry {
            domain: domain.to_owned(),
            registrar: registrar.to_owned(),
            provider: provider.to_owned(),
            records: records.to_vec(),
        });
        Ok(())
    }
}
