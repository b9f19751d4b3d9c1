//! Discovery and parsing of declaration files.

use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use subreg_registry::RawDeclaration;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[subreg_derive::subreg_error]
pub enum LoadError {
    #[error("Cannot walk declarations{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    #[error("Cannot read declaration{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed declaration{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Reads every `*.<extension>` file under `dir`, recursively, in lexical path order.
///
/// Each file holds one declaration; the file path becomes its origin. Other files are
/// skipped with a warning.
///
/// # Errors
/// Returns the first [`LoadError`]: an unreadable directory or file, or a file that is
/// not valid JSON.
pub fn load_declarations(dir: &Path, extension: &str) -> Result<Vec<RawDeclaration>, LoadError> {
    let mut declarations = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.context(dir.display().to_string())?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            warn!(path = %path.display(), "Skipping non-declaration file");
            continue;
        }

        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).context(origin.clone())?;
        let value: Value = serde_json::from_str(&contents).context(origin.clone())?;

        declarations.push(RawDeclaration::new(origin, value));
    }

    debug!(dir = %dir.display(), files = declarations.len(), "Declarations loaded");

    Ok(declarations)
}
