#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! subreg-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Type Aliasing**: Emits `pub type Result<T, E = ErrorName>` next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses named fields.
/// 3. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[subreg_derive::subreg_error]
/// pub enum LoadError {
///     #[error("Failed to read declaration{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String> {
///     std::fs::read_to_string(path).context(path.display().to_string())
/// }
/// ```
#[proc_macro_attribute]
pub fn subreg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
