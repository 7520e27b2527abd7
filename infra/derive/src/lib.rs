#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the accessor workspace.
//!
//! Currently this is a single attribute macro, [`macro@xacc_error`], which turns a
//! plain enum into a `thiserror` error with context support. Every crate in the
//! workspace declares its error type with it so that errors read and chain the
//! same way everywhere.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a crate-level error enum.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait whose `.context(...)`
///   fills the `context` field of any variant that has one.
/// * **Source Conversions**: Implements `From<T>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is declared.
/// * **Formatting Helper**: Emits a private `format_context` function for use in
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant must use named fields.
/// 3. A `context` field, if present, must be `Option<Cow<'static, str>>`.
/// 4. A variant with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[xacc_derive::xacc_error]
/// pub enum ParseError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ParseError> {
///     std::fs::read_to_string(path).context("Reading accessor manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn xacc_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
