//! Derive macro for `bt_marshal`.
//!
//! See [`Marshal`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static MARSHAL_ATTRIBUTE_NAME: &str = "marshal";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod naming;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// Derives `Marshal` together with its field or variant table.
///
/// Supported shapes:
///
/// - Structs with named fields: `Typed`, `Marshal` and `Struct` are
///   implemented. Each field is declared under the camelCase form of its
///   identifier (`line_number` declares `lineNumber`), which the naming
///   policy turns into the wire name.
/// - Fieldless enums: `Typed`, `Marshal` and `UnitEnum` are implemented.
///   Values are written as the variant name.
///
/// # Attributes
///
/// - `#[marshal(rename = "wire")]` on a field or variant: use `"wire"`
///   verbatim, bypassing the naming policy.
/// - `#[marshal(skip)]` on a field: neither written nor read; the field
///   keeps its `Default` value on deserialize.
/// - `#[marshal(ignore_case)]` on an enum: accept variant names in any case.
///
/// # Examples
///
/// ```ignore
/// #[derive(Marshal, Default)]
/// struct ApiResult {
///     #[marshal(rename = "_rxid")]
///     rx_id: Option<String>,
///     response: Option<String>,
///     #[marshal(skip)]
///     received_at: Option<std::time::Instant>,
/// }
///
/// #[derive(Marshal, Default)]
/// #[marshal(ignore_case)]
/// enum ResultStatus {
///     ServerError,
///     #[default]
///     Ok,
/// }
/// ```
#[proc_macro_derive(Marshal, attributes(marshal))]
pub fn derive_marshal(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let data = match derive_data::MarshalDerive::from_ast(&ast) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    let bt_marshal_path = path::bt_marshal();
    impls::impl_marshal(&data, &bt_marshal_path).into()
}
