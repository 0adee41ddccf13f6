//! Paths into `bt_marshal` used by generated code.

/// Get the path of the `bt_marshal` crate as seen from the deriving crate.
///
/// Reads the caller's Cargo.toml, so it is resolved once per derive.
pub(crate) fn bt_marshal() -> syn::Path {
    bt_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("bt_marshal"))
}
