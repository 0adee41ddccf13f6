use core::any::{Any, TypeId, type_name};

// -----------------------------------------------------------------------------
// NamedField

/// A marshalled field of a struct.
///
/// # Examples
///
/// ```
/// use bt_marshal::{derive::Marshal, info::{Typed, struct_info_of}};
///
/// #[derive(Marshal, Default)]
/// struct ApiResult {
///     #[marshal(rename = "_rxid")]
///     rx_id: Option<String>,
///     line_number: u32,
/// }
///
/// let info = struct_info_of::<ApiResult>();
///
/// let rx_id = info.field_at(0).unwrap();
/// assert_eq!(rx_id.name(), "rxId");
/// assert_eq!(rx_id.rename(), Some("_rxid"));
///
/// let line = info.field("lineNumber").unwrap();
/// assert!(line.type_is::<u32>());
/// assert_eq!(line.rename(), None);
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    type_path: &'static str,
    name: &'static str,
    rename: Option<&'static str>,
}

impl NamedField {
    /// Creates a field declared as `name` with value type `T`.
    ///
    /// `name` is the camelCase declared name the naming policy converts.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
            name,
            rename: None,
        }
    }

    /// Sets a wire name used verbatim, bypassing the naming policy.
    #[inline]
    pub const fn with_rename(mut self, rename: &'static str) -> Self {
        self.rename = Some(rename);
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the wire-name override, if any.
    #[inline]
    pub const fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    /// Returns the `TypeId` of the field's value type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the type name of the field's value type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Check if the field holds a `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }
}
