use alloc::sync::Arc;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use bt_utils::TypeIdMap;
use bt_utils::hash::HashMap;

use crate::NamingError;
use crate::info::StructInfo;
use crate::naming::NamingConverter;

type WireNames = HashMap<&'static str, Arc<str>>;

// -----------------------------------------------------------------------------
// FieldNameCache

/// Memoized wire names keyed by `(type, declared field name)`.
///
/// Entries are created on first lookup and never invalidated: a type's
/// field table is fixed for the life of the process. Concurrent first
/// lookups of the same entry may both derive it; the first insertion wins
/// and the other copy is dropped.
///
/// # Examples
///
/// ```
/// use bt_marshal::derive::Marshal;
/// use bt_marshal::info::struct_info_of;
/// use bt_marshal::naming::{FieldNameCache, LowerCaseWithDash};
///
/// #[derive(Marshal, Default)]
/// struct ApiResult {
///     #[marshal(rename = "_rxid")]
///     rx_id: String,
///     response_code: i32,
/// }
///
/// let cache = FieldNameCache::new();
/// let info = struct_info_of::<ApiResult>();
///
/// assert_eq!(&*cache.resolve(info, "rxId", &LowerCaseWithDash).unwrap(), "_rxid");
/// assert_eq!(&*cache.resolve(info, "responseCode", &LowerCaseWithDash).unwrap(), "response-code");
/// assert!(cache.resolve(info, "missing", &LowerCaseWithDash).is_err());
/// assert_eq!(cache.len(), 2);
/// ```
#[derive(Default)]
pub struct FieldNameCache {
    table: RwLock<TypeIdMap<WireNames>>,
}

impl FieldNameCache {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            table: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the wire name of `field` on the struct described by `info`.
    ///
    /// An override on the field is used verbatim; otherwise `converter`
    /// is applied to the declared name.
    pub fn resolve(
        &self,
        info: &StructInfo,
        field: &str,
        converter: &dyn NamingConverter,
    ) -> Result<Arc<str>, NamingError> {
        if let Some(wire_name) = self.lookup(info.ty_id(), field) {
            return Ok(wire_name);
        }

        let declared = info.field(field).ok_or_else(|| NamingError::UnknownField {
            type_path: info.type_path(),
            field: field.into(),
        })?;

        let wire_name: Arc<str> = match declared.rename() {
            Some(rename) => Arc::from(rename),
            None => Arc::from(converter.convert(declared.name())),
        };

        log::trace!(
            "wire name of `{}.{}` is `{wire_name}`",
            info.type_path(),
            declared.name()
        );

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let names = table.get_or_insert(info.ty_id(), WireNames::default);
        Ok(Arc::clone(names.entry(declared.name()).or_insert(wire_name)))
    }

    #[inline]
    fn lookup(&self, ty_id: TypeId, field: &str) -> Option<Arc<str>> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ty_id)?
            .get(field)
            .cloned()
    }

    /// Returns the number of cached `(type, field)` entries.
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(WireNames::len)
            .sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl core::fmt::Debug for FieldNameCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldNameCache")
            .field("len", &self.len())
            .finish()
    }
}
