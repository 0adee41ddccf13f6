use alloc::sync::Arc;
use core::fmt;
use std::sync::OnceLock;

use crate::NamingError;
use crate::info::StructInfo;
use crate::naming::{FieldNameCache, LowerCaseWithDash, NamingConverter};

// -----------------------------------------------------------------------------
// NamingPolicy

/// A naming converter together with the cache of wire names it produced.
///
/// Cloning is cheap and clones share the cache. Two independently created
/// policies never share entries, so a test can always start from a fresh one.
///
/// # Examples
///
/// ```
/// use bt_marshal::naming::{Identity, NamingPolicy};
///
/// let dashed = NamingPolicy::default();
/// assert_eq!(dashed.convert("suppressedExceptions"), "suppressed-exceptions");
///
/// let verbatim = NamingPolicy::new(Identity);
/// assert_eq!(verbatim.convert("suppressedExceptions"), "suppressedExceptions");
/// ```
#[derive(Clone)]
pub struct NamingPolicy {
    converter: Arc<dyn NamingConverter>,
    names: Arc<FieldNameCache>,
}

impl NamingPolicy {
    /// Creates a policy around `converter` with an empty cache.
    pub fn new<C: NamingConverter + 'static>(converter: C) -> Self {
        Self {
            converter: Arc::new(converter),
            names: Arc::new(FieldNameCache::new()),
        }
    }

    /// The engine-wide default policy, created on first use.
    pub fn shared() -> &'static NamingPolicy {
        static SHARED: OnceLock<NamingPolicy> = OnceLock::new();
        SHARED.get_or_init(NamingPolicy::default)
    }

    #[inline]
    pub fn converter(&self) -> &dyn NamingConverter {
        &*self.converter
    }

    #[inline]
    pub fn cache(&self) -> &FieldNameCache {
        &self.names
    }

    /// Converts a name that is not a declared field, such as a fixed shape key.
    #[inline]
    pub fn convert(&self, input: &str) -> String {
        self.converter.convert(input)
    }

    #[inline]
    pub fn convert_opt(&self, input: Option<&str>) -> Option<String> {
        self.converter.convert_opt(input)
    }

    /// Returns the cached wire name of a declared field.
    #[inline]
    pub fn field_name(&self, info: &StructInfo, field: &str) -> Result<Arc<str>, NamingError> {
        self.names.resolve(info, field, &*self.converter)
    }
}

impl Default for NamingPolicy {
    #[inline]
    fn default() -> Self {
        Self::new(LowerCaseWithDash)
    }
}

impl fmt::Debug for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingPolicy")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::NamingPolicy;
    use crate::info::{NamedField, StructInfo};

    struct Frame;

    #[test]
    fn clones_share_fresh_policies_do_not() {
        let info = StructInfo::new::<Frame>(&[NamedField::new::<u32>("lineNumber")]);

        let policy = NamingPolicy::default();
        let clone = policy.clone();
        assert_eq!(&*policy.field_name(&info, "lineNumber").unwrap(), "line-number");
        assert_eq!(clone.cache().len(), 1);

        let fresh = NamingPolicy::default();
        assert!(fresh.cache().is_empty());
    }

    #[test]
    fn shared_is_a_single_instance() {
        assert!(core::ptr::eq(NamingPolicy::shared(), NamingPolicy::shared()));
        assert_eq!(NamingPolicy::shared().convert("rxId"), "rx-id");
    }
}
