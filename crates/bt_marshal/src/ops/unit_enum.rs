use crate::Marshal;
use crate::info::{EnumInfo, Typed, enum_info_of};

// -----------------------------------------------------------------------------
// UnitEnum

/// A fieldless enum, written as the wire name of its variant.
pub trait UnitEnum: Marshal + Typed + Sized {
    /// Index of `self` in declaration order.
    fn variant_index(&self) -> usize;

    fn from_variant_index(index: usize) -> Option<Self>;

    #[inline]
    fn enum_info() -> &'static EnumInfo {
        enum_info_of::<Self>()
    }

    /// The wire name of `self`.
    #[inline]
    fn variant_name(&self) -> &'static str {
        Self::enum_info()
            .variant_at(self.variant_index())
            .unwrap_or_default()
    }
}
