use crate::Marshal;
use crate::info::StructInfo;

// -----------------------------------------------------------------------------
// Struct

/// A structured object whose fields are listed in a [`StructInfo`].
///
/// Field names are the declared names of the table, not wire names.
pub trait Struct: Marshal {
    fn struct_info(&self) -> &'static StructInfo;

    fn field(&self, name: &str) -> Option<&dyn Marshal>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Marshal>;

    /// Returns the field at `index` in declaration order.
    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Marshal> {
        self.field(self.struct_info().field_at(index)?.name())
    }
}
