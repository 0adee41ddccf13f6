use core::any::{Any, TypeId, type_name};

use bt_utils::hash::HashMap;

use crate::info::NamedField;

// -----------------------------------------------------------------------------
// StructInfo

/// The ordered field table of a struct.
///
/// Fields keep declaration order, which is also the key order of the
/// serialized object.
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty_id: TypeId,
    type_path: &'static str,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    /// Creates the table of `T` from its fields in declaration order.
    pub fn new<T: Any>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the `TypeId` of the described struct.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the type name of the described struct.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Check if this describes `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field declared as `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the field at `index` in declaration order.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Iterates the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the number of marshalled fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
