use core::any::TypeId;

use crate::info::{EnumInfo, StructInfo};

// -----------------------------------------------------------------------------
// TypeInfo

/// The static description of a derived type.
#[derive(Clone, Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
}

impl TypeInfo {
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        match self {
            Self::Struct(info) => info.ty_id(),
            Self::Enum(info) => info.ty_id(),
        }
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        match self {
            Self::Struct(info) => info.type_path(),
            Self::Enum(info) => info.type_path(),
        }
    }

    #[inline]
    pub const fn as_struct(&self) -> Option<&StructInfo> {
        match self {
            Self::Struct(info) => Some(info),
            Self::Enum(_) => None,
        }
    }

    #[inline]
    pub const fn as_enum(&self) -> Option<&EnumInfo> {
        match self {
            Self::Enum(info) => Some(info),
            Self::Struct(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Typed

/// A type with a `'static` [`TypeInfo`].
///
/// Implemented by `#[derive(Marshal)]`; manual impls should keep the info
/// in a [`NonGenericTypeInfoCell`](crate::info::NonGenericTypeInfoCell) or a
/// [`GenericTypeInfoCell`](crate::info::GenericTypeInfoCell).
pub trait Typed: 'static {
    fn type_info() -> &'static TypeInfo;
}

/// Returns the field table of `T`.
///
/// # Panics
///
/// If `T` is described as something other than a struct, which a derived
/// impl never does.
#[inline]
pub fn struct_info_of<T: Typed>() -> &'static StructInfo {
    let info = T::type_info();
    match info.as_struct() {
        Some(info) => info,
        None => panic!("`{}` is not described as a struct", info.type_path()),
    }
}

/// Returns the variant table of `T`.
///
/// # Panics
///
/// If `T` is described as something other than an enum, which a derived
/// impl never does.
#[inline]
pub fn enum_info_of<T: Typed>() -> &'static EnumInfo {
    let info = T::type_info();
    match info.as_enum() {
        Some(info) => info,
        None => panic!("`{}` is not described as an enum", info.type_path()),
    }
}
