mod enum_impl;
mod struct_impl;

use proc_macro2::TokenStream;

use crate::derive_data::MarshalDerive;

pub(crate) fn impl_marshal(data: &MarshalDerive, bt_marshal: &syn::Path) -> TokenStream {
    match data {
        MarshalDerive::Struct(info) => struct_impl::impl_struct(info, bt_marshal),
        MarshalDerive::UnitEnum(info) => enum_impl::impl_unit_enum(info, bt_marshal),
    }
}
