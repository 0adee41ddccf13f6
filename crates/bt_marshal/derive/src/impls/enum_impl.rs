use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::MarshalEnum;

/// Implements `Typed`, `Marshal` and `UnitEnum` for a fieldless enum.
pub(crate) fn impl_unit_enum(info: &MarshalEnum, bt_marshal: &syn::Path) -> TokenStream {
    let ident = info.ident;
    let ignore_case = info.ignore_case;

    let variants: Vec<&syn::Ident> = info.variants.iter().map(|v| v.ident).collect();
    let wires: Vec<&String> = info.variants.iter().map(|v| &v.wire).collect();
    let indices: Vec<Literal> = (0..variants.len()).map(Literal::usize_unsuffixed).collect();

    quote! {
        impl #bt_marshal::info::Typed for #ident {
            fn type_info() -> &'static #bt_marshal::info::TypeInfo {
                static CELL: #bt_marshal::info::NonGenericTypeInfoCell =
                    #bt_marshal::info::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    #bt_marshal::info::TypeInfo::Enum(
                        #bt_marshal::info::EnumInfo::new::<Self>(&[ #(#wires),* ])
                            .with_ignore_case(#ignore_case)
                    )
                })
            }
        }

        impl #bt_marshal::Marshal for #ident {
            fn marshal_ref(&self) -> #bt_marshal::MarshalRef<'_> {
                let name = match self {
                    #( Self::#variants => #wires, )*
                };
                #bt_marshal::MarshalRef::Scalar(#bt_marshal::Scalar::Str(name))
            }

            #[inline]
            fn apply_json(
                &mut self,
                value: &#bt_marshal::serde_json::Value,
                _driver: &#bt_marshal::de::DeserializeDriver<'_>,
            ) -> ::core::result::Result<(), #bt_marshal::DeserializeError> {
                #bt_marshal::de::apply_unit_enum(self, value)
            }
        }

        impl #bt_marshal::ops::UnitEnum for #ident {
            #[inline]
            fn variant_index(&self) -> usize {
                match self {
                    #( Self::#variants => #indices, )*
                }
            }

            #[inline]
            fn from_variant_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #( #indices => ::core::option::Option::Some(Self::#variants), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
