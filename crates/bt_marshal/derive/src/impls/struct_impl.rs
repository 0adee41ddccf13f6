use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, parse_quote};

use crate::derive_data::MarshalStruct;

/// Implements `Typed`, `Marshal` and `Struct` for a struct with named fields.
pub(crate) fn impl_struct(info: &MarshalStruct, bt_marshal: &syn::Path) -> TokenStream {
    let ident = info.ident;

    // Generic structs need `'static` params and marshal-able field types.
    let mut generics = info.generics.clone();
    if !generics.params.is_empty() {
        let mut predicates: Vec<syn::WherePredicate> = Vec::new();
        for param in &generics.params {
            if let GenericParam::Type(param) = param {
                let param = &param.ident;
                predicates.push(parse_quote!(#param: ::core::marker::Send + ::core::marker::Sync + 'static));
            }
        }
        for field in &info.fields {
            let ty = field.ty;
            predicates.push(parse_quote!(#ty: #bt_marshal::Marshal));
        }
        generics.make_where_clause().predicates.extend(predicates);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_table = info.fields.iter().map(|field| {
        let ty = field.ty;
        let declared = &field.declared;
        match &field.rename {
            Some(rename) => quote! {
                #bt_marshal::info::NamedField::new::<#ty>(#declared).with_rename(#rename)
            },
            None => quote! {
                #bt_marshal::info::NamedField::new::<#ty>(#declared)
            },
        }
    });
    let build_info = quote! {
        #bt_marshal::info::TypeInfo::Struct(
            #bt_marshal::info::StructInfo::new::<Self>(&[ #(#field_table),* ])
        )
    };
    let type_info_body = if info.generics.params.is_empty() {
        quote! {
            static CELL: #bt_marshal::info::NonGenericTypeInfoCell =
                #bt_marshal::info::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| #build_info)
        }
    } else {
        quote! {
            static CELL: #bt_marshal::info::GenericTypeInfoCell =
                #bt_marshal::info::GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| #build_info)
        }
    };

    let declared: Vec<&String> = info.fields.iter().map(|f| &f.declared).collect();
    let members: Vec<&syn::Ident> = info.fields.iter().map(|f| f.ident).collect();

    quote! {
        impl #impl_generics #bt_marshal::info::Typed for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #bt_marshal::info::TypeInfo {
                #type_info_body
            }
        }

        impl #impl_generics #bt_marshal::Marshal for #ident #ty_generics #where_clause {
            #[inline]
            fn marshal_ref(&self) -> #bt_marshal::MarshalRef<'_> {
                #bt_marshal::MarshalRef::Struct(self)
            }

            #[inline]
            fn apply_json(
                &mut self,
                value: &#bt_marshal::serde_json::Value,
                driver: &#bt_marshal::de::DeserializeDriver<'_>,
            ) -> ::core::result::Result<(), #bt_marshal::DeserializeError> {
                driver.apply_struct(self, value)
            }
        }

        impl #impl_generics #bt_marshal::ops::Struct for #ident #ty_generics #where_clause {
            #[inline]
            fn struct_info(&self) -> &'static #bt_marshal::info::StructInfo {
                #bt_marshal::info::struct_info_of::<Self>()
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn #bt_marshal::Marshal> {
                match name {
                    #( #declared => ::core::option::Option::Some(&self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #bt_marshal::Marshal> {
                match name {
                    #( #declared => ::core::option::Option::Some(&mut self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
