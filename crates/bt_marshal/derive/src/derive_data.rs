use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr, Type};

use crate::MARSHAL_ATTRIBUTE_NAME;
use crate::naming::declared_name;

// -----------------------------------------------------------------------------
// Derive input

pub(crate) enum MarshalDerive<'a> {
    Struct(MarshalStruct<'a>),
    UnitEnum(MarshalEnum<'a>),
}

pub(crate) struct MarshalStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    /// Fields that take part in marshalling, in declaration order.
    pub fields: Vec<MarshalField<'a>>,
}

pub(crate) struct MarshalField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub declared: String,
    pub rename: Option<LitStr>,
}

pub(crate) struct MarshalEnum<'a> {
    pub ident: &'a Ident,
    pub ignore_case: bool,
    pub variants: Vec<MarshalVariant<'a>>,
}

pub(crate) struct MarshalVariant<'a> {
    pub ident: &'a Ident,
    pub wire: String,
}

impl<'a> MarshalDerive<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let container = ContainerAttrs::parse(&ast.attrs)?;

        match &ast.data {
            Data::Struct(data) => {
                let Fields::Named(named) = &data.fields else {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`Marshal` can only be derived for structs with named fields",
                    ));
                };
                if container.ignore_case {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`ignore_case` only applies to enums",
                    ));
                }

                let mut fields: Vec<MarshalField<'a>> = Vec::with_capacity(named.named.len());
                for field in &named.named {
                    let attrs = FieldAttrs::parse(&field.attrs)?;
                    if attrs.skip {
                        continue;
                    }
                    // Named fields always carry an identifier.
                    let Some(ident) = field.ident.as_ref() else {
                        continue;
                    };
                    let declared = declared_name(ident);
                    if let Some(other) = fields.iter().find(|f| f.declared == declared) {
                        return Err(syn::Error::new_spanned(
                            ident,
                            format!(
                                "field `{ident}` declares the name `{declared}`, already declared by `{}`",
                                other.ident
                            ),
                        ));
                    }
                    fields.push(MarshalField {
                        ident,
                        ty: &field.ty,
                        declared,
                        rename: attrs.rename,
                    });
                }

                Ok(Self::Struct(MarshalStruct {
                    ident: &ast.ident,
                    generics: &ast.generics,
                    fields,
                }))
            }
            Data::Enum(data) => {
                if !ast.generics.params.is_empty() {
                    return Err(syn::Error::new_spanned(
                        &ast.generics,
                        "`Marshal` cannot be derived for generic enums",
                    ));
                }
                if data.variants.is_empty() {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`Marshal` cannot be derived for enums without variants",
                    ));
                }

                let mut variants = Vec::with_capacity(data.variants.len());
                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new_spanned(
                            variant,
                            "`Marshal` can only be derived for fieldless enums",
                        ));
                    }
                    let attrs = VariantAttrs::parse(&variant.attrs)?;
                    let wire = match attrs.rename {
                        Some(lit) => lit.value(),
                        None => variant.ident.to_string(),
                    };
                    variants.push(MarshalVariant {
                        ident: &variant.ident,
                        wire,
                    });
                }

                Ok(Self::UnitEnum(MarshalEnum {
                    ident: &ast.ident,
                    ignore_case: container.ignore_case,
                    variants,
                }))
            }
            Data::Union(_) => Err(syn::Error::new_spanned(
                &ast.ident,
                "`Marshal` cannot be derived for unions",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// Attributes

#[derive(Default)]
struct ContainerAttrs {
    ignore_case: bool,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in marshal_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore_case") {
                    out.ignore_case = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported container attribute, expected `ignore_case`"))
                }
            })?;
        }
        Ok(out)
    }
}

#[derive(Default)]
struct FieldAttrs {
    rename: Option<LitStr>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in marshal_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if out.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    out.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `rename` or `skip`"))
                }
            })?;
        }
        if out.skip && out.rename.is_some() {
            return Err(syn::Error::new_spanned(
                &attrs[0],
                "`skip` and `rename` cannot be combined",
            ));
        }
        Ok(out)
    }
}

#[derive(Default)]
struct VariantAttrs {
    rename: Option<LitStr>,
}

impl VariantAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in marshal_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported variant attribute, expected `rename`"))
                }
            })?;
        }
        Ok(out)
    }
}

fn marshal_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(MARSHAL_ATTRIBUTE_NAME))
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::MarshalDerive;

    fn error_of(ast: &DeriveInput) -> String {
        match MarshalDerive::from_ast(ast) {
            Ok(_) => panic!("derive input was accepted"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn declared_names_follow_field_order() {
        let ast: DeriveInput = parse_quote! {
            struct ApiResult {
                #[marshal(rename = "_rxid")]
                rx_id: Option<String>,
                #[marshal(skip)]
                cached: u8,
                response: Option<String>,
            }
        };
        let MarshalDerive::Struct(info) = MarshalDerive::from_ast(&ast).unwrap() else {
            panic!("expected a struct");
        };
        let declared: Vec<_> = info.fields.iter().map(|f| f.declared.as_str()).collect();
        assert_eq!(declared, ["rxId", "response"]);
        assert_eq!(info.fields[0].rename.as_ref().map(|lit| lit.value()).as_deref(), Some("_rxid"));
    }

    #[test]
    fn duplicate_declared_names_are_rejected() {
        let ast: DeriveInput = parse_quote! {
            struct ApiResult {
                _rxid: String,
                rxid: String,
            }
        };
        let message = error_of(&ast);
        assert!(message.contains("`rxid`"), "{message}");
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        assert!(error_of(&parse_quote!(struct Pair(u8, u8);)).contains("named fields"));
        assert!(error_of(&parse_quote!(enum Shape { Circle(f32) })).contains("fieldless"));
        assert!(error_of(&parse_quote!(enum Never {})).contains("without variants"));
        assert!(error_of(&parse_quote!(#[marshal(ignore_case)] struct S { a: u8 })).contains("only applies to enums"));
    }
}
