use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, Type, Variant,
};

struct VariantInfo<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<Attribute>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("xacc_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<Result<Vec<_>, _>>()
    {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    if let Some(v) = variants.iter().find(|v| v.source.is_some() && !v.has_context) {
        return syn::Error::new_spanned(
            v.ident,
            "xacc_error requires `context: Option<Cow<'static, str>>` next to a source field",
        )
        .to_compile_error();
    }

    let present = existing_derives(&input.attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }
    let derive_attr = if derives.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derives),*)] }
    };

    let ext_trait = context_trait(name, &ext, &variants);
    let conversions = variants.iter().filter_map(|v| source_conversion(name, &ext, v));
    let internal = internal_conversions(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #ext_trait
        #(#conversions)*
        #internal

        #[allow(dead_code)]
        fn format_context(
            context: &Option<std::borrow::Cow<'static, str>>,
        ) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| {
                std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<VariantInfo<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "xacc_error requires named fields on every variant",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = source_field(fields).and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));
    let cfg = variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect();

    Ok(VariantInfo { ident: &variant.ident, source, has_context, cfg })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(None);
    };
    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|ident| ident == "source")
            || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
    })
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg = &v.cfg;
        let ident = v.ident;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #arms )*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_conversion(name: &Ident, ext: &Ident, v: &VariantInfo<'_>) -> Option<TokenStream> {
    if v.ident == "Internal" {
        return None;
    }
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfg = &v.cfg;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg)*
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_conversions(name: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal") else {
        return quote!();
    };
    let cfg = &internal.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None }
            }
        }
        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(s), context: None }
            }
        }
    }
}

fn existing_derives(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut found = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                found.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    found
}

/// Matches `Option<Cow<'static, str>>`, with or without path prefixes.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(inner) = single_generic(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Cow" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    let mut args = args.args.iter();
    let static_lifetime =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_type = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );
    static_lifetime && str_type
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
