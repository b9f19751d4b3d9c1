use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

const CONTEXT_TYPES: [&str; 3] = [
    "Option<Cow<'static,str>>",
    "Option<std::borrow::Cow<'static,str>>",
    "std::option::Option<std::borrow::Cow<'static,str>>",
];

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    match expand_enum(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand_enum(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "subreg_error can only be applied to enums"));
    };

    let variants = data.variants.iter().map(inspect_variant).collect::<syn::Result<Vec<_>>>()?;

    let derives = missing_derives(input)?;
    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });
    let source_impls = variants.iter().filter_map(|v| source_impl(name, &ext, v));

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        pub type Result<T, E = #name> = ::std::result::Result<T, E>;

        pub trait #ext<T> {
            /// Attaches a human-readable context to the error, if any.
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            #[allow(unreachable_patterns)]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#context_arms)*
                        _ => {}
                    }
                    err
                })
            }
        }

        #(#source_impls)*

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(context: &Option<::std::borrow::Cow<'static, str>>) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| ::std::borrow::Cow::Owned(format!(" ({c})")))
        }
    })
}

fn inspect_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "subreg_error requires named fields for source/context handling",
        ));
    };

    let mut has_context = false;
    let mut source = None;

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else { continue };

        if ident == "context" {
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                ));
            }
            has_context = true;
        } else if source.is_none() && is_source(ident, field) {
            source = Some((ident, &field.ty));
        }
    }

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "subreg_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        ));
    }

    Ok(ErrorVariant {
        ident: &variant.ident,
        source,
        has_context,
        cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
    })
}

fn source_impl(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> ::std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn is_source(ident: &Ident, field: &Field) -> bool {
    ident == "source"
        || field.attrs.iter().any(|attr| attr.path().is_ident("source") || attr.path().is_ident("from"))
}

fn is_context_type(ty: &Type) -> bool {
    let rendered: String = quote!(#ty).to_string().split_whitespace().collect();
    CONTEXT_TYPES.contains(&rendered.as_str())
}

fn missing_derives(input: &DeriveInput) -> syn::Result<TokenStream> {
    let mut present = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                present.insert(segment.ident.to_string());
            }
            Ok(())
        })?;
    }

    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }

    Ok(if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } })
}
