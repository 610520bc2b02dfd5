use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must use named fields, one for each component of the color.");
        }
        .into();
    }

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    // Make sure all the fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let name = struct_name.to_string().to_case(Case::Flat);

    let renders = field_names.iter().enumerate().map(|(i, field)| {
        let separator = if i == 0 {
            quote! {}
        } else {
            quote! { f.write_str(", ")?; }
        };
        quote! {
            #separator
            crate::models::Render::render(&self.#field, f)?;
        }
    });

    let model_impl = quote! {
        impl #struct_name {
            /// The name used when rendering a color in this model.
            pub const NAME: &'static str = #name;

            /// Create a new color in this model.
            ///
            /// The components are not range checked. Use [`crate::parse`] to
            /// build a validated color from text.
            pub fn new(#(#field_names: #field_types),*) -> Self {
                Self { #(#field_names),* }
            }
        }

        impl crate::models::Model for #struct_name {
            const FORMAT: crate::color::ColorFormat = crate::color::ColorFormat::#struct_name;

            fn to_color(&self) -> crate::color::Color {
                crate::color::Color::#struct_name(*self)
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }

        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(Self::NAME)?;
                f.write_str("(")?;
                #(#renders)*
                f.write_str(")")
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
