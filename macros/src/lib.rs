use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;

/// Generate a color notation model from a struct with exactly 3 named
/// component fields. The model gets an `alpha` field, a `new` constructor,
/// `to_array` and a `Display` implementation that writes the CSS-like
/// functional notation, e.g. `hsb(120, 50, 40)` or `hsba(120, 50, 40, 0.5)`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);
    expand_model(input).into()
}

fn expand_model(mut input: syn::ItemStruct) -> TokenStream2 {
    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model components must be named fields.");
        };
    }

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        };
    }

    let (field_names, field_types): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];
    let type1 = &field_types[0];
    let type2 = &field_types[1];
    let type3 = &field_types[2];

    if let syn::Fields::Named(ref mut named) = input.fields {
        // Make sure the 3 specified fields are public.
        named.named.iter_mut().for_each(|f| {
            f.vis = syn::Visibility::Public(Default::default());
        });

        named.named.push(
            syn::Field::parse_named
                .parse2(quote! {
                    /// The alpha component of the color, in the range `[0, 1]`.
                    pub alpha: crate::color::Component
                })
                .unwrap(),
        );
    }

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let keyword = struct_name.to_string().to_case(Case::Lower);

    let model_impl = quote! {
        impl #struct_name {
            /// Keyword used when writing this model as a string.
            pub const KEYWORD: &'static str = #keyword;

            /// Create a new color in this notation.
            pub fn new(
                #field1: #type1,
                #field2: #type2,
                #field3: #type3,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }

            /// Return the 3 components followed by alpha.
            pub fn to_array(&self) -> [crate::color::Component; 4] {
                [
                    crate::color::Component::from(self.#field1),
                    crate::color::Component::from(self.#field2),
                    crate::color::Component::from(self.#field3),
                    self.alpha,
                ]
            }
        }

        impl ::std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.alpha == 1.0 {
                    write!(
                        f,
                        "{}({}, {}, {})",
                        Self::KEYWORD,
                        self.#field1,
                        self.#field2,
                        self.#field3
                    )
                } else {
                    write!(
                        f,
                        "{}a({}, {}, {}, {})",
                        Self::KEYWORD,
                        self.#field1,
                        self.#field2,
                        self.#field3,
                        self.alpha
                    )
                }
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
}
