use proc_macro::TokenStream;
use syn::DeriveInput;
use quote::quote;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    // A static can't name the generic parameters, so generic components go through the shared table on every call.
    let body = if ast.generics.params.is_empty() {
        quote! {
            dense_ecs::lazy_static! {
                static ref COMPONENT_ID: dense_ecs::components::ComponentId =
                    dense_ecs::components::ComponentId::of_type::<#name>();
            }
            *COMPONENT_ID
        }
    } else {
        quote! {
            dense_ecs::components::ComponentId::of_type::<Self>()
        }
    };

    let gen = quote! {
        impl #impl_generics dense_ecs::components::Component for #name #ty_generics #where_clause {
            #[inline(always)]
            fn component_id() -> dense_ecs::components::ComponentId {
                #body
            }
        }
    };
    gen.into()
}
