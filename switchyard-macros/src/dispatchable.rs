//! The `#[dispatchable]` attribute.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, Pat, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
    spanned::Spanned,
};

/// Arguments for the `#[dispatchable]` macro.
pub(crate) struct DispatchableArgs {
    /// Override for the declaring module path.
    pub module: Option<LitStr>,
}

impl Parse for DispatchableArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut module = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "module" => {
                    module = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(DispatchableArgs { module })
    }
}

/// Implementation of the `#[dispatchable]` macro.
pub(crate) fn dispatchable_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as DispatchableArgs);
    let input = parse_macro_input!(item as ItemFn);

    match expand(&args, &input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: &DispatchableArgs, input: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let sig = &input.sig;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "dispatchable functions cannot be async",
        ));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "dispatchable functions cannot be generic",
        ));
    }

    let mut arg_names = Vec::new();
    let mut arg_pats = Vec::new();
    let mut arg_types = Vec::new();

    for arg in &sig.inputs {
        match arg {
            FnArg::Typed(pat_type) => match &*pat_type.pat {
                Pat::Ident(pat_ident)
                    if pat_ident.subpat.is_none() && pat_ident.by_ref.is_none() =>
                {
                    arg_names.push(pat_ident.ident.clone());
                    arg_pats.push(&pat_type.pat);
                    arg_types.push(&pat_type.ty);
                }
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "dispatchable function parameters must be plain identifiers",
                    ));
                }
            },
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "dispatchable functions cannot take self",
                ));
            }
        }
    }

    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &sig.ident;
    let fn_name_str = fn_name.to_string();
    let inputs = &sig.inputs;
    let block = &input.block;

    let output_type = match &sig.output {
        syn::ReturnType::Default => quote! { () },
        syn::ReturnType::Type(_, ty) => quote! { #ty },
    };

    let module = match &args.module {
        Some(lit) => quote! { #lit },
        None => quote! { ::core::module_path!() },
    };

    Ok(quote! {
        #(#attrs)*
        #vis fn #fn_name(#inputs)
            -> ::core::result::Result<#output_type, ::switchyard::DispatchError>
        {
            #[allow(unused_mut)]
            fn __original((#(#arg_pats,)*): (#(#arg_types,)*)) -> #output_type #block

            static __DISPATCH: ::std::sync::LazyLock<
                ::switchyard::Dispatchable<(#(#arg_types,)*), #output_type>,
            > = ::std::sync::LazyLock::new(|| {
                ::switchyard::Dispatchable::new(
                    ::switchyard::TargetId::for_function(#module, #fn_name_str),
                    __original,
                )
            });

            __DISPATCH.call((#(#arg_names,)*))
        }
    })
}
