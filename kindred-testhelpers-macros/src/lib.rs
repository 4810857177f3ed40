//! `#[test]` that installs the shared tracing subscriber before the body runs.

use proc_macro2::{Delimiter, Group, TokenStream, TokenTree};
use quote::quote;

/// Marks a test function and calls `kindred_testhelpers::setup()` on entry.
///
/// ```ignore
/// use kindred_testhelpers::test;
///
/// #[test]
/// fn finds_nested_pointer() {
///     // events from the kernel are printed to stderr
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut tokens: Vec<TokenTree> = TokenStream::from(item).into_iter().collect();

    // the body is the trailing brace group of the function item
    let body = match tokens.pop() {
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => group,
        _ => {
            return quote! {
                ::core::compile_error!("#[kindred_testhelpers::test] expects a function item");
            }
            .into();
        }
    };

    let inner = body.stream();
    let mut new_body = Group::new(
        Delimiter::Brace,
        quote! {
            ::kindred_testhelpers::setup();
            #inner
        },
    );
    new_body.set_span(body.span());
    tokens.push(TokenTree::Group(new_body));

    let signature: TokenStream = tokens.into_iter().collect();
    quote! {
        #[::core::prelude::v1::test]
        #signature
    }
    .into()
}
