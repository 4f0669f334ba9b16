//! Expansion of `#[derive(ErrorKind)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, ExprArray, Fields, Result};

/// The tags of the `error` attribute.
struct ReportTags {
    message: Expr,
    labels: Vec<Expr>,
    help: Option<Expr>,
}

impl ReportTags {
    /// Reads the tags from the `error` attribute of the item.
    fn from_input(input: &DeriveInput) -> Result<Self> {
        let attr = input.attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&input.ident, "missing `#[error(...)]` attribute"))?;

        let mut message = None;
        let mut labels = Vec::new();
        let mut help = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("message") {
                message = Some(meta.value()?.parse::<Expr>()?);
            } else if meta.path.is_ident("labels") {
                let array = meta.value()?.parse::<ExprArray>()?;
                labels = array.elems.into_iter().collect();
            } else if meta.path.is_ident("help") {
                help = Some(meta.value()?.parse::<Expr>()?);
            } else {
                return Err(meta.error("expected `message`, `labels`, or `help`"));
            }
            Ok(())
        })?;

        let message = message.ok_or_else(|| syn::Error::new_spanned(attr, "missing `message` tag"))?;
        Ok(Self { message, labels, help })
    }
}

/// Binds the fields of `self` by reference, so that the tags can name them.
fn bind_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
    };

    let name = &input.ident;
    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            Ok(quote! {
                #[allow(unused_variables)]
                let #name { #(#names),* } = self;
            })
        },
        Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
            fields,
            "`ErrorKind` cannot be derived for tuple structs",
        )),
        Fields::Unit => Ok(TokenStream::new()),
    }
}

/// Generates the `ErrorKind` implementation for the item.
pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let bindings = bind_fields(input)?;
    let ReportTags { message, labels, help } = ReportTags::from_input(input)?;
    let name = &input.ident;
    let help = help.map(|help| quote! { let builder = builder.with_help(#help); });

    Ok(quote! {
        impl symb_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> symb_error::ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                use symb_error::ariadne::{Label, Report, ReportKind};

                #bindings

                let labels: Vec<String> = vec![#((#labels).to_string()),*];
                let offset = spans.first().map_or(0, |span| span.start);
                let builder = Report::build(ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels.into_iter().zip(spans).map(|(label, span)| {
                        Label::new((src_id, span.clone()))
                            .with_color(symb_error::EXPR)
                            .with_message(label)
                    }));
                #help
                builder.finish()
            }
        }
    })
}
