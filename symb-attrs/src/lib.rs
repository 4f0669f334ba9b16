//! Derive macro for the `ErrorKind` trait of `symb-error`.

mod report;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `symb_error::ErrorKind` for a struct, building its report from the `error` attribute.
///
/// ```
/// use symb_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown variable `{}`", name),
///     labels = ["this variable", "first used here"],
///     help = "variables must be declared before they are used",
/// )]
/// pub struct UnknownVariable {
///     name: String,
/// }
/// ```
///
/// | Tag       | Description                                                                |
/// | --------- | -------------------------------------------------------------------------- |
/// | `message` | Required. The message displayed at the top of the report.                  |
/// | `labels`  | An array of label texts, one per span of the error, in the same order.     |
/// | `help`    | Help text describing what the user can do to fix the error.                |
///
/// Each tag is an expression whose value implements [`ToString`]. The fields of the struct are in
/// scope, by reference, while the tags are evaluated. Tuple structs, enums, and unions are
/// rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn derive_error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    report::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
