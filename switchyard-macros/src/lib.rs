use proc_macro::TokenStream;

mod dispatchable;

/// Marks a function as dispatchable.
///
/// The function keeps its name and parameters but returns
/// `Result<R, switchyard::DispatchError>`. Each call is offered to the
/// installed backends first; if none takes it, the original body runs.
///
/// Parameters must be plain identifiers of owned types, and the function must
/// be neither generic nor `async`.
///
/// # Arguments
///
/// - `module = "..."`: module path used for the target identifier instead of
///   `module_path!()`.
///
/// # Example
///
/// ```rust,ignore
/// #[switchyard::dispatchable]
/// pub fn richardson_lucy(image: Image, psf: Image, options: RichardsonLucy) -> Image {
///     // ...
/// }
///
/// let restored = richardson_lucy(image, psf, RichardsonLucy::default())?;
/// ```
#[proc_macro_attribute]
pub fn dispatchable(attr: TokenStream, item: TokenStream) -> TokenStream {
    dispatchable::dispatchable_impl(attr, item)
}
