/// Registers a backend with the process-wide plugin surface.
///
/// The expression is evaluated the first time the backend is loaded, and the
/// instance is reused afterwards. With `info = ...`, the given expression is
/// registered under the same name and evaluated the first time the registry
/// needs it. It must produce a
/// [`Result<BackendInfo, E>`](switchyard_core::BackendInfo) with `E` convertible
/// into a boxed error; an `Err` is returned from the dispatched call.
///
/// # Example
/// ```rust,ignore
/// register_backend!("simd", SimdBackend::new());
///
/// register_backend!(
///     "gpu",
///     GpuBackend::default(),
///     info = BackendInfo::parse(["switchyard_image.restoration:richardson_lucy"])
/// );
/// ```
#[macro_export]
macro_rules! register_backend {
    ($name:literal, $backend:expr) => {
        $crate::inventory::submit! {
            $crate::registry::BackendRegistration::new($name, || {
                static INSTANCE: ::std::sync::OnceLock<
                    ::std::sync::Arc<dyn $crate::switchyard_core::Backend>,
                > = ::std::sync::OnceLock::new();
                ::std::result::Result::Ok(::std::sync::Arc::clone(
                    INSTANCE.get_or_init(|| {
                        ::std::sync::Arc::new($backend)
                            as ::std::sync::Arc<dyn $crate::switchyard_core::Backend>
                    }),
                ))
            })
        }
    };
    ($name:literal, $backend:expr, info = $info:expr) => {
        $crate::register_backend!($name, $backend);

        $crate::inventory::submit! {
            $crate::registry::BackendInfoRegistration::new($name, || {
                ::std::result::Result::map_err($info, ::std::convert::Into::into)
            })
        }
    };
}
