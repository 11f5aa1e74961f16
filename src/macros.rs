//! Small crate-wide convenience macros.

/// Log a formatted message to the browser console.  Compiles to a no-op on
/// non-wasm targets so host-side unit tests can exercise code paths that
/// log without a JS runtime.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

/// Same as [`debug_log!`] but at error level.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}
