//! Console diagnostics
//!
//! On wasm32 messages go to the browser console via `web_sys::console`.
//! Native builds (tests, server-side rendering) route the same messages to
//! `tracing`, because wasm-bindgen imports panic when called off-wasm.

/// Warn-level diagnostic, e.g. a skipped malformed pattern.
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("{}", message);
    }};
}

/// Error-level diagnostic for failures at the JS boundary.
macro_rules! console_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!("{}", message);
    }};
}

/// Debug-level diagnostic.
macro_rules! console_log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("{}", message);
    }};
}
