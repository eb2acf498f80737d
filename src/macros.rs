//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// Release builds compile the call away entirely so chatty diagnostics do
/// not end up in production bundles.
///
/// ```rust,ignore
/// debug_log!("Fetched {} products", products.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    }};
}

/// Quick helper to embed CSS custom-properties (`var(--token)`) without
/// sprinkling `format!("var(--{})", token)` through the stylesheet builder.
///
/// ```rust,ignore
/// let accent = css_var!("accent");   // "var(--accent)"
/// let lime = css_var!(brand_lime);    // "var(--brand_lime)"
/// ```
#[macro_export]
macro_rules! css_var {
    ($name:ident) => {
        format!("var(--{})", stringify!($name))
    };
    ($name:expr) => {
        format!("var(--{})", $name)
    };
}
