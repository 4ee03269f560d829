//! Logging macros.
//!
//! Forward to the `log` crate when the `logging` feature is enabled and
//! compile to nothing otherwise.

#[cfg(feature = "logging")]
macro_rules! engine_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(feature = "logging")]
macro_rules! engine_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}
