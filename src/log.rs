//! Logging macros.
//!
//! With the `defmt` feature the macros forward to the matching `defmt`
//! level. Without it they expand to nothing, which keeps host test output
//! clean and costs nothing on builds that have no log transport.
//!
//! ```ignore
//! log_info!("Watch face ready");
//! log_debug!("Carousel rotating towards {}", kind);
//! ```

/// Log a message at Debug level.
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

/// Log a message at Info level.
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Warn level.
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}
