#![deny(missing_docs)]
//! Shared logging utilities for the resume checker workspace.
//!
//! This crate provides the `checker_*` logging macros used across the codebase,
//! a browser initializer that routes records to the devtools console, and a
//! minimal test initializer for native runs.

#[doc(hidden)]
pub use log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! checker_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! checker_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! checker_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! checker_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! checker_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

fn default_level() -> log::LevelFilter {
    // Use debug level in debug builds, info in release builds.
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes console logging and the panic hook for the browser build.
///
/// Safe to call more than once; later calls keep the first logger.
#[cfg(target_arch = "wasm32")]
pub fn initialize_for_browser() {
    console_error_panic_hook::set_once();

    let level = default_level().to_level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
#[cfg(not(target_arch = "wasm32"))]
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .build();

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
