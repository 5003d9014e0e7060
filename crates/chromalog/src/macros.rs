//! Convenience macros for logging with call-site capture.
//!
//! Each macro takes a [`Logger`](crate::Logger) (or anything with a matching
//! `log_with_location` method, such as a channel handle wrapper) followed by
//! `format!`-style arguments, and records the source file, line number and
//! enclosing function name at the point of invocation.

/// Resolve the fully qualified name of the enclosing function.
///
/// Works by asking for the type name of a local item fn, which the compiler
/// reports with the enclosing path attached.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Log at an explicit [`Level`](crate::Level), capturing the call site.
///
/// # Example
///
/// ```ignore
/// log_at!(logger, Level::Warn, "disk {} at {}% capacity", disk, pct);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_with_location(
            $level,
            &::std::format!($($arg)+),
            $crate::SourceLocation::new(
                ::std::file!(),
                ::std::line!(),
                $crate::__function_name!(),
            ),
        )
    };
}

/// Log a debug message with call-site capture.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info message with call-site capture.
///
/// # Example
///
/// ```ignore
/// log_info!(logger, "connected to {}", peer);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning message with call-site capture.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error message with call-site capture.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Error, $($arg)+)
    };
}
