//! Call-site shorthands for the two loggers of a [`LogContext`].
//!
//! The first argument is anything that derefs to a `LogContext`; the rest is
//! a `format!`-style template and its arguments.
//!
//! [`LogContext`]: crate::logging::LogContext

#[macro_export]
macro_rules! fw_core_trace {
    ($log:expr, $($arg:tt)+) => {
        $log.core().trace(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_core_info {
    ($log:expr, $($arg:tt)+) => {
        $log.core().info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_core_warn {
    ($log:expr, $($arg:tt)+) => {
        $log.core().warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_core_error {
    ($log:expr, $($arg:tt)+) => {
        $log.core().error(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_trace {
    ($log:expr, $($arg:tt)+) => {
        $log.client().trace(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_info {
    ($log:expr, $($arg:tt)+) => {
        $log.client().info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_warn {
    ($log:expr, $($arg:tt)+) => {
        $log.client().warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fw_error {
    ($log:expr, $($arg:tt)+) => {
        $log.client().error(::std::format_args!($($arg)+))
    };
}
