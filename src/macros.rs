//! Logging macros for ergonomic message formatting.
//!
//! These macros take any [`NamespacedLogger`](crate::NamespacedLogger) (or a
//! reference to one) and format their arguments like `format!`.
//!
//! # Examples
//!
//! ```
//! use serverless_log::prelude::*;
//! use serverless_log::notice;
//!
//! let output = Output::builder().sink(MemorySink::new()).build();
//! let log = output.log().get("deploy");
//!
//! notice!(log, "Deploying to stage {}", "dev");
//! ```

/// Log a message at an explicit level. Arguments are only formatted when the
/// level passes the threshold.
///
/// # Examples
///
/// ```
/// # use serverless_log::prelude::*;
/// # let output = Output::builder().sink(MemorySink::new()).build();
/// # let logger = output.log();
/// use serverless_log::log;
/// log!(logger, LogLevel::Notice, "Simple message");
/// log!(logger, LogLevel::Error, "Exit code: {}", 1);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, format!($($arg)+));
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// # Examples
///
/// ```
/// # use serverless_log::prelude::*;
/// # let output = Output::builder().sink(MemorySink::new()).build();
/// # let logger = output.log();
/// use serverless_log::notice;
/// notice!(logger, "Service deployed");
/// notice!(logger, "{} functions packaged", 3);
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Output};
    use crate::sinks::MemorySink;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingArg<'a>(&'a AtomicUsize);

    impl fmt::Display for CountingArg<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            write!(f, "counted")
        }
    }

    fn output() -> (Output, MemorySink) {
        let sink = MemorySink::new();
        let output = Output::builder()
            .level(LogLevel::Debug)
            .colors(false)
            .sink(sink.clone())
            .build();
        (output, sink)
    }

    #[test]
    fn test_log_macro() {
        let (output, sink) = output();
        log!(output.log(), LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(sink.contents(), "serverless info Formatted: 42\n");
    }

    #[test]
    fn test_level_macros() {
        let (output, sink) = output();
        let logger = output.log().get("m");
        debug!(logger, "d {}", 1);
        info!(logger, "i");
        notice!(logger, "n");
        warn!(logger, "w {}", "x");
        error!(logger, "e");

        assert_eq!(
            sink.contents(),
            "serverless:m debug d 1\nserverless:m info i\nserverless:m notice n\n\
             serverless:m warn w x\nserverless:m error e\n"
        );
    }

    #[test]
    fn test_filtered_levels_skip_formatting() {
        let sink = MemorySink::new();
        let output = Output::builder()
            .level(LogLevel::Warn)
            .colors(false)
            .sink(sink.clone())
            .build();
        let formats = AtomicUsize::new(0);

        debug!(output.log(), "{}", CountingArg(&formats));
        notice!(output.log(), "{}", CountingArg(&formats));
        assert_eq!(formats.load(Ordering::SeqCst), 0);
        assert!(sink.is_empty());

        error!(output.log(), "{}", CountingArg(&formats));
        assert_eq!(formats.load(Ordering::SeqCst), 1);
        assert_eq!(sink.contents(), "serverless error counted\n");
    }
}
