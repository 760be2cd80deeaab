//! Call-site sugar for the logging methods.
//!
//! `info!(log, "served ", n, " requests")` builds the operand slice for
//! [`Logger::info`](crate::Logger::info); `infof!(log, "served {n} requests")`
//! hands `format_args!` to [`Logger::infof`](crate::Logger::infof). Both expand
//! in the caller's own function, so the caller column still names it.
//!
//! The non-fatal macros follow the call with an optimization barrier. Without
//! it a log call that ends a function becomes a tail call in optimized builds
//! and the calling function's frame disappears from the stack.

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        {
            $logger.debug(&[$(&$operand as &dyn $crate::Printable),*]);
            ::std::hint::black_box(());
        }
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        {
            $logger.info(&[$(&$operand as &dyn $crate::Printable),*]);
            ::std::hint::black_box(());
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        {
            $logger.warn(&[$(&$operand as &dyn $crate::Printable),*]);
            ::std::hint::black_box(());
        }
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        {
            $logger.error(&[$(&$operand as &dyn $crate::Printable),*]);
            ::std::hint::black_box(());
        }
    };
}

/// Logs and exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.fatal(&[$(&$operand as &dyn $crate::Printable),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        {
            $logger.debugf(::std::format_args!($($arg)+));
            ::std::hint::black_box(());
        }
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        {
            $logger.infof(::std::format_args!($($arg)+));
            ::std::hint::black_box(());
        }
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        {
            $logger.warnf(::std::format_args!($($arg)+));
            ::std::hint::black_box(());
        }
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        {
            $logger.errorf(::std::format_args!($($arg)+));
            ::std::hint::black_box(());
        }
    };
}

/// Template form of [`fatal!`].
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
