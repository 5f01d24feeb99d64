//! Logging shims: forward to the `log` facade when the `log` feature is on,
//! compile to nothing otherwise.

macro_rules! log_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::trace!($($arg)+);
        }
    };
}

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::warn!($($arg)+);
        }
    };
}

pub(crate) use log_trace;
pub(crate) use log_warn;
