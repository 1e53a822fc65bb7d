//! A custom reporter that can be plugged in for components loading data.

use std::fmt;

#[macro_export]
macro_rules! report_info {
    ($reporter:expr, $($arg:tt)*) => {
        $crate::reporter::Reporter::info($reporter, &format_args!($($arg)*));
    }
}

#[macro_export]
macro_rules! report_warn {
    ($reporter:expr, $($arg:tt)*) => {
        $crate::reporter::Reporter::warn($reporter, &format_args!($($arg)*));
    }
}

pub trait Reporter {
    /// Perform info logging.
    fn info(&self, value: &dyn fmt::Display);

    /// Perform warning logging.
    fn warn(&self, value: &dyn fmt::Display);
}

impl<T> Reporter for &T
where
    T: ?Sized + Reporter,
{
    #[inline]
    fn info(&self, value: &dyn fmt::Display) {
        (*self).info(value);
    }

    #[inline]
    fn warn(&self, value: &dyn fmt::Display) {
        (*self).warn(value);
    }
}

/// Reporter which forwards to [`tracing`].
pub struct TracingReporter;

impl Reporter for TracingReporter {
    #[inline]
    fn info(&self, value: &dyn fmt::Display) {
        tracing::info!("{}", value);
    }

    #[inline]
    fn warn(&self, value: &dyn fmt::Display) {
        tracing::warn!("{}", value);
    }
}

/// Reporter which collects warnings, used in tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Collect {
    pub(crate) warnings: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl Reporter for Collect {
    fn info(&self, _: &dyn fmt::Display) {}

    fn warn(&self, value: &dyn fmt::Display) {
        self.warnings.borrow_mut().push(value.to_string());
    }
}
