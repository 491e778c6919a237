//! Error types for slot pools
//!
//! This module defines the errors returned by pool construction and
//! slot release, plus the macros used to log an error before returning it.

use std::fmt;

/// Result type for slot pool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Slot pool errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction requested with an invalid argument (e.g. zero capacity)
    InvalidArgument(String),

    /// Slot index outside `[0, capacity)`
    IndexOutOfRange {
        index: usize,
        capacity: usize,
    },

    /// Operation not valid in the current pool state (e.g. nothing to release)
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::IndexOutOfRange { index, capacity } => {
                write!(f, "Index out of range: {} (capacity {})", index, capacity)
            }
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error at ERROR severity and evaluate to it
///
/// # Example
///
/// ```ignore
/// return Err(pool_err!("slot_pool::SlotAllocator", Error::InvalidState("empty".to_string())));
/// ```
#[macro_export]
macro_rules! pool_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::pool::Error = $error;
        $crate::pool_error!($source, "{}", error);
        error
    }};
}

/// Log an error at ERROR severity and return it from the current function
///
/// # Example
///
/// ```ignore
/// if capacity == 0 {
///     pool_bail!("slot_pool::SlotAllocator", Error::InvalidArgument("capacity is zero".to_string()));
/// }
/// ```
#[macro_export]
macro_rules! pool_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::pool_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
