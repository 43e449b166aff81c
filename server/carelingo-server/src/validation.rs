//! Request validation utilities for consistent validation across handlers
//!
//! This module provides a `RequestValidation` trait and helper macros to
//! centralize validation logic and ensure consistent error messages.

use crate::error::ApiError;

/// Trait for validating request payloads
///
/// Implement this trait for request body types so every handler rejects
/// bad input the same way, before any provider is contacted.
pub trait RequestValidation {
    /// Validates the request and returns an error if validation fails
    ///
    /// Returns `Ok(())` if validation passes, or `Err(ApiError)` with
    /// a validation error message if validation fails.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```ignore
/// validate_field!(self.text, !self.text.trim().is_empty(), "Text is required");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Macro for validating required fields (non-empty strings)
///
/// # Usage
///
/// ```ignore
/// validate_required!(self.text, "Text is required");
/// ```
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        $crate::validate_field!($field, !$field.trim().is_empty(), $message);
    };
}
