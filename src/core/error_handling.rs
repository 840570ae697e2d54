//! Generic error handling utilities
//!
//! Lets the application report any error type the same way while still
//! distinguishing problems the user can fix from system failures.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with a message the user can act on. When it returns
/// `false`, `user_message()` returns `None`.
pub trait ContextualError: std::error::Error {
    /// True if the message should be shown to the user as is
    ///
    /// User-actionable: bad arguments, invalid configuration, a root
    /// directory that does not exist.
    /// System: failed writes to stdout and similar IO trouble.
    fn is_user_actionable(&self) -> bool;

    /// The specific user message for user-actionable errors
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message, system errors log the
/// operation context. Full details are only logged at debug level.
///
/// ```rust,no_run
/// # use sourcescan::core::error_handling::log_error_with_context;
/// # use sourcescan::core::validation::ValidationError;
/// let err = ValidationError::new("Target cannot be empty");
/// log_error_with_context(&err, "Validating arguments");
/// // Logs: "FATAL: Target cannot be empty"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("FATAL: {}", fatal_message(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// The primary line logged for a fatal error
pub fn fatal_message<'a, E: ContextualError>(error: &'a E, operation_context: &'a str) -> &'a str {
    if error.is_user_actionable() {
        error.user_message().unwrap_or(operation_context)
    } else {
        operation_context
    }
}
