//! Error trait for AWS and AWS-like services.
//!
//! Every fault a service can return carries a documented error code and the HTTP status the service responds with.
//! Service-specific error types implement [ServiceError] so callers can handle faults uniformly (log the code, decide
//! whether to retry) without matching on every concrete type.
#![warn(clippy::all)]

use {http::StatusCode, std::error::Error};

/// A fault reported by an AWS or AWS-like service.
pub trait ServiceError: Error {
    /// The error code the service uses for this fault, e.g. `InvalidIdentityToken`.
    fn error_code(&self) -> &'static str;

    /// The HTTP status code the service returns alongside this fault.
    fn http_status(&self) -> StatusCode;

    /// Whether the request may succeed if retried unchanged (after a backoff).
    ///
    /// Faults are permanent unless the implementation says otherwise.
    fn is_transient(&self) -> bool {
        false
    }

    /// The human-readable message supplied by the service, if any.
    fn message(&self) -> Option<&str> {
        None
    }
}

impl<E: ServiceError> ServiceError for Box<E> {
    fn error_code(&self) -> &'static str {
        (**self).error_code()
    }

    fn http_status(&self) -> StatusCode {
        (**self).http_status()
    }

    fn is_transient(&self) -> bool {
        (**self).is_transient()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}
