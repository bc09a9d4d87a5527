//! AWS Security Token Service (STS) shapes.
//!
//! This crate holds the data-transfer layer for STS: the request and result records for each operation, the shapes
//! they share ([Credentials], [Tag], ...), and the fault kinds the service reports ([StsError]).
//!
//! Records are plain structs. Every member is optional; absence means "unset". Records can be built incrementally
//! through their builders or mutated through their setters, and compare structurally.
//!
//! ```ignore
//! use scratchstack_shapes_sts::{StsRequest, Tag, request::AssumeRoleRequest};
//!
//! let request = AssumeRoleRequest::builder()
//!     .role_arn("arn:aws:iam::123456789012:role/demo")
//!     .role_session_name("demo-session")
//!     .tags(vec![Tag::builder().key("env").value("prod").build()?])
//!     .build()?;
//! let body = request.to_query_string();
//! ```
//!
//! Signing, transport, and retries are handled elsewhere. This crate only encodes requests into query parameters
//! and decodes XML responses into records or typed faults.
#![warn(clippy::all)]

#[macro_use]
mod macros;

mod error;
pub mod model;
mod query;
mod render;
pub mod request;
pub mod response;
pub mod result;
mod validate;

pub use {
    error::{ResponseError, StsError, StsErrorKind},
    model::{AssumedRoleUser, Credentials, FederatedUser, PolicyDescriptorType, ProvidedContext, Tag},
    query::{QueryMember, QueryParameters, StsRequest},
    render::REDACTED,
    response::{StsResponse, decode_envelope, decode_response},
    scratchstack_errors::ServiceError,
    validate::{Validate, ValidationError, ValidationErrorKind},
};

/// XML namespace for STS responses.
pub const STS_XML_NS: &str = "https://sts.amazonaws.com/doc/2011-06-15/";

/// The STS API version these shapes describe.
pub const STS_VERSION_20110615: &str = "2011-06-15";
