use {
    http::StatusCode,
    quick_xml::DeError,
    scratchstack_errors::ServiceError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
    strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr},
};

/// The kinds of fault STS reports. The string form of each kind is its wire error code.
#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq)]
pub enum StsErrorKind {
    /// The web identity token or SAML assertion has expired.
    #[strum(serialize = "ExpiredTokenException")]
    ExpiredToken,

    /// The identity provider could not be reached. Retrying with backoff may succeed.
    #[strum(serialize = "IDPCommunicationError")]
    IdpCommunicationError,

    /// The identity provider rejected the claim.
    #[strum(serialize = "IDPRejectedClaim")]
    IdpRejectedClaim,

    /// The message passed to `DecodeAuthorizationMessage` was invalid.
    #[strum(serialize = "InvalidAuthorizationMessageException")]
    InvalidAuthorizationMessage,

    /// The web identity token failed validation. A fresh token is required.
    #[strum(serialize = "InvalidIdentityToken")]
    InvalidIdentityToken,

    /// The session policy was malformed.
    #[strum(serialize = "MalformedPolicyDocument")]
    MalformedPolicyDocument,

    /// The combined session policies and tags exceeded the packed size limit.
    #[strum(serialize = "PackedPolicyTooLarge")]
    PackedPolicyTooLarge,

    /// STS is not activated in the requested region for the account.
    #[strum(serialize = "RegionDisabledException")]
    RegionDisabled,
}

impl StsErrorKind {
    #[inline]
    pub fn error_code(self) -> &'static str {
        self.into()
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            Self::IdpRejectedClaim | Self::RegionDisabled => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    #[inline]
    pub fn is_transient(self) -> bool {
        self == Self::IdpCommunicationError
    }
}

impl Display for StsErrorKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.error_code())
    }
}

/// A fault reported by STS. Each variant carries the message supplied by the service, if any.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum StsError {
    ExpiredToken(Option<String>),
    IdpCommunicationError(Option<String>),
    IdpRejectedClaim(Option<String>),
    InvalidAuthorizationMessage(Option<String>),
    InvalidIdentityToken(Option<String>),
    MalformedPolicyDocument(Option<String>),
    PackedPolicyTooLarge(Option<String>),
    RegionDisabled(Option<String>),
}

impl StsError {
    pub fn new(kind: StsErrorKind, message: Option<String>) -> Self {
        match kind {
            StsErrorKind::ExpiredToken => Self::ExpiredToken(message),
            StsErrorKind::IdpCommunicationError => Self::IdpCommunicationError(message),
            StsErrorKind::IdpRejectedClaim => Self::IdpRejectedClaim(message),
            StsErrorKind::InvalidAuthorizationMessage => Self::InvalidAuthorizationMessage(message),
            StsErrorKind::InvalidIdentityToken => Self::InvalidIdentityToken(message),
            StsErrorKind::MalformedPolicyDocument => Self::MalformedPolicyDocument(message),
            StsErrorKind::PackedPolicyTooLarge => Self::PackedPolicyTooLarge(message),
            StsErrorKind::RegionDisabled => Self::RegionDisabled(message),
        }
    }

    /// Map a wire error code to a fault. Returns `None` if the code is not an STS fault.
    pub fn from_code(code: &str, message: Option<String>) -> Option<Self> {
        StsErrorKind::from_str(code).ok().map(|kind| Self::new(kind, message))
    }

    pub fn kind(&self) -> StsErrorKind {
        match self {
            Self::ExpiredToken(_) => StsErrorKind::ExpiredToken,
            Self::IdpCommunicationError(_) => StsErrorKind::IdpCommunicationError,
            Self::IdpRejectedClaim(_) => StsErrorKind::IdpRejectedClaim,
            Self::InvalidAuthorizationMessage(_) => StsErrorKind::InvalidAuthorizationMessage,
            Self::InvalidIdentityToken(_) => StsErrorKind::InvalidIdentityToken,
            Self::MalformedPolicyDocument(_) => StsErrorKind::MalformedPolicyDocument,
            Self::PackedPolicyTooLarge(_) => StsErrorKind::PackedPolicyTooLarge,
            Self::RegionDisabled(_) => StsErrorKind::RegionDisabled,
        }
    }

    fn message_ref(&self) -> &Option<String> {
        match self {
            Self::ExpiredToken(m)
            | Self::IdpCommunicationError(m)
            | Self::IdpRejectedClaim(m)
            | Self::InvalidAuthorizationMessage(m)
            | Self::InvalidIdentityToken(m)
            | Self::MalformedPolicyDocument(m)
            | Self::PackedPolicyTooLarge(m)
            | Self::RegionDisabled(m) => m,
        }
    }
}

impl Display for StsError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self.message_ref() {
            Some(message) => write!(f, "{}: {}", self.kind(), message),
            None => write!(f, "{}", self.kind()),
        }
    }
}

impl Error for StsError {}

impl ServiceError for StsError {
    fn error_code(&self) -> &'static str {
        self.kind().error_code()
    }

    fn http_status(&self) -> StatusCode {
        self.kind().http_status()
    }

    fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }

    fn message(&self) -> Option<&str> {
        self.message_ref().as_deref()
    }
}

/// Errors from decoding an STS response document.
#[derive(Debug)]
pub enum ResponseError {
    /// The document was not valid XML or did not have the expected shape.
    Xml(DeError),

    /// The service returned a known STS fault.
    Service(StsError),

    /// The service returned an error code this crate does not model, e.g. `AccessDenied`.
    Unhandled {
        code: String,
        message: Option<String>,
    },
}

impl ResponseError {
    /// The STS fault, if the service returned one.
    pub fn as_sts_error(&self) -> Option<&StsError> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ResponseError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Xml(e) => write!(f, "Invalid response document: {e}"),
            Self::Service(e) => write!(f, "{e}"),
            Self::Unhandled {
                code,
                message: Some(message),
            } => write!(f, "{code}: {message}"),
            Self::Unhandled {
                code,
                message: None,
            } => write!(f, "{code}"),
        }
    }
}

impl Error for ResponseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Xml(e) => Some(e),
            Self::Service(e) => Some(e),
            Self::Unhandled {
                ..
            } => None,
        }
    }
}

impl From<DeError> for ResponseError {
    fn from(e: DeError) -> Self {
        Self::Xml(e)
    }
}

impl From<StsError> for ResponseError {
    fn from(e: StsError) -> Self {
        Self::Service(e)
    }
}
