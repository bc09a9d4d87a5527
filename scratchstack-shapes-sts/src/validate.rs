//! Client-side checks of the constraints STS documents for each member.
//!
//! STS enforces these constraints itself, and builders and setters never check them. Callers that want to reject a
//! request before sending it can call [Validate::validate].

use {
    crate::{
        model::{PolicyDescriptorType, ProvidedContext, Tag},
        request::{
            AssumeRoleRequest, AssumeRoleWithSamlRequest, AssumeRoleWithWebIdentityRequest,
            DecodeAuthorizationMessageRequest, GetAccessKeyInfoRequest, GetCallerIdentityRequest,
            GetFederationTokenRequest, GetSessionTokenRequest,
        },
    },
    lazy_static::lazy_static,
    regex::Regex,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

const MAX_POLICY_ARNS: usize = 10;
const MAX_TAGS: usize = 50;
const MAX_PROVIDED_CONTEXTS: usize = 5;

/// Duration bounds, in seconds, for the assume-role family.
const ASSUME_ROLE_DURATION: (i32, i32) = (900, 43200);

/// Duration bounds, in seconds, for federation and session tokens.
const TOKEN_DURATION: (i32, i32) = (900, 129600);

lazy_static! {
    static ref ARN: Regex = Regex::new(
        r"^[\x{0009}\x{000A}\x{000D}\x{0020}-\x{007E}\x{0085}\x{00A0}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]+$"
    )
    .unwrap();
    static ref SESSION_POLICY: Regex = Regex::new(r"^[\x{0009}\x{000A}\x{000D}\x{0020}-\x{00FF}]+$").unwrap();
    static ref USER_NAME: Regex = Regex::new(r"^[A-Za-z0-9_+=,.@-]*$").unwrap();
    static ref EXTERNAL_ID: Regex = Regex::new(r"^[A-Za-z0-9_+=,.@:/-]*$").unwrap();
    static ref SERIAL_NUMBER: Regex = Regex::new(r"^[A-Za-z0-9_+=/:,.@-]*$").unwrap();
    static ref TOKEN_CODE: Regex = Regex::new(r"^[0-9]*$").unwrap();
    static ref ACCESS_KEY_ID: Regex = Regex::new(r"^[A-Za-z0-9_]*$").unwrap();
    static ref TAG_KEY: Regex = Regex::new(r"^[\p{L}\p{Z}\p{N}_.:/=+\-@]+$").unwrap();
    static ref TAG_VALUE: Regex = Regex::new(r"^[\p{L}\p{Z}\p{N}_.:/=+\-@]*$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationErrorKind {
    /// A required member is not set.
    Missing,

    /// A string member's length, in characters, is outside the allowed bounds.
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// A numeric member is outside the allowed bounds.
    Range {
        min: i32,
        max: i32,
        actual: i32,
    },

    /// A string member contains characters outside the allowed set.
    Pattern,

    /// A list member has too many items.
    TooMany {
        max: usize,
        actual: usize,
    },
}

/// A member that does not satisfy its documented constraints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationError {
    /// The wire name of the offending member, e.g. `RoleSessionName` or `Tags.Key`.
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
        Self {
            field,
            kind,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match &self.kind {
            ValidationErrorKind::Missing => write!(f, "{} is required", self.field),
            ValidationErrorKind::Length {
                min,
                max,
                actual,
            } => write!(f, "{} must be between {} and {} characters long; got {}", self.field, min, max, actual),
            ValidationErrorKind::Range {
                min,
                max,
                actual,
            } => write!(f, "{} must be between {} and {}; got {}", self.field, min, max, actual),
            ValidationErrorKind::Pattern => write!(f, "{} contains invalid characters", self.field),
            ValidationErrorKind::TooMany {
                max,
                actual,
            } => write!(f, "{} may contain at most {} items; got {}", self.field, max, actual),
        }
    }
}

impl Error for ValidationError {}

/// Check a record against the constraints STS documents for it.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn required<T>(field: &'static str, value: &Option<T>) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(field, ValidationErrorKind::Missing)),
    }
}

fn string(
    field: &'static str,
    value: &Option<String>,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::Length {
                min,
                max,
                actual,
            },
        ));
    }

    match pattern {
        Some(pattern) if !pattern.is_match(value) => Err(ValidationError::new(field, ValidationErrorKind::Pattern)),
        _ => Ok(()),
    }
}

fn range(field: &'static str, value: Option<i32>, (min, max): (i32, i32)) -> Result<(), ValidationError> {
    match value {
        Some(actual) if actual < min || actual > max => Err(ValidationError::new(
            field,
            ValidationErrorKind::Range {
                min,
                max,
                actual,
            },
        )),
        _ => Ok(()),
    }
}

fn list<T: Validate>(field: &'static str, value: &Option<Vec<T>>, max: usize) -> Result<(), ValidationError> {
    let Some(items) = value else {
        return Ok(());
    };

    if items.len() > max {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::TooMany {
                max,
                actual: items.len(),
            },
        ));
    }

    items.iter().try_for_each(Validate::validate)
}

fn arn(field: &'static str, value: &Option<String>) -> Result<(), ValidationError> {
    string(field, value, 20, 2048, Some(&ARN))
}

fn session_policy(value: &Option<String>) -> Result<(), ValidationError> {
    string("Policy", value, 1, 2048, Some(&SESSION_POLICY))
}

fn role_session_name(value: &Option<String>) -> Result<(), ValidationError> {
    string("RoleSessionName", value, 2, 64, Some(&USER_NAME))
}

fn source_identity(value: &Option<String>) -> Result<(), ValidationError> {
    string("SourceIdentity", value, 2, 64, Some(&USER_NAME))
}

fn serial_number(value: &Option<String>) -> Result<(), ValidationError> {
    string("SerialNumber", value, 9, 256, Some(&SERIAL_NUMBER))
}

fn token_code(value: &Option<String>) -> Result<(), ValidationError> {
    string("TokenCode", value, 6, 6, Some(&TOKEN_CODE))
}

impl Validate for PolicyDescriptorType {
    fn validate(&self) -> Result<(), ValidationError> {
        arn("PolicyArns.arn", &self.arn)
    }
}

impl Validate for ProvidedContext {
    fn validate(&self) -> Result<(), ValidationError> {
        arn("ProvidedContexts.ProviderArn", &self.provider_arn)?;
        string("ProvidedContexts.ContextAssertion", &self.context_assertion, 4, 2048, None)
    }
}

impl Validate for Tag {
    fn validate(&self) -> Result<(), ValidationError> {
        required("Tags.Key", &self.key)?;
        string("Tags.Key", &self.key, 1, 128, Some(&TAG_KEY))?;
        string("Tags.Value", &self.value, 0, 256, Some(&TAG_VALUE))
    }
}

/// Transitive tag keys share the tag key constraints.
struct TransitiveTagKey<'a>(&'a str);

impl Validate for TransitiveTagKey<'_> {
    fn validate(&self) -> Result<(), ValidationError> {
        string("TransitiveTagKeys", &Some(self.0.to_string()), 1, 128, Some(&TAG_KEY))
    }
}

impl Validate for AssumeRoleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("RoleArn", &self.role_arn)?;
        arn("RoleArn", &self.role_arn)?;
        required("RoleSessionName", &self.role_session_name)?;
        role_session_name(&self.role_session_name)?;
        list("PolicyArns", &self.policy_arns, MAX_POLICY_ARNS)?;
        session_policy(&self.policy)?;
        range("DurationSeconds", self.duration_seconds, ASSUME_ROLE_DURATION)?;
        list("Tags", &self.tags, MAX_TAGS)?;

        if let Some(keys) = &self.transitive_tag_keys {
            let keys: Vec<TransitiveTagKey> = keys.iter().map(|key| TransitiveTagKey(key)).collect();
            list("TransitiveTagKeys", &Some(keys), MAX_TAGS)?;
        }

        string("ExternalId", &self.external_id, 2, 1224, Some(&EXTERNAL_ID))?;
        serial_number(&self.serial_number)?;
        token_code(&self.token_code)?;
        source_identity(&self.source_identity)?;
        list("ProvidedContexts", &self.provided_contexts, MAX_PROVIDED_CONTEXTS)
    }
}

impl Validate for AssumeRoleWithSamlRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("RoleArn", &self.role_arn)?;
        arn("RoleArn", &self.role_arn)?;
        required("PrincipalArn", &self.principal_arn)?;
        arn("PrincipalArn", &self.principal_arn)?;
        required("SAMLAssertion", &self.saml_assertion)?;
        string("SAMLAssertion", &self.saml_assertion, 4, 100000, None)?;
        list("PolicyArns", &self.policy_arns, MAX_POLICY_ARNS)?;
        session_policy(&self.policy)?;
        range("DurationSeconds", self.duration_seconds, ASSUME_ROLE_DURATION)
    }
}

impl Validate for AssumeRoleWithWebIdentityRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("RoleArn", &self.role_arn)?;
        arn("RoleArn", &self.role_arn)?;
        required("RoleSessionName", &self.role_session_name)?;
        role_session_name(&self.role_session_name)?;
        required("WebIdentityToken", &self.web_identity_token)?;
        string("WebIdentityToken", &self.web_identity_token, 4, 20000, None)?;
        string("ProviderId", &self.provider_id, 4, 2048, None)?;
        list("PolicyArns", &self.policy_arns, MAX_POLICY_ARNS)?;
        session_policy(&self.policy)?;
        range("DurationSeconds", self.duration_seconds, ASSUME_ROLE_DURATION)
    }
}

impl Validate for DecodeAuthorizationMessageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("EncodedMessage", &self.encoded_message)?;
        string("EncodedMessage", &self.encoded_message, 1, 10240, None)
    }
}

impl Validate for GetAccessKeyInfoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("AccessKeyId", &self.access_key_id)?;
        string("AccessKeyId", &self.access_key_id, 16, 128, Some(&ACCESS_KEY_ID))
    }
}

impl Validate for GetCallerIdentityRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for GetFederationTokenRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("Name", &self.name)?;
        string("Name", &self.name, 2, 32, Some(&USER_NAME))?;
        session_policy(&self.policy)?;
        list("PolicyArns", &self.policy_arns, MAX_POLICY_ARNS)?;
        range("DurationSeconds", self.duration_seconds, TOKEN_DURATION)?;
        list("Tags", &self.tags, MAX_TAGS)
    }
}

impl Validate for GetSessionTokenRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        range("DurationSeconds", self.duration_seconds, TOKEN_DURATION)?;
        serial_number(&self.serial_number)?;
        token_code(&self.token_code)
    }
}
