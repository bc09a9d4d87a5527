//! XML response envelopes for STS operations.
//!
//! Every successful STS response wraps its result record in an `<OperationResponse>` element alongside
//! `<ResponseMetadata>`. Faults are returned as an `<ErrorResponse>` document instead.

use {
    crate::{
        STS_XML_NS,
        error::{ResponseError, StsError},
        result::{
            AssumeRoleResult, AssumeRoleWithSamlResult, AssumeRoleWithWebIdentityResult,
            DecodeAuthorizationMessageResult, GetAccessKeyInfoResult, GetCallerIdentityResult,
            GetFederationTokenResult, GetSessionTokenResult,
        },
    },
    derive_builder::Builder,
    log::debug,
    quick_xml::{DeError, Reader, events::Event},
    scratchstack_errors::ServiceError,
    serde::{Deserialize, Serialize, de::DeserializeOwned},
};

/// The root element name of an STS fault document.
const ERROR_RESPONSE: &str = "ErrorResponse";

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResponseMetadata {
    #[builder(setter(into, strip_option), default = "None")]
    #[serde(rename = "$unflatten=RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ResponseMetadata {
    pub fn builder() -> ResponseMetadataBuilder {
        ResponseMetadataBuilder::default()
    }
}

/// A successful STS response document.
pub trait StsResponse: DeserializeOwned {
    /// The result record carried by this response.
    type Output;

    /// The name of the document's root element, e.g. `AssumeRoleResponse`.
    const ROOT_ELEMENT: &'static str;

    /// Discard the envelope and return the result record.
    fn into_result(self) -> Self::Output;

    /// The request ID assigned by the service, if present.
    fn request_id(&self) -> Option<&str>;

    /// Parse a response document.
    ///
    /// This does not recognize fault documents; use [decode_response] to handle both.
    fn from_xml(xml: &str) -> Result<Self, ResponseError> {
        quick_xml::de::from_str(xml).map_err(|e| {
            debug!("Failed to decode {}: {:?}", std::any::type_name::<Self>(), e);
            ResponseError::Xml(e)
        })
    }
}

macro_rules! sts_response {
    ($(#[$meta:meta])* $response:ident($builder:ident) => $response_name:literal, $field:ident: $result:ident => $result_name:literal) => {
        $(#[$meta])*
        #[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
        #[serde(rename = $response_name)]
        pub struct $response {
            #[builder(setter(into, strip_option), default = "Some(crate::STS_XML_NS.to_string())")]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub xmlns: Option<String>,

            #[builder(setter(into), default)]
            #[serde(rename = $result_name, default)]
            pub $field: $result,

            #[builder(setter(into), default)]
            #[serde(rename = "ResponseMetadata", default)]
            pub response_metadata: ResponseMetadata,
        }

        impl $response {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        impl StsResponse for $response {
            type Output = $result;
            const ROOT_ELEMENT: &'static str = $response_name;

            fn into_result(self) -> $result {
                self.$field
            }

            fn request_id(&self) -> Option<&str> {
                self.response_metadata.request_id.as_deref()
            }
        }
    };
}

sts_response!(
    /// Response document for `AssumeRole`.
    AssumeRoleResponse(AssumeRoleResponseBuilder) => "AssumeRoleResponse",
    assume_role_result: AssumeRoleResult => "AssumeRoleResult"
);

sts_response!(
    /// Response document for `AssumeRoleWithSAML`.
    AssumeRoleWithSamlResponse(AssumeRoleWithSamlResponseBuilder) => "AssumeRoleWithSAMLResponse",
    assume_role_with_saml_result: AssumeRoleWithSamlResult => "AssumeRoleWithSAMLResult"
);

sts_response!(
    /// Response document for `AssumeRoleWithWebIdentity`.
    AssumeRoleWithWebIdentityResponse(AssumeRoleWithWebIdentityResponseBuilder) => "AssumeRoleWithWebIdentityResponse",
    assume_role_with_web_identity_result: AssumeRoleWithWebIdentityResult => "AssumeRoleWithWebIdentityResult"
);

sts_response!(
    /// Response document for `DecodeAuthorizationMessage`.
    DecodeAuthorizationMessageResponse(DecodeAuthorizationMessageResponseBuilder) => "DecodeAuthorizationMessageResponse",
    decode_authorization_message_result: DecodeAuthorizationMessageResult => "DecodeAuthorizationMessageResult"
);

sts_response!(
    /// Response document for `GetAccessKeyInfo`.
    GetAccessKeyInfoResponse(GetAccessKeyInfoResponseBuilder) => "GetAccessKeyInfoResponse",
    get_access_key_info_result: GetAccessKeyInfoResult => "GetAccessKeyInfoResult"
);

sts_response!(
    /// Response document for `GetCallerIdentity`.
    GetCallerIdentityResponse(GetCallerIdentityResponseBuilder) => "GetCallerIdentityResponse",
    get_caller_identity_result: GetCallerIdentityResult => "GetCallerIdentityResult"
);

sts_response!(
    /// Response document for `GetFederationToken`.
    GetFederationTokenResponse(GetFederationTokenResponseBuilder) => "GetFederationTokenResponse",
    get_federation_token_result: GetFederationTokenResult => "GetFederationTokenResult"
);

sts_response!(
    /// Response document for `GetSessionToken`.
    GetSessionTokenResponse(GetSessionTokenResponseBuilder) => "GetSessionTokenResponse",
    get_session_token_result: GetSessionTokenResult => "GetSessionTokenResult"
);

/// The `<Error>` element of a fault document.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Error {
    /// `Sender` for caller faults, `Receiver` for service faults.
    #[builder(setter(into))]
    #[serde(rename = "$unflatten=Type", default)]
    pub r#type: String,

    #[builder(setter(into))]
    #[serde(rename = "$unflatten=Code")]
    pub code: String,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "$unflatten=Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Error {
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::default()
    }
}

/// A fault document.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorResponse {
    #[builder(setter(into, strip_option), default = "Some(crate::STS_XML_NS.to_string())")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    #[serde(rename = "Error")]
    pub error: Error,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "$unflatten=RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn builder() -> ErrorResponseBuilder {
        ErrorResponseBuilder::default()
    }

    pub fn from_xml(xml: &str) -> Result<Self, ResponseError> {
        quick_xml::de::from_str(xml).map_err(|e| {
            debug!("Failed to decode ErrorResponse: {:?}", e);
            ResponseError::Xml(e)
        })
    }

    /// The STS fault described by this document, or `None` if the code is not an STS fault.
    pub fn to_sts_error(&self) -> Option<StsError> {
        StsError::from_code(&self.error.code, self.error.message.clone())
    }
}

impl From<StsError> for ErrorResponse {
    fn from(e: StsError) -> Self {
        let fault_type = if e.http_status().is_server_error() {
            "Receiver"
        } else {
            "Sender"
        };

        ErrorResponse {
            xmlns: Some(STS_XML_NS.to_string()),
            error: Error {
                r#type: fault_type.to_string(),
                code: e.error_code().to_string(),
                message: e.message().map(ToString::to_string),
            },
            request_id: None,
        }
    }
}

impl From<ErrorResponse> for ResponseError {
    fn from(response: ErrorResponse) -> Self {
        let Error {
            code,
            message,
            ..
        } = response.error;

        match StsError::from_code(&code, message.clone()) {
            Some(e) => ResponseError::Service(e),
            None => {
                debug!("Unrecognized STS error code {code} (request id {:?})", response.request_id);
                ResponseError::Unhandled {
                    code,
                    message,
                }
            }
        }
    }
}

/// The local name of the document's root element, if it has one.
fn root_element_name(xml: &str) -> Result<Option<String>, DeError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned()));
            }
            Event::Eof => return Ok(None),
            _ => (),
        }
    }
}

/// Decode a response document into its envelope, mapping fault documents to [ResponseError].
pub fn decode_envelope<R: StsResponse>(xml: &str) -> Result<R, ResponseError> {
    match root_element_name(xml)?.as_deref() {
        Some(ERROR_RESPONSE) => Err(ErrorResponse::from_xml(xml)?.into()),
        Some(root) if root == R::ROOT_ELEMENT => R::from_xml(xml),
        root => {
            debug!("Expected {} document; root element is {:?}", R::ROOT_ELEMENT, root);
            Err(ResponseError::Xml(DeError::Custom(format!("expected root element {}", R::ROOT_ELEMENT))))
        }
    }
}

/// Decode a response document into its result record, mapping fault documents to [ResponseError].
///
/// ```ignore
/// let result = decode_response::<GetCallerIdentityResponse>(&body)?;
/// println!("{}", result.arn().unwrap_or_default());
/// ```
pub fn decode_response<R: StsResponse>(xml: &str) -> Result<R::Output, ResponseError> {
    decode_envelope::<R>(xml).map(StsResponse::into_result)
}
