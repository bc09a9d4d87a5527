//! Request records for each STS operation.

use {
    crate::{
        model::{PolicyDescriptorType, ProvidedContext, Tag},
        query::{QueryParameters, StsRequest},
    },
    derive_builder::Builder,
};

/// Parameters for `AssumeRole`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct AssumeRoleRequest {
    /// The ARN of the role to assume.
    pub role_arn: Option<String>,

    /// An identifier for the assumed role session.
    pub role_session_name: Option<String>,

    /// Managed policies to use as session policies.
    pub policy_arns: Option<Vec<PolicyDescriptorType>>,

    /// An inline session policy, in JSON.
    pub policy: Option<String>,

    /// The duration of the role session, in seconds.
    pub duration_seconds: Option<i32>,

    /// Session tags to pass.
    pub tags: Option<Vec<Tag>>,

    /// Keys of session tags that persist across role chaining.
    pub transitive_tag_keys: Option<Vec<String>>,

    /// The external ID required by the role's trust policy, if any.
    pub external_id: Option<String>,

    /// The serial number of the MFA device in use.
    pub serial_number: Option<String>,

    /// The value produced by the MFA device.
    pub token_code: Option<String>,

    pub source_identity: Option<String>,

    pub provided_contexts: Option<Vec<ProvidedContext>>,
}

impl AssumeRoleRequest {
    pub fn builder() -> AssumeRoleRequestBuilder {
        AssumeRoleRequestBuilder::default()
    }
}

shape_accessors!(AssumeRoleRequest {
    str role_arn / set_role_arn;
    str role_session_name / set_role_session_name;
    list policy_arns / set_policy_arns: PolicyDescriptorType;
    str policy / set_policy;
    copy duration_seconds / set_duration_seconds: i32;
    list tags / set_tags: Tag;
    list transitive_tag_keys / set_transitive_tag_keys: String;
    str external_id / set_external_id;
    str serial_number / set_serial_number;
    str token_code / set_token_code;
    str source_identity / set_source_identity;
    list provided_contexts / set_provided_contexts: ProvidedContext;
});

display_shape!(AssumeRoleRequest {
    role_arn: "RoleArn",
    role_session_name: "RoleSessionName",
    policy_arns: "PolicyArns",
    policy: "Policy",
    duration_seconds: "DurationSeconds",
    tags: "Tags",
    transitive_tag_keys: "TransitiveTagKeys",
    external_id: "ExternalId",
    serial_number: "SerialNumber",
    token_code: "TokenCode",
    source_identity: "SourceIdentity",
    provided_contexts: "ProvidedContexts",
});

impl StsRequest for AssumeRoleRequest {
    const ACTION: &'static str = "AssumeRole";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_str("RoleArn", &self.role_arn);
        params.push_str("RoleSessionName", &self.role_session_name);
        params.push_list("PolicyArns", &self.policy_arns);
        params.push_str("Policy", &self.policy);
        params.push_i32("DurationSeconds", self.duration_seconds);
        params.push_list("Tags", &self.tags);
        params.push_list("TransitiveTagKeys", &self.transitive_tag_keys);
        params.push_str("ExternalId", &self.external_id);
        params.push_str("SerialNumber", &self.serial_number);
        params.push_str("TokenCode", &self.token_code);
        params.push_str("SourceIdentity", &self.source_identity);
        params.push_list("ProvidedContexts", &self.provided_contexts);
    }
}

/// Parameters for `AssumeRoleWithSAML`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct AssumeRoleWithSamlRequest {
    /// The ARN of the role to assume.
    pub role_arn: Option<String>,

    /// The ARN of the SAML provider in IAM that describes the IdP.
    pub principal_arn: Option<String>,

    /// The base64-encoded SAML authentication response provided by the IdP.
    pub saml_assertion: Option<String>,

    pub policy_arns: Option<Vec<PolicyDescriptorType>>,

    pub policy: Option<String>,

    pub duration_seconds: Option<i32>,
}

impl AssumeRoleWithSamlRequest {
    pub fn builder() -> AssumeRoleWithSamlRequestBuilder {
        AssumeRoleWithSamlRequestBuilder::default()
    }
}

shape_accessors!(AssumeRoleWithSamlRequest {
    str role_arn / set_role_arn;
    str principal_arn / set_principal_arn;
    str saml_assertion / set_saml_assertion;
    list policy_arns / set_policy_arns: PolicyDescriptorType;
    str policy / set_policy;
    copy duration_seconds / set_duration_seconds: i32;
});

display_shape!(AssumeRoleWithSamlRequest {
    role_arn: "RoleArn",
    principal_arn: "PrincipalArn",
    saml_assertion: "SAMLAssertion" (sensitive),
    policy_arns: "PolicyArns",
    policy: "Policy",
    duration_seconds: "DurationSeconds",
});

impl StsRequest for AssumeRoleWithSamlRequest {
    const ACTION: &'static str = "AssumeRoleWithSAML";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_str("RoleArn", &self.role_arn);
        params.push_str("PrincipalArn", &self.principal_arn);
        params.push_str("SAMLAssertion", &self.saml_assertion);
        params.push_list("PolicyArns", &self.policy_arns);
        params.push_str("Policy", &self.policy);
        params.push_i32("DurationSeconds", self.duration_seconds);
    }
}

/// Parameters for `AssumeRoleWithWebIdentity`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct AssumeRoleWithWebIdentityRequest {
    pub role_arn: Option<String>,

    pub role_session_name: Option<String>,

    /// The OAuth 2.0 access token or OpenID Connect ID token provided by the identity provider.
    pub web_identity_token: Option<String>,

    /// The fully qualified host component of the OAuth 2.0 identity provider's domain name. Only used for OAuth 2.0
    /// access tokens; omitted for OpenID Connect ID tokens.
    pub provider_id: Option<String>,

    pub policy_arns: Option<Vec<PolicyDescriptorType>>,

    pub policy: Option<String>,

    pub duration_seconds: Option<i32>,
}

impl AssumeRoleWithWebIdentityRequest {
    pub fn builder() -> AssumeRoleWithWebIdentityRequestBuilder {
        AssumeRoleWithWebIdentityRequestBuilder::default()
    }
}

shape_accessors!(AssumeRoleWithWebIdentityRequest {
    str role_arn / set_role_arn;
    str role_session_name / set_role_session_name;
    str web_identity_token / set_web_identity_token;
    str provider_id / set_provider_id;
    list policy_arns / set_policy_arns: PolicyDescriptorType;
    str policy / set_policy;
    copy duration_seconds / set_duration_seconds: i32;
});

display_shape!(AssumeRoleWithWebIdentityRequest {
    role_arn: "RoleArn",
    role_session_name: "RoleSessionName",
    web_identity_token: "WebIdentityToken" (sensitive),
    provider_id: "ProviderId",
    policy_arns: "PolicyArns",
    policy: "Policy",
    duration_seconds: "DurationSeconds",
});

impl StsRequest for AssumeRoleWithWebIdentityRequest {
    const ACTION: &'static str = "AssumeRoleWithWebIdentity";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_str("RoleArn", &self.role_arn);
        params.push_str("RoleSessionName", &self.role_session_name);
        params.push_str("WebIdentityToken", &self.web_identity_token);
        params.push_str("ProviderId", &self.provider_id);
        params.push_list("PolicyArns", &self.policy_arns);
        params.push_str("Policy", &self.policy);
        params.push_i32("DurationSeconds", self.duration_seconds);
    }
}

/// Parameters for `DecodeAuthorizationMessage`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct DecodeAuthorizationMessageRequest {
    /// The encoded message returned with an authorization failure.
    pub encoded_message: Option<String>,
}

impl DecodeAuthorizationMessageRequest {
    pub fn builder() -> DecodeAuthorizationMessageRequestBuilder {
        DecodeAuthorizationMessageRequestBuilder::default()
    }
}

shape_accessors!(DecodeAuthorizationMessageRequest {
    str encoded_message / set_encoded_message;
});

display_shape!(DecodeAuthorizationMessageRequest {
    encoded_message: "EncodedMessage",
});

impl StsRequest for DecodeAuthorizationMessageRequest {
    const ACTION: &'static str = "DecodeAuthorizationMessage";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_str("EncodedMessage", &self.encoded_message);
    }
}

/// Parameters for `GetAccessKeyInfo`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct GetAccessKeyInfoRequest {
    pub access_key_id: Option<String>,
}

impl GetAccessKeyInfoRequest {
    pub fn builder() -> GetAccessKeyInfoRequestBuilder {
        GetAccessKeyInfoRequestBuilder::default()
    }
}

shape_accessors!(GetAccessKeyInfoRequest {
    str access_key_id / set_access_key_id;
});

display_shape!(GetAccessKeyInfoRequest {
    access_key_id: "AccessKeyId",
});

impl StsRequest for GetAccessKeyInfoRequest {
    const ACTION: &'static str = "GetAccessKeyInfo";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_str("AccessKeyId", &self.access_key_id);
    }
}

/// Parameters for `GetCallerIdentity`. The operation takes no parameters.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GetCallerIdentityRequest {}

impl GetCallerIdentityRequest {
    pub fn new() -> Self {
        Self {}
    }
}

display_shape!(GetCallerIdentityRequest {});

impl StsRequest for GetCallerIdentityRequest {
    const ACTION: &'static str = "GetCallerIdentity";

    fn write_members(&self, _params: &mut QueryParameters) {}
}

/// Parameters for `GetFederationToken`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct GetFederationTokenRequest {
    /// The name of the federated user, used in the federated user's ARN.
    pub name: Option<String>,

    pub policy: Option<String>,

    pub policy_arns: Option<Vec<PolicyDescriptorType>>,

    pub duration_seconds: Option<i32>,

    pub tags: Option<Vec<Tag>>,
}

impl GetFederationTokenRequest {
    pub fn builder() -> GetFederationTokenRequestBuilder {
        GetFederationTokenRequestBuilder::default()
    }
}

shape_accessors!(GetFederationTokenRequest {
    str name / set_name;
    str policy / set_policy;
    list policy_arns / set_policy_arns: PolicyDescriptorType;
    copy duration_seconds / set_duration_seconds: i32;
    list tags / set_tags: Tag;
});

display_shape!(GetFederationTokenRequest {
    name: "Name",
    policy: "Policy",
    policy_arns: "PolicyArns",
    duration_seconds: "DurationSeconds",
    tags: "Tags",
});

impl StsRequest for GetFederationTokenRequest {
    const ACTION: &'static str = "GetFederationToken";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_str("Name", &self.name);
        params.push_str("Policy", &self.policy);
        params.push_list("PolicyArns", &self.policy_arns);
        params.push_i32("DurationSeconds", self.duration_seconds);
        params.push_list("Tags", &self.tags);
    }
}

/// Parameters for `GetSessionToken`.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct GetSessionTokenRequest {
    pub duration_seconds: Option<i32>,

    pub serial_number: Option<String>,

    pub token_code: Option<String>,
}

impl GetSessionTokenRequest {
    pub fn builder() -> GetSessionTokenRequestBuilder {
        GetSessionTokenRequestBuilder::default()
    }
}

shape_accessors!(GetSessionTokenRequest {
    copy duration_seconds / set_duration_seconds: i32;
    str serial_number / set_serial_number;
    str token_code / set_token_code;
});

display_shape!(GetSessionTokenRequest {
    duration_seconds: "DurationSeconds",
    serial_number: "SerialNumber",
    token_code: "TokenCode",
});

impl StsRequest for GetSessionTokenRequest {
    const ACTION: &'static str = "GetSessionToken";

    fn write_members(&self, params: &mut QueryParameters) {
        params.push_i32("DurationSeconds", self.duration_seconds);
        params.push_str("SerialNumber", &self.serial_number);
        params.push_str("TokenCode", &self.token_code);
    }
}
