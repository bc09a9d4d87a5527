//! Result records for each STS operation.
//!
//! These are the contents of the `<OperationResult>` element of each response. They are normally produced by
//! [decode_response][crate::decode_response].

use {
    crate::model::{AssumedRoleUser, Credentials, FederatedUser},
    derive_builder::Builder,
    serde::{Deserialize, Serialize},
};

/// The result of `AssumeRole`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct AssumeRoleResult {
    /// The temporary security credentials.
    #[serde(rename = "Credentials", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    #[serde(rename = "AssumedRoleUser", skip_serializing_if = "Option::is_none")]
    pub assumed_role_user: Option<AssumedRoleUser>,

    /// The percentage (0-100) of the allowed size that the packed session policies and tags consume.
    #[serde(rename = "$unflatten=PackedPolicySize", skip_serializing_if = "Option::is_none")]
    pub packed_policy_size: Option<i32>,

    #[serde(rename = "$unflatten=SourceIdentity", skip_serializing_if = "Option::is_none")]
    pub source_identity: Option<String>,
}

impl AssumeRoleResult {
    pub fn builder() -> AssumeRoleResultBuilder {
        AssumeRoleResultBuilder::default()
    }
}

shape_accessors!(AssumeRoleResult {
    shape credentials / set_credentials: Credentials;
    shape assumed_role_user / set_assumed_role_user: AssumedRoleUser;
    copy packed_policy_size / set_packed_policy_size: i32;
    str source_identity / set_source_identity;
});

display_shape!(AssumeRoleResult {
    credentials: "Credentials",
    assumed_role_user: "AssumedRoleUser",
    packed_policy_size: "PackedPolicySize",
    source_identity: "SourceIdentity",
});

/// The result of `AssumeRoleWithSAML`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct AssumeRoleWithSamlResult {
    #[serde(rename = "Credentials", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    #[serde(rename = "AssumedRoleUser", skip_serializing_if = "Option::is_none")]
    pub assumed_role_user: Option<AssumedRoleUser>,

    #[serde(rename = "$unflatten=PackedPolicySize", skip_serializing_if = "Option::is_none")]
    pub packed_policy_size: Option<i32>,

    /// The value of the `NameID` element in the `Subject` element of the SAML assertion.
    #[serde(rename = "$unflatten=Subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The format of the name ID, e.g. `persistent` or `transient`.
    #[serde(rename = "$unflatten=SubjectType", skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,

    #[serde(rename = "$unflatten=Issuer", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(rename = "$unflatten=Audience", skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// A hash of the issuer, account ID, and SAML provider name, identifying the user across sessions.
    #[serde(rename = "$unflatten=NameQualifier", skip_serializing_if = "Option::is_none")]
    pub name_qualifier: Option<String>,

    #[serde(rename = "$unflatten=SourceIdentity", skip_serializing_if = "Option::is_none")]
    pub source_identity: Option<String>,
}

impl AssumeRoleWithSamlResult {
    pub fn builder() -> AssumeRoleWithSamlResultBuilder {
        AssumeRoleWithSamlResultBuilder::default()
    }
}

shape_accessors!(AssumeRoleWithSamlResult {
    shape credentials / set_credentials: Credentials;
    shape assumed_role_user / set_assumed_role_user: AssumedRoleUser;
    copy packed_policy_size / set_packed_policy_size: i32;
    str subject / set_subject;
    str subject_type / set_subject_type;
    str issuer / set_issuer;
    str audience / set_audience;
    str name_qualifier / set_name_qualifier;
    str source_identity / set_source_identity;
});

display_shape!(AssumeRoleWithSamlResult {
    credentials: "Credentials",
    assumed_role_user: "AssumedRoleUser",
    packed_policy_size: "PackedPolicySize",
    subject: "Subject",
    subject_type: "SubjectType",
    issuer: "Issuer",
    audience: "Audience",
    name_qualifier: "NameQualifier",
    source_identity: "SourceIdentity",
});

/// The result of `AssumeRoleWithWebIdentity`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct AssumeRoleWithWebIdentityResult {
    #[serde(rename = "Credentials", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    /// The unique user identifier returned by the identity provider (the `sub` claim for OpenID Connect tokens).
    #[serde(rename = "$unflatten=SubjectFromWebIdentityToken", skip_serializing_if = "Option::is_none")]
    pub subject_from_web_identity_token: Option<String>,

    #[serde(rename = "AssumedRoleUser", skip_serializing_if = "Option::is_none")]
    pub assumed_role_user: Option<AssumedRoleUser>,

    #[serde(rename = "$unflatten=PackedPolicySize", skip_serializing_if = "Option::is_none")]
    pub packed_policy_size: Option<i32>,

    /// The issuing authority of the web identity token (the `iss` claim for OpenID Connect tokens).
    #[serde(rename = "$unflatten=Provider", skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// The intended audience of the web identity token, usually the client ID of the application.
    #[serde(rename = "$unflatten=Audience", skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(rename = "$unflatten=SourceIdentity", skip_serializing_if = "Option::is_none")]
    pub source_identity: Option<String>,
}

impl AssumeRoleWithWebIdentityResult {
    pub fn builder() -> AssumeRoleWithWebIdentityResultBuilder {
        AssumeRoleWithWebIdentityResultBuilder::default()
    }
}

shape_accessors!(AssumeRoleWithWebIdentityResult {
    shape credentials / set_credentials: Credentials;
    str subject_from_web_identity_token / set_subject_from_web_identity_token;
    shape assumed_role_user / set_assumed_role_user: AssumedRoleUser;
    copy packed_policy_size / set_packed_policy_size: i32;
    str provider / set_provider;
    str audience / set_audience;
    str source_identity / set_source_identity;
});

display_shape!(AssumeRoleWithWebIdentityResult {
    credentials: "Credentials",
    subject_from_web_identity_token: "SubjectFromWebIdentityToken",
    assumed_role_user: "AssumedRoleUser",
    packed_policy_size: "PackedPolicySize",
    provider: "Provider",
    audience: "Audience",
    source_identity: "SourceIdentity",
});

/// The result of `DecodeAuthorizationMessage`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct DecodeAuthorizationMessageResult {
    /// The decoded authorization details, as a JSON document.
    #[serde(rename = "$unflatten=DecodedMessage", skip_serializing_if = "Option::is_none")]
    pub decoded_message: Option<String>,
}

impl DecodeAuthorizationMessageResult {
    pub fn builder() -> DecodeAuthorizationMessageResultBuilder {
        DecodeAuthorizationMessageResultBuilder::default()
    }
}

shape_accessors!(DecodeAuthorizationMessageResult {
    str decoded_message / set_decoded_message;
});

display_shape!(DecodeAuthorizationMessageResult {
    decoded_message: "DecodedMessage",
});

/// The result of `GetAccessKeyInfo`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct GetAccessKeyInfoResult {
    /// The account that owns the access key.
    #[serde(rename = "$unflatten=Account", skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl GetAccessKeyInfoResult {
    pub fn builder() -> GetAccessKeyInfoResultBuilder {
        GetAccessKeyInfoResultBuilder::default()
    }
}

shape_accessors!(GetAccessKeyInfoResult {
    str account / set_account;
});

display_shape!(GetAccessKeyInfoResult {
    account: "Account",
});

/// The result of `GetCallerIdentity`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct GetCallerIdentityResult {
    /// The unique identifier of the calling entity.
    #[serde(rename = "$unflatten=UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(rename = "$unflatten=Account", skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(rename = "$unflatten=Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl GetCallerIdentityResult {
    pub fn builder() -> GetCallerIdentityResultBuilder {
        GetCallerIdentityResultBuilder::default()
    }
}

shape_accessors!(GetCallerIdentityResult {
    str user_id / set_user_id;
    str account / set_account;
    str arn / set_arn;
});

display_shape!(GetCallerIdentityResult {
    user_id: "UserId",
    account: "Account",
    arn: "Arn",
});

/// The result of `GetFederationToken`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct GetFederationTokenResult {
    #[serde(rename = "Credentials", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    #[serde(rename = "FederatedUser", skip_serializing_if = "Option::is_none")]
    pub federated_user: Option<FederatedUser>,

    #[serde(rename = "$unflatten=PackedPolicySize", skip_serializing_if = "Option::is_none")]
    pub packed_policy_size: Option<i32>,
}

impl GetFederationTokenResult {
    pub fn builder() -> GetFederationTokenResultBuilder {
        GetFederationTokenResultBuilder::default()
    }
}

shape_accessors!(GetFederationTokenResult {
    shape credentials / set_credentials: Credentials;
    shape federated_user / set_federated_user: FederatedUser;
    copy packed_policy_size / set_packed_policy_size: i32;
});

display_shape!(GetFederationTokenResult {
    credentials: "Credentials",
    federated_user: "FederatedUser",
    packed_policy_size: "PackedPolicySize",
});

/// The result of `GetSessionToken`.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct GetSessionTokenResult {
    #[serde(rename = "Credentials", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

impl GetSessionTokenResult {
    pub fn builder() -> GetSessionTokenResultBuilder {
        GetSessionTokenResultBuilder::default()
    }
}

shape_accessors!(GetSessionTokenResult {
    shape credentials / set_credentials: Credentials;
});

display_shape!(GetSessionTokenResult {
    credentials: "Credentials",
});
