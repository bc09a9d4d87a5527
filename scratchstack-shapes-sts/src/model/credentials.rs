use {
    crate::render::REDACTED,
    chrono::{DateTime, Utc},
    derive_builder::Builder,
    serde::{Deserialize, Serialize},
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

/// A set of temporary security credentials.
///
/// The expiration marks the end of the validity window. This type does not enforce it; callers refresh
/// credentials before they expire.
#[derive(Builder, Clone, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct Credentials {
    /// The access key ID that identifies the temporary security credentials.
    #[serde(rename = "$unflatten=AccessKeyId", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    /// The secret access key used to sign requests.
    #[serde(rename = "$unflatten=SecretAccessKey", skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,

    /// The token that users must pass to the service API to use the temporary credentials.
    #[serde(rename = "$unflatten=SessionToken", skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// The date on which the current credentials expire.
    #[serde(rename = "$unflatten=Expiration", skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// Whether the credentials carry an expiration at or before `now`.
    ///
    /// Credentials without an expiration are never considered expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiration {
            Some(expiration) => expiration <= now,
            None => false,
        }
    }
}

shape_accessors!(Credentials {
    str access_key_id / set_access_key_id;
    str secret_access_key / set_secret_access_key;
    str session_token / set_session_token;
    copy expiration / set_expiration: DateTime<Utc>;
});

display_shape!(Credentials {
    access_key_id: "AccessKeyId",
    secret_access_key: "SecretAccessKey" (sensitive),
    session_token: "SessionToken" (sensitive),
    expiration: "Expiration",
});

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| REDACTED))
            .field("session_token", &self.session_token.as_ref().map(|_| REDACTED))
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// The identifiers for the temporary security credentials that an assume-role operation returns.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct AssumedRoleUser {
    /// A unique identifier of the form `role-id:role-session-name`.
    #[serde(rename = "$unflatten=AssumedRoleId", skip_serializing_if = "Option::is_none")]
    pub assumed_role_id: Option<String>,

    /// The ARN of the temporary security credentials.
    #[serde(rename = "$unflatten=Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl AssumedRoleUser {
    pub fn builder() -> AssumedRoleUserBuilder {
        AssumedRoleUserBuilder::default()
    }
}

shape_accessors!(AssumedRoleUser {
    str assumed_role_id / set_assumed_role_id;
    str arn / set_arn;
});

display_shape!(AssumedRoleUser {
    assumed_role_id: "AssumedRoleId",
    arn: "Arn",
});

/// Identifiers for the federated user associated with a set of credentials.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
pub struct FederatedUser {
    /// The string that identifies the federated user: `account-id:name`.
    #[serde(rename = "$unflatten=FederatedUserId", skip_serializing_if = "Option::is_none")]
    pub federated_user_id: Option<String>,

    /// The ARN that specifies the federated user.
    #[serde(rename = "$unflatten=Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl FederatedUser {
    pub fn builder() -> FederatedUserBuilder {
        FederatedUserBuilder::default()
    }
}

shape_accessors!(FederatedUser {
    str federated_user_id / set_federated_user_id;
    str arn / set_arn;
});

display_shape!(FederatedUser {
    federated_user_id: "FederatedUserId",
    arn: "Arn",
});
