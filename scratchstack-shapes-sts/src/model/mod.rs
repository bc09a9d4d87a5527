//! Shapes shared between STS requests and results.

mod credentials;
mod policy;

pub use self::{
    credentials::{
        AssumedRoleUser, AssumedRoleUserBuilder, AssumedRoleUserBuilderError, Credentials, CredentialsBuilder,
        CredentialsBuilderError, FederatedUser, FederatedUserBuilder, FederatedUserBuilderError,
    },
    policy::{
        PolicyDescriptorType, PolicyDescriptorTypeBuilder, PolicyDescriptorTypeBuilderError, ProvidedContext,
        ProvidedContextBuilder, ProvidedContextBuilderError, Tag, TagBuilder, TagBuilderError,
    },
};
