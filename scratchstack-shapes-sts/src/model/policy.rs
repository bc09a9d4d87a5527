use {
    crate::query::{QueryMember, QueryParameters},
    derive_builder::Builder,
};

/// A reference to an IAM managed policy to use as a session policy.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct PolicyDescriptorType {
    /// The ARN of the managed policy.
    pub arn: Option<String>,
}

impl PolicyDescriptorType {
    pub fn builder() -> PolicyDescriptorTypeBuilder {
        PolicyDescriptorTypeBuilder::default()
    }
}

shape_accessors!(PolicyDescriptorType {
    str arn / set_arn;
});

display_shape!(PolicyDescriptorType {
    arn: "arn",
});

impl QueryMember for PolicyDescriptorType {
    fn write_member(&self, prefix: &str, params: &mut QueryParameters) {
        params.push_str(&format!("{prefix}.arn"), &self.arn);
    }
}

/// Context asserted by a trusted context provider. Reserved for future use by the service.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct ProvidedContext {
    pub provider_arn: Option<String>,
    pub context_assertion: Option<String>,
}

impl ProvidedContext {
    pub fn builder() -> ProvidedContextBuilder {
        ProvidedContextBuilder::default()
    }
}

shape_accessors!(ProvidedContext {
    str provider_arn / set_provider_arn;
    str context_assertion / set_context_assertion;
});

display_shape!(ProvidedContext {
    provider_arn: "ProviderArn",
    context_assertion: "ContextAssertion",
});

impl QueryMember for ProvidedContext {
    fn write_member(&self, prefix: &str, params: &mut QueryParameters) {
        params.push_str(&format!("{prefix}.ProviderArn"), &self.provider_arn);
        params.push_str(&format!("{prefix}.ContextAssertion"), &self.context_assertion);
    }
}

/// A session tag: a key-value pair passed when requesting temporary credentials.
///
/// The key is required by the service; the value may be empty.
#[derive(Builder, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[builder(default, setter(into, strip_option))]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }
}

shape_accessors!(Tag {
    str key / set_key;
    str value / set_value;
});

display_shape!(Tag {
    key: "Key",
    value: "Value",
});

impl QueryMember for Tag {
    fn write_member(&self, prefix: &str, params: &mut QueryParameters) {
        params.push_str(&format!("{prefix}.Key"), &self.key);
        params.push_str(&format!("{prefix}.Value"), &self.value);
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{PolicyDescriptorType, ProvidedContext, Tag},
        pretty_assertions::{assert_eq, assert_ne},
        std::collections::HashSet,
    };

    #[test_log::test]
    fn test_tag_display_omits_unset() {
        let tag = Tag::builder().key("env").build().unwrap();
        assert_eq!(tag.to_string(), "{Key: env,}");
        assert!(!tag.to_string().contains("Value"));

        let tag = Tag::builder().value("prod").build().unwrap();
        assert_eq!(tag.to_string(), "{Value: prod}");

        let tag = Tag::builder().key("env").value("").build().unwrap();
        assert_eq!(tag.to_string(), "{Key: env,Value: }");
    }

    #[test_log::test]
    fn test_tag_equality() {
        let a = Tag::builder().key("env").value("prod").build().unwrap();
        let b = Tag::builder().key("env").value("prod").build().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, a.clone());

        // Unset and empty are different states.
        let empty_value = Tag::builder().key("env").value("").build().unwrap();
        let unset_value = Tag::builder().key("env").build().unwrap();
        assert_ne!(empty_value, unset_value);
        assert_ne!(a, unset_value);
        assert_ne!(unset_value, a);

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        set.insert(empty_value);
        set.insert(unset_value);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&a));

        assert_eq!(Tag::default(), Tag::default());
        assert_ne!(Some(a), None);
    }

    #[test_log::test]
    fn test_tag_setters() {
        let mut tag = Tag::default();
        tag.set_key(Some("team".to_string()));
        assert_eq!(tag.key(), Some("team"));
        tag.set_value(Some("platform".to_string()));
        assert_eq!(tag.value(), Some("platform"));
        tag.set_key(None);
        assert_eq!(tag.key(), None);
        assert_eq!(tag.to_string(), "{Value: platform}");
    }

    #[test_log::test]
    fn test_policy_descriptor_and_context() {
        let policy = PolicyDescriptorType::builder().arn("arn:aws:iam::aws:policy/ReadOnlyAccess").build().unwrap();
        assert_eq!(policy.arn(), Some("arn:aws:iam::aws:policy/ReadOnlyAccess"));
        assert_eq!(policy.to_string(), "{arn: arn:aws:iam::aws:policy/ReadOnlyAccess}");

        let context = ProvidedContext::builder().provider_arn("arn:aws:iam::aws:contextProvider/IdentityCenter").build().unwrap();
        assert_eq!(context.context_assertion(), None);
        assert_eq!(context.to_string(), "{ProviderArn: arn:aws:iam::aws:contextProvider/IdentityCenter,}");
    }
}
