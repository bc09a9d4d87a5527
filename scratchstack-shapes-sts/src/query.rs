//! Query-protocol encoding of STS requests.
//!
//! STS accepts its parameters as `application/x-www-form-urlencoded` pairs. Nested shapes and lists are flattened
//! into dotted names: `Tags.member.1.Key=env`.

use crate::STS_VERSION_20110615;

/// An ordered list of query parameters for a single STS action.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    /// Start the parameters for `action`, including the `Action` and `Version` parameters.
    pub fn new(action: &str) -> Self {
        Self {
            pairs: vec![
                ("Action".to_string(), action.to_string()),
                ("Version".to_string(), STS_VERSION_20110615.to_string()),
            ],
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Add a string member if it is set.
    pub fn push_str(&mut self, name: &str, value: &Option<String>) {
        if let Some(value) = value {
            self.push(name, value.as_str());
        }
    }

    /// Add an integer member if it is set.
    pub fn push_i32(&mut self, name: &str, value: Option<i32>) {
        if let Some(value) = value {
            self.push(name, value.to_string());
        }
    }

    /// Add a list member if it is set.
    ///
    /// Items are written as `Name.member.N...` with `N` starting at 1. A set but empty list is written as `Name=` so
    /// the service can distinguish it from an unset list.
    pub fn push_list<T: QueryMember>(&mut self, name: &str, value: &Option<Vec<T>>) {
        let Some(items) = value else {
            return;
        };

        if items.is_empty() {
            self.push(name, "");
            return;
        }

        for (i, item) in items.iter().enumerate() {
            item.write_member(&format!("{name}.member.{}", i + 1), self);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Form-urlencode the parameters.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.pairs).finish()
    }
}

/// A value that can appear as an item of a query-protocol list.
pub trait QueryMember {
    /// Write this item's parameters using `prefix` (e.g. `Tags.member.1`) as the base name.
    fn write_member(&self, prefix: &str, params: &mut QueryParameters);
}

impl QueryMember for String {
    fn write_member(&self, prefix: &str, params: &mut QueryParameters) {
        params.push(prefix, self.as_str());
    }
}

/// An STS operation request.
pub trait StsRequest {
    /// The value of the `Action` parameter for this request.
    const ACTION: &'static str;

    /// Write the members of this request that are set, in declaration order.
    fn write_members(&self, params: &mut QueryParameters);

    /// The full parameter list for this request, starting with `Action` and `Version`.
    fn query_parameters(&self) -> QueryParameters {
        let mut params = QueryParameters::new(Self::ACTION);
        self.write_members(&mut params);
        params
    }

    /// The form-urlencoded request body.
    fn to_query_string(&self) -> String {
        self.query_parameters().to_query_string()
    }
}
