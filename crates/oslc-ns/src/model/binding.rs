use std::fmt;

use serde::{Deserialize, Serialize};

/// A single prefix-to-namespace pairing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceBinding {
    pub prefix: String,
    pub namespace_uri: String,
}

impl NamespaceBinding {
    pub fn new(prefix: impl Into<String>, namespace_uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            namespace_uri: namespace_uri.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }
}

/// Renders as a Turtle-style `prefix: <uri>` pair.
impl fmt::Display for NamespaceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: <{}>", self.prefix, self.namespace_uri)
    }
}

impl<P: Into<String>, U: Into<String>> From<(P, U)> for NamespaceBinding {
    fn from((prefix, namespace_uri): (P, U)) -> Self {
        Self::new(prefix, namespace_uri)
    }
}
