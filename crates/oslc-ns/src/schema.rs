//! Schema sources: the built-in OSLC domains declarations and JSON schema files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::model::binding::NamespaceBinding;
use crate::model::vocab::{dcterms, ems, foaf, for_req, oslc, oslc_auto, oslc_data, rdf, rdfs};
use crate::registry::NamespaceRegistry;

/// Namespace declarations of the OSLC domains schema, in declaration order.
///
/// The core vocabularies come first, followed by the per-domain ones. Three
/// domain entries repeat a core binding verbatim.
const OSLC_DOMAINS: &[(&str, &str)] = &[
    (dcterms::PREFIX, dcterms::NAMESPACE),
    (oslc::PREFIX, oslc::NAMESPACE),
    (oslc_data::PREFIX, oslc_data::NAMESPACE),
    (rdf::PREFIX, rdf::NAMESPACE),
    (rdfs::PREFIX, rdfs::NAMESPACE),
    (oslc_auto::PREFIX, oslc_auto::NAMESPACE),
    (dcterms::PREFIX, dcterms::NAMESPACE),
    (ems::PREFIX, ems::NAMESPACE),
    (foaf::PREFIX, foaf::NAMESPACE),
    (for_req::PREFIX, for_req::NAMESPACE),
    (oslc::PREFIX, oslc::NAMESPACE),
    (rdf::PREFIX, rdf::NAMESPACE),
];

/// Raw declarations of the OSLC domains schema, duplicates included.
pub fn oslc_domains_declarations() -> &'static [(&'static str, &'static str)] {
    OSLC_DOMAINS
}

/// Registry for the OSLC domains schema.
pub fn oslc_domains() -> Result<NamespaceRegistry> {
    NamespaceRegistry::from_bindings(OSLC_DOMAINS.iter().copied())
}

/// On-disk schema document.
///
/// ```json
/// { "name": "oslc-domains",
///   "namespaces": [ { "prefix": "dcterms", "namespaceUri": "http://purl.org/dc/terms/" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub namespaces: Vec<NamespaceBinding>,
}

impl SchemaFile {
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_registry(self) -> Result<NamespaceRegistry, SchemaError> {
        Ok(NamespaceRegistry::from_bindings(self.namespaces)?)
    }
}

impl From<&NamespaceRegistry> for SchemaFile {
    fn from(registry: &NamespaceRegistry) -> Self {
        Self {
            name: None,
            namespaces: registry.all().cloned().collect(),
        }
    }
}

/// Load a schema file from disk.
pub fn load_schema(path: &Path) -> Result<SchemaFile, SchemaError> {
    let content = std::fs::read_to_string(path)?;
    let schema = SchemaFile::from_json(&content)?;
    debug!(
        path = %path.display(),
        name = schema.name.as_deref().unwrap_or("<unnamed>"),
        declarations = schema.namespaces.len(),
        "loaded schema"
    );
    Ok(schema)
}
