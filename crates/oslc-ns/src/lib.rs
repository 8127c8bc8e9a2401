//! Namespace-binding registry for OSLC and RDF vocabularies.
//!
//! ```
//! use oslc_ns::NamespaceRegistry;
//!
//! let registry = NamespaceRegistry::from_bindings([
//!     ("dcterms", "http://purl.org/dc/terms/"),
//!     ("oslc", "http://open-services.net/ns/core#"),
//! ])
//! .unwrap();
//! assert_eq!(registry.resolve("oslc").unwrap(), "http://open-services.net/ns/core#");
//! ```

pub mod emitter;
pub mod error;
pub mod model;
pub mod registry;
pub mod schema;

pub use error::{RegistryError, SchemaError};
pub use model::binding::NamespaceBinding;
pub use registry::NamespaceRegistry;
