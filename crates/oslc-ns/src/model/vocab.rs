//! Vocabulary constants for the OSLC domains schema.
//!
//! Each module carries the conventional `PREFIX` and the `NAMESPACE` URI of one
//! vocabulary, plus a handful of term IRIs used when talking about OSLC
//! automation resources.

/// Dublin Core Terms (`dcterms:` prefix)
pub mod dcterms {
    pub const PREFIX: &str = "dcterms";
    pub const NAMESPACE: &str = "http://purl.org/dc/terms/";

    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
}

/// OSLC Core (`oslc:` prefix)
pub mod oslc {
    pub const PREFIX: &str = "oslc";
    pub const NAMESPACE: &str = "http://open-services.net/ns/core#";

    pub const SERVICE_PROVIDER: &str = "http://open-services.net/ns/core#ServiceProvider";
    pub const RESOURCE_SHAPE: &str = "http://open-services.net/ns/core#ResourceShape";
}

/// OSLC Data (`oslc_data:` prefix)
pub mod oslc_data {
    pub const PREFIX: &str = "oslc_data";
    pub const NAMESPACE: &str = "http://open-services.net/ns/servicemanagement/1.0/";
}

/// RDF syntax (`rdf:` prefix)
pub mod rdf {
    pub const PREFIX: &str = "rdf";
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
}

/// RDF Schema (`rdfs:` prefix)
pub mod rdfs {
    pub const PREFIX: &str = "rdfs";
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
}

/// OSLC Automation (`oslc_auto:` prefix)
pub mod oslc_auto {
    pub const PREFIX: &str = "oslc_auto";
    pub const NAMESPACE: &str = "http://open-services.net/ns/auto#";

    pub const AUTOMATION_PLAN: &str = "http://open-services.net/ns/auto#AutomationPlan";
    pub const AUTOMATION_RESULT: &str = "http://open-services.net/ns/auto#AutomationResult";
}

/// OSLC Estimation and Measurement (`ems:` prefix)
pub mod ems {
    pub const PREFIX: &str = "ems";
    pub const NAMESPACE: &str = "http://open-services.net/ns/ems#";
}

/// Friend of a Friend (`foaf:` prefix)
pub mod foaf {
    pub const PREFIX: &str = "foaf";
    pub const NAMESPACE: &str = "http://xmlns.com/foaf/0.1/";
}

/// Formal requirements (`forreq:` prefix)
pub mod for_req {
    pub const PREFIX: &str = "forreq";
    pub const NAMESPACE: &str = "http://honeywell.com/ns/forreq#";
}
