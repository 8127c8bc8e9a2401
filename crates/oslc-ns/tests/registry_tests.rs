use oslc_ns::model::vocab::{dcterms, oslc, oslc_auto};
use oslc_ns::{NamespaceBinding, NamespaceRegistry, RegistryError};

const DCTERMS: &str = "http://purl.org/dc/terms/";
const OSLC: &str = "http://open-services.net/ns/core#";

fn registry() -> NamespaceRegistry {
    NamespaceRegistry::from_bindings([("dcterms", DCTERMS), ("oslc", OSLC)]).unwrap()
}

// ---------------------------------------------------------------------------
// register / resolve
// ---------------------------------------------------------------------------

#[test]
fn register_then_resolve() {
    let mut reg = NamespaceRegistry::new();
    reg.register("dcterms", DCTERMS).unwrap();
    reg.register("oslc", OSLC).unwrap();
    assert_eq!(reg.resolve("oslc").unwrap(), OSLC);
    assert_eq!(reg.resolve("dcterms").unwrap(), DCTERMS);
    assert_eq!(reg.len(), 2);
}

#[test]
fn resolve_many_distinct_prefixes() {
    let pairs: Vec<(String, String)> = (0..50)
        .map(|i| (format!("ns{i}"), format!("http://example.org/ns/{i}#")))
        .collect();
    let reg = NamespaceRegistry::from_bindings(pairs.clone()).unwrap();
    for (prefix, uri) in &pairs {
        assert_eq!(reg.resolve(prefix).unwrap(), uri);
    }
}

#[test]
fn identical_reregistration_is_idempotent() {
    let mut reg = registry();
    reg.register("dcterms", DCTERMS).unwrap();
    assert_eq!(reg.len(), 2);
    let prefixes: Vec<&str> = reg.all().map(NamespaceBinding::prefix).collect();
    assert_eq!(prefixes, ["dcterms", "oslc"]);
}

#[test]
fn conflicting_reregistration_fails() {
    let mut reg = registry();
    let err = reg
        .register("oslc", "http://example.org/other#")
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicatePrefix {
            prefix: "oslc".to_string(),
            existing: OSLC.to_string(),
            requested: "http://example.org/other#".to_string(),
        }
    );
    // Registry unchanged.
    assert_eq!(reg.resolve("oslc").unwrap(), OSLC);
    assert_eq!(reg.len(), 2);
}

#[test]
fn from_bindings_stops_at_conflict() {
    let err = NamespaceRegistry::from_bindings([
        ("a", "http://example.org/a#"),
        ("a", "http://example.org/b#"),
    ])
    .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicatePrefix { .. }));
}

#[test]
fn get_and_contains_prefix() {
    let reg = registry();
    assert!(reg.contains_prefix("dcterms"));
    assert!(!reg.contains_prefix("foaf"));
    assert!(!reg.contains_prefix(""));
    assert_eq!(reg.get("oslc"), Some(&NamespaceBinding::new("oslc", OSLC)));
    assert_eq!(reg.get("foaf"), None);
}

#[test]
fn binding_displays_as_turtle_pair() {
    let binding = NamespaceBinding::new("dcterms", DCTERMS);
    assert_eq!(binding.to_string(), "dcterms: <http://purl.org/dc/terms/>");
}

#[test]
fn resolve_unknown_prefix() {
    let reg = registry();
    assert_eq!(
        reg.resolve("foaf").unwrap_err(),
        RegistryError::UnknownPrefix("foaf".to_string())
    );
}

#[test]
fn resolve_on_empty_registry() {
    let reg = NamespaceRegistry::new();
    assert!(reg.is_empty());
    assert!(matches!(
        reg.resolve("dcterms"),
        Err(RegistryError::UnknownPrefix(_))
    ));
}

#[test]
fn invalid_prefix_rejected() {
    let mut reg = NamespaceRegistry::new();
    assert_eq!(
        reg.register("1bad", DCTERMS).unwrap_err(),
        RegistryError::InvalidPrefix("1bad".to_string())
    );
    assert!(reg.is_empty());
}

#[test]
fn relative_namespace_rejected() {
    let mut reg = NamespaceRegistry::new();
    assert_eq!(
        reg.register("dc", "purl.org/dc/terms/").unwrap_err(),
        RegistryError::InvalidNamespaceUri("purl.org/dc/terms/".to_string())
    );
}

#[test]
fn empty_prefix_is_default_namespace() {
    let mut reg = NamespaceRegistry::new();
    reg.register("", OSLC).unwrap();
    assert_eq!(reg.resolve("").unwrap(), OSLC);
    assert_eq!(reg.expand(":Service").unwrap(), format!("{OSLC}Service"));
}

#[test]
fn vocab_constants_register_cleanly() {
    let reg = NamespaceRegistry::from_bindings([
        (dcterms::PREFIX, dcterms::NAMESPACE),
        (oslc::PREFIX, oslc::NAMESPACE),
        (oslc_auto::PREFIX, oslc_auto::NAMESPACE),
    ])
    .unwrap();
    assert_eq!(reg.resolve("oslc_auto").unwrap(), oslc_auto::NAMESPACE);
}

// ---------------------------------------------------------------------------
// prefixes_for
// ---------------------------------------------------------------------------

#[test]
fn prefixes_for_aliased_namespace() {
    let mut reg = registry();
    reg.register("dc", DCTERMS).unwrap();
    assert_eq!(reg.prefixes_for(DCTERMS), ["dcterms", "dc"]);
    assert_eq!(reg.prefixes_for(OSLC), ["oslc"]);
}

#[test]
fn prefixes_for_unbound_namespace_is_empty() {
    let reg = registry();
    assert!(reg.prefixes_for("http://xmlns.com/foaf/0.1/").is_empty());
}

// ---------------------------------------------------------------------------
// all
// ---------------------------------------------------------------------------

#[test]
fn all_yields_registration_order() {
    let reg = registry();
    let all: Vec<NamespaceBinding> = reg.all().cloned().collect();
    assert_eq!(
        all,
        vec![
            NamespaceBinding::new("dcterms", DCTERMS),
            NamespaceBinding::new("oslc", OSLC),
        ]
    );
}

#[test]
fn all_is_restartable() {
    let reg = registry();
    let mut first = reg.all();
    assert_eq!(first.next().unwrap().prefix, "dcterms");
    let second: Vec<&str> = reg.all().map(|b| b.prefix.as_str()).collect();
    assert_eq!(second, ["dcterms", "oslc"]);
    assert_eq!(first.next().unwrap().prefix, "oslc");
    assert!(first.next().is_none());
}

#[test]
fn all_reports_exact_length() {
    let reg = registry();
    assert_eq!(reg.all().len(), 2);
    assert_eq!((&reg).into_iter().count(), 2);
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NamespaceRegistry>();

    let reg = std::sync::Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reg = reg.clone();
            std::thread::spawn(move || reg.resolve("oslc").unwrap().to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), OSLC);
    }
}

// ---------------------------------------------------------------------------
// compact / expand
// ---------------------------------------------------------------------------

#[test]
fn compact_simple_iri() {
    let reg = registry();
    assert_eq!(
        reg.compact("http://purl.org/dc/terms/title").as_deref(),
        Some("dcterms:title")
    );
}

#[test]
fn compact_prefers_longest_namespace() {
    let reg = NamespaceRegistry::from_bindings([
        ("ex", "http://example.org/"),
        ("exv", "http://example.org/vocab#"),
    ])
    .unwrap();
    assert_eq!(
        reg.compact("http://example.org/vocab#Thing").as_deref(),
        Some("exv:Thing")
    );
    assert_eq!(
        reg.compact("http://example.org/Thing").as_deref(),
        Some("ex:Thing")
    );
}

#[test]
fn compact_aliased_namespace_uses_first_prefix() {
    let mut reg = registry();
    reg.register("dc", DCTERMS).unwrap();
    assert_eq!(
        reg.compact("http://purl.org/dc/terms/creator").as_deref(),
        Some("dcterms:creator")
    );
}

#[test]
fn compact_rejects_unsafe_local_names() {
    let reg = registry();
    assert_eq!(reg.compact("http://purl.org/dc/terms/a/b"), None);
    assert_eq!(reg.compact(DCTERMS), None);
    assert_eq!(reg.compact("http://example.org/unbound"), None);
}

#[test]
fn expand_curie() {
    let reg = registry();
    assert_eq!(
        reg.expand("oslc:ServiceProvider").unwrap(),
        oslc::SERVICE_PROVIDER
    );
}

#[test]
fn expand_escapes_local_name() {
    let reg = registry();
    assert_eq!(
        reg.expand("dcterms:has space").unwrap(),
        "http://purl.org/dc/terms/has%20space"
    );
}

#[test]
fn expand_errors() {
    let reg = registry();
    assert_eq!(
        reg.expand("title").unwrap_err(),
        RegistryError::InvalidCurie("title".to_string())
    );
    assert_eq!(
        reg.expand("foaf:name").unwrap_err(),
        RegistryError::UnknownPrefix("foaf".to_string())
    );
}

#[test]
fn compact_then_expand_returns_original() {
    let reg = registry();
    for iri in [dcterms::TITLE, dcterms::IDENTIFIER, oslc::RESOURCE_SHAPE] {
        let curie = reg.compact(iri).unwrap();
        assert_eq!(reg.expand(&curie).unwrap(), iri);
    }
}

#[test]
fn compact_then_expand_keeps_non_ascii_local_names() {
    let reg = registry();
    for iri in [
        "http://purl.org/dc/terms/café",
        "http://open-services.net/ns/core#Ressource_générale",
        "http://purl.org/dc/terms/日本語",
    ] {
        let curie = reg.compact(iri).unwrap();
        assert_eq!(reg.expand(&curie).unwrap(), iri);
    }
    assert_eq!(
        reg.expand("dcterms:café").unwrap(),
        "http://purl.org/dc/terms/café"
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn error_messages_name_the_offender() {
    let mut reg = registry();
    let msg = reg
        .register("oslc", "http://example.org/x#")
        .unwrap_err()
        .to_string();
    assert!(msg.contains("oslc"), "{msg}");
    assert!(msg.contains(OSLC), "{msg}");
    assert!(msg.contains("http://example.org/x#"), "{msg}");

    assert_eq!(
        reg.resolve("nope").unwrap_err().to_string(),
        "unknown prefix: `nope`"
    );
}
