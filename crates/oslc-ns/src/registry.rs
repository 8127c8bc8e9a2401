//! The namespace-binding registry.
//!
//! A [`NamespaceRegistry`] keeps prefix-to-URI bindings in the order they were
//! registered and answers lookups in both directions. Registries are built once
//! from a fixed list of declarations and read afterwards; mutation needs `&mut`,
//! so shared readers never observe a write in progress.

use std::collections::HashMap;
use std::slice;

use tracing::{debug, trace, warn};

use crate::error::{RegistryError, Result};
use crate::model::binding::NamespaceBinding;
use crate::model::iri;

/// Ordered prefix-to-namespace mapping for a single schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRegistry {
    bindings: Vec<NamespaceBinding>,
    by_prefix: HashMap<String, usize>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by registering each pair in order.
    ///
    /// Stops at the first failing registration and returns its error.
    pub fn from_bindings<I, B>(bindings: I) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: Into<NamespaceBinding>,
    {
        let mut registry = Self::new();
        for binding in bindings {
            let NamespaceBinding {
                prefix,
                namespace_uri,
            } = binding.into();
            registry.register(prefix, namespace_uri)?;
        }
        Ok(registry)
    }

    /// Bind `prefix` to `namespace_uri`.
    ///
    /// Registering an identical pair again is a no-op and keeps the original
    /// position. Binding a different URI to a used prefix fails with
    /// [`RegistryError::DuplicatePrefix`] and leaves the registry unchanged.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        namespace_uri: impl Into<String>,
    ) -> Result<()> {
        let prefix = prefix.into();
        let namespace_uri = namespace_uri.into();

        if !iri::is_valid_prefix(&prefix) {
            return Err(RegistryError::InvalidPrefix(prefix));
        }
        if !iri::is_absolute_uri(&namespace_uri) {
            return Err(RegistryError::InvalidNamespaceUri(namespace_uri));
        }

        if let Some(&idx) = self.by_prefix.get(&prefix) {
            let existing = &self.bindings[idx];
            if existing.namespace_uri == namespace_uri {
                trace!(%prefix, %namespace_uri, "prefix already bound to the same namespace");
                return Ok(());
            }
            warn!(
                %prefix,
                existing = %existing.namespace_uri,
                requested = %namespace_uri,
                "conflicting namespace for bound prefix"
            );
            return Err(RegistryError::DuplicatePrefix {
                existing: existing.namespace_uri.clone(),
                prefix,
                requested: namespace_uri,
            });
        }

        debug!(%prefix, %namespace_uri, "registered namespace");
        self.by_prefix.insert(prefix.clone(), self.bindings.len());
        self.bindings.push(NamespaceBinding {
            prefix,
            namespace_uri,
        });
        Ok(())
    }

    /// The namespace URI bound to `prefix`.
    pub fn resolve(&self, prefix: &str) -> Result<&str> {
        self.get(prefix)
            .map(NamespaceBinding::namespace_uri)
            .ok_or_else(|| RegistryError::UnknownPrefix(prefix.to_string()))
    }

    /// Every prefix bound to `namespace_uri`, in registration order.
    pub fn prefixes_for(&self, namespace_uri: &str) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.namespace_uri == namespace_uri)
            .map(NamespaceBinding::prefix)
            .collect()
    }

    /// All bindings in registration order. Each call starts a fresh pass.
    pub fn all(&self) -> Bindings<'_> {
        Bindings {
            inner: self.bindings.iter(),
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&NamespaceBinding> {
        self.by_prefix.get(prefix).map(|&idx| &self.bindings[idx])
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.by_prefix.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Shorten `iri` to `prefix:local` using the longest matching namespace.
    ///
    /// Returns `None` when no namespace matches or the remaining local name
    /// would need escaping. Among aliased prefixes the first registered wins.
    pub fn compact(&self, iri: &str) -> Option<String> {
        let mut best: Option<&NamespaceBinding> = None;
        for binding in &self.bindings {
            if iri.starts_with(binding.namespace_uri.as_str())
                && best.is_none_or(|prev| binding.namespace_uri.len() > prev.namespace_uri.len())
            {
                best = Some(binding);
            }
        }
        let binding = best?;
        let local = &iri[binding.namespace_uri.len()..];
        iri::is_simple_local(local).then(|| format!("{}:{local}", binding.prefix))
    }

    /// Expand a prefixed name such as `dcterms:title` to a full IRI.
    pub fn expand(&self, curie: &str) -> Result<String> {
        let (prefix, local) = curie
            .split_once(':')
            .ok_or_else(|| RegistryError::InvalidCurie(curie.to_string()))?;
        let namespace = self.resolve(prefix)?;
        Ok(format!("{namespace}{}", iri::escape_local(local)))
    }
}

/// Iterator over a registry's bindings, returned by [`NamespaceRegistry::all`].
#[derive(Debug, Clone)]
pub struct Bindings<'a> {
    inner: slice::Iter<'a, NamespaceBinding>,
}

impl<'a> Iterator for Bindings<'a> {
    type Item = &'a NamespaceBinding;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Bindings<'_> {}

impl<'a> IntoIterator for &'a NamespaceRegistry {
    type Item = &'a NamespaceBinding;
    type IntoIter = Bindings<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
