use std::io::{self, Write};

use serde_json::{json, Map, Value};

use super::PrefixWriter;
use crate::registry::NamespaceRegistry;

/// JSON-LD `@context` writer. The empty prefix becomes `@vocab`.
pub struct JsonLdWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLdWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The `{"@context": {...}}` document for `registry`, keys in registration order.
    pub fn context(registry: &NamespaceRegistry) -> Value {
        let mut context = Map::with_capacity(registry.len());
        for binding in registry {
            let key = if binding.prefix.is_empty() {
                "@vocab".to_string()
            } else {
                binding.prefix.clone()
            };
            context.insert(key, Value::String(binding.namespace_uri.clone()));
        }
        json!({ "@context": context })
    }
}

impl<W: Write> PrefixWriter for JsonLdWriter<W> {
    fn write_registry(&mut self, registry: &NamespaceRegistry) -> io::Result<usize> {
        serde_json::to_writer_pretty(&mut self.writer, &Self::context(registry))?;
        writeln!(self.writer)?;
        Ok(registry.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
