use std::io::{self, Write};

use super::PrefixWriter;
use crate::registry::NamespaceRegistry;

/// SPARQL `PREFIX` declaration writer.
pub struct SparqlWriter<W: Write> {
    writer: W,
}

impl<W: Write> SparqlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrefixWriter for SparqlWriter<W> {
    fn write_registry(&mut self, registry: &NamespaceRegistry) -> io::Result<usize> {
        for binding in registry {
            writeln!(
                self.writer,
                "PREFIX {}: <{}>",
                binding.prefix, binding.namespace_uri
            )?;
        }
        Ok(registry.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
