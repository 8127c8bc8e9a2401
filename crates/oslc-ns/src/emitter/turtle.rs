use std::io::{self, Write};

use super::PrefixWriter;
use crate::registry::NamespaceRegistry;

/// Turtle `@prefix` directive writer.
pub struct TurtleWriter<W: Write> {
    writer: W,
}

impl<W: Write> TurtleWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrefixWriter for TurtleWriter<W> {
    fn write_registry(&mut self, registry: &NamespaceRegistry) -> io::Result<usize> {
        for binding in registry {
            writeln!(
                self.writer,
                "@prefix {}: <{}> .",
                binding.prefix, binding.namespace_uri
            )?;
        }
        Ok(registry.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
