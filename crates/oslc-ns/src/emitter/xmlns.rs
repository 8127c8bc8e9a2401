use std::io::{self, Write};

use super::PrefixWriter;
use crate::registry::NamespaceRegistry;

/// RDF/XML namespace attribute writer, one `xmlns:p="uri"` per line.
pub struct XmlnsWriter<W: Write> {
    writer: W,
}

impl<W: Write> XmlnsWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn escape_attr(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }
}

impl<W: Write> PrefixWriter for XmlnsWriter<W> {
    fn write_registry(&mut self, registry: &NamespaceRegistry) -> io::Result<usize> {
        for binding in registry {
            let uri = Self::escape_attr(&binding.namespace_uri);
            if binding.prefix.is_empty() {
                writeln!(self.writer, "xmlns=\"{uri}\"")?;
            } else {
                writeln!(self.writer, "xmlns:{}=\"{uri}\"", binding.prefix)?;
            }
        }
        Ok(registry.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
