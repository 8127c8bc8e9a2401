pub mod jsonld;
pub mod sparql;
pub mod turtle;
pub mod xmlns;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::registry::NamespaceRegistry;

use self::jsonld::JsonLdWriter;
use self::sparql::SparqlWriter;
use self::turtle::TurtleWriter;
use self::xmlns::XmlnsWriter;

/// Writes a registry's bindings as prefix declarations in some RDF syntax.
pub trait PrefixWriter {
    /// Write every binding in registration order. Returns how many were written.
    fn write_registry(&mut self, registry: &NamespaceRegistry) -> io::Result<usize>;
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Syntax of the emitted prefix declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Turtle `@prefix` directives.
    #[value(alias = "ttl")]
    Turtle,
    /// SPARQL `PREFIX` declarations.
    Sparql,
    /// RDF/XML `xmlns:` attributes.
    Xmlns,
    /// JSON-LD `@context` object.
    #[value(alias = "json-ld")]
    Jsonld,
}

impl OutputFormat {
    pub fn writer<'a, W: Write + 'a>(self, writer: W) -> Box<dyn PrefixWriter + 'a> {
        match self {
            OutputFormat::Turtle => Box::new(TurtleWriter::new(writer)),
            OutputFormat::Sparql => Box::new(SparqlWriter::new(writer)),
            OutputFormat::Xmlns => Box::new(XmlnsWriter::new(writer)),
            OutputFormat::Jsonld => Box::new(JsonLdWriter::new(writer)),
        }
    }
}
