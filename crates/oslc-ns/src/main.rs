use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oslc_ns::emitter::OutputFormat;
use oslc_ns::schema::{load_schema, oslc_domains};
use oslc_ns::NamespaceRegistry;

/// Inspect RDF namespace bindings of an OSLC schema.
#[derive(Parser)]
#[command(name = "oslc-ns", version, about)]
struct Cli {
    /// JSON schema file [default: built-in OSLC domains schema].
    #[arg(short, long, value_name = "FILE", global = true)]
    schema: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write all prefix declarations.
    List {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "turtle")]
        format: OutputFormat,

        /// Output file path [default: stdout].
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the namespace URI bound to a prefix.
    Resolve { prefix: String },
    /// Print every prefix bound to a namespace URI.
    Prefixes { uri: String },
    /// Expand a prefixed name such as `dcterms:title`.
    Expand { curie: String },
    /// Shorten a full IRI to a prefixed name.
    Compact { iri: String },
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn load_registry(cli: &Cli) -> Result<NamespaceRegistry, Box<dyn std::error::Error>> {
    match &cli.schema {
        Some(path) => Ok(load_schema(path)?.into_registry()?),
        None => Ok(oslc_domains()?),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(&cli)?;
    tracing::debug!(bindings = registry.len(), "registry ready");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::List { format, output } => {
            let output_writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(BufWriter::new(stdout)),
            };
            let mut writer = format.writer(output_writer);
            let count = writer.write_registry(&registry)?;
            writer.flush()?;
            tracing::info!("Wrote {count} prefix declarations");
        }
        Command::Resolve { prefix } => {
            writeln!(stdout, "{}", registry.resolve(&prefix)?)?;
        }
        Command::Prefixes { uri } => {
            for prefix in registry.prefixes_for(&uri) {
                writeln!(stdout, "{prefix}")?;
            }
        }
        Command::Expand { curie } => {
            writeln!(stdout, "{}", registry.expand(&curie)?)?;
        }
        Command::Compact { iri } => {
            let compacted = registry.compact(&iri).unwrap_or_else(|| format!("<{iri}>"));
            writeln!(stdout, "{compacted}")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
