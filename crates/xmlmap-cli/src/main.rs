use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xmlmap::{de, xml, AttributeMap, CollectionOptions, Representation, XmlOptions};

#[derive(Debug, Parser)]
#[command(
    name = "xmlmap",
    version,
    about = "Read XML into attribute maps and render them back"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the attribute map of a document as JSON
    Parse(Common),
    /// Re-render a document through the serializer
    Normalize {
        #[command(flatten)]
        common: Common,
        /// Leave out type hints on leaves
        #[arg(long)]
        skip_types: bool,
        /// Write the <?xml ...?> prolog
        #[arg(long)]
        instruct: bool,
        /// Spaces per nesting level; 0 writes compact markup
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
}

#[derive(Debug, Args)]
struct Common {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Attribute to treat as a collection; repeat for several
    #[arg(short, long = "collection", value_name = "NAME")]
    collections: Vec<String>,
    /// Root tag (defaults to the document's root element)
    #[arg(long)]
    root: Option<String>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Parse(common) => {
            let (attributes, _) = read_attributes(&common)?;
            let mut json = serde_json::to_string_pretty(&attributes)
                .context("failed to encode attributes as json")?;
            json.push('\n');
            write_output(&common.output, json.as_bytes())
        }
        Command::Normalize {
            common,
            skip_types,
            instruct,
            indent,
        } => {
            let (attributes, representation) = read_attributes(&common)?;
            let options = XmlOptions::default()
                .skip_instruct(!instruct)
                .skip_types(skip_types)
                .indent(indent);
            let rendered = representation.to_xml(&attributes, &options);
            write_output(&common.output, rendered.as_bytes())
        }
    }
}

fn read_attributes(common: &Common) -> Result<(AttributeMap, Representation)> {
    let input = read_input(&common.input)?;
    let document = xml::parse_document(&input).context("failed to parse input")?;

    let root = common
        .root
        .clone()
        .unwrap_or_else(|| document.root.name.clone());
    let mut representation = Representation::new(root);
    for name in &common.collections {
        representation.declare_collection(name.as_str(), CollectionOptions::new());
    }
    debug!(
        root = representation.model_name(),
        collections = common.collections.len(),
        "declared representation"
    );

    let attributes = de::deserialize_document(&document, &representation)
        .context("failed to read attributes")?;
    info!(attributes = attributes.len(), "read document");
    Ok((attributes, representation))
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
