//! XML primitives: document model, parser and markup builder

pub mod builder;
pub mod cursor;
pub mod model;
pub mod parser;

pub use builder::XmlBuilder;
pub use model::{Content, Document, Element};
pub use parser::{Config, Parser};

use crate::error::Result;

/// Parse an XML document with default limits
pub fn parse_document(input: &str) -> Result<Document> {
    Parser::new(input.as_bytes()).parse()
}

/// Parse an XML document with custom limits
pub fn parse_document_with_config(input: &str, config: Config) -> Result<Document> {
    Parser::with_config(input.as_bytes(), config).parse()
}
