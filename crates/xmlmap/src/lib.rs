//! xmlmap - declarative object <-> XML representers
//!
//! A class declares its root tag and which attributes are collections once;
//! instances then render to XML and parse back with every declared
//! collection normalized to a list, whether the document held zero, one or
//! many members.
//!
//! # Quick Start
//!
//! ```
//! use xmlmap::{to_xml_string, AttributeMap, UnwrappedCollection, Value, XmlOptions};
//!
//! let positions = UnwrappedCollection::new([
//!     AttributeMap::new().with("article", "Peanut Butter"),
//!     AttributeMap::new().with("article", "Hoepfner Pils"),
//! ]);
//! let order = AttributeMap::new().with("position", positions);
//! let options = XmlOptions::default().skip_instruct(true).indent(0).root("order");
//! assert_eq!(
//!     to_xml_string(&Value::from(order), &options),
//!     "<order><position><article>Peanut Butter</article></position>\
//!      <position><article>Hoepfner Pils</article></position></order>"
//! );
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod value;
pub use value::{Array, AttributeMap, UnwrappedCollection, Value};

pub mod inflect;
pub use inflect::{pluralize, singularize};

pub mod xml;
pub use xml::{
    Config, Content as XmlContent, Document as XmlDocument, Element as XmlElement, XmlBuilder,
};

pub mod item;
pub use item::{FromXmlFragment, ItemClass, ItemRef, XmlItem};

pub mod declaration;
pub use declaration::{CollectionOptions, Representation};

pub mod ser;
pub use ser::{serialize_into, to_xml_string, XmlOptions};

pub mod de;
pub use de::{fragment_value, CONTENT_KEY};

pub mod model;
pub use model::Model;

/// Parse an XML document with default limits
pub fn from_xml_str(s: &str) -> Result<XmlDocument> {
    xml::parse_document(s)
}

/// Parse a document and read its root as a plain attribute map, with no
/// collection declarations applied
pub fn attributes_from_xml(s: &str) -> Result<AttributeMap> {
    Representation::new("").deserialize(s)
}
