//! The represented-object side: attribute extraction and the public
//! to/from XML operations.

use crate::declaration::Representation;
use crate::error::Result;
use crate::ser::{serialize_model, XmlOptions};
use crate::value::AttributeMap;
use crate::xml::XmlBuilder;

/// A domain object whose attributes map to XML.
///
/// Implementors supply attribute storage, plain construction and the
/// class-level [`Representation`]; everything else is provided.
///
/// ```
/// use std::sync::OnceLock;
/// use xmlmap::{AttributeMap, CollectionOptions, Model, Representation, Value};
///
/// struct Order {
///     attributes: AttributeMap,
/// }
///
/// impl Model for Order {
///     fn representation() -> &'static Representation {
///         static REPRESENTATION: OnceLock<Representation> = OnceLock::new();
///         REPRESENTATION.get_or_init(|| {
///             Representation::new("order").collection("items", CollectionOptions::new())
///         })
///     }
///
///     fn attributes(&self) -> &AttributeMap {
///         &self.attributes
///     }
///
///     fn from_attributes(attributes: AttributeMap) -> Self {
///         Self { attributes }
///     }
/// }
///
/// # fn main() -> xmlmap::Result<()> {
/// let order = Order::from_xml("<order><id>7</id><item>Beer</item></order>")?;
/// assert_eq!(
///     order.attributes().get("items"),
///     Some(&Value::from(vec![Value::from("Beer")]))
/// );
/// assert_eq!(
///     order.to_xml(),
///     "<order>\n  <id>7</id>\n  <item>Beer</item>\n</order>\n"
/// );
/// # Ok(())
/// # }
/// ```
pub trait Model: Sized {
    /// Class-level declarations shared by all instances
    fn representation() -> &'static Representation;

    /// Raw attribute storage
    fn attributes(&self) -> &AttributeMap;

    /// Plain construction, no parsing
    fn from_attributes(attributes: AttributeMap) -> Self;

    /// Default root tag
    fn model_name() -> &'static str {
        Self::representation().model_name()
    }

    /// The map handed to the serializer. Override to add, rename or drop
    /// attributes before rendering.
    fn attributes_for_xml(&self) -> AttributeMap {
        self.attributes().clone()
    }

    /// Render with the prolog suppressed
    fn to_xml(&self) -> String {
        self.to_xml_with_options(&XmlOptions::default().skip_instruct(true))
    }

    fn to_xml_with_options(&self, options: &XmlOptions) -> String {
        let mut builder = XmlBuilder::with_indent(options.indent);
        self.write_xml(&mut builder, options);
        builder.into_target()
    }

    /// Render into a caller-owned builder
    fn write_xml(&self, builder: &mut XmlBuilder, options: &XmlOptions) {
        serialize_model(
            Self::representation(),
            &self.attributes_for_xml(),
            builder,
            options,
        );
    }

    /// Parse into an attribute map with declared collections normalized
    fn attributes_from_xml(xml: &str) -> Result<AttributeMap> {
        Self::representation().deserialize(xml)
    }

    fn from_xml(xml: &str) -> Result<Self> {
        Self::attributes_from_xml(xml).map(Self::from_xml_attributes)
    }

    /// Construction from a map produced by [`Model::attributes_from_xml`]
    fn from_xml_attributes(attributes: AttributeMap) -> Self {
        Self::from_attributes(attributes)
    }
}
