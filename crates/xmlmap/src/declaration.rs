//! Per-class representer configuration

use indexmap::IndexMap;

use crate::error::Result;
use crate::inflect::singularize;
use crate::item::{FromXmlFragment, ItemClass};
use crate::ser::XmlOptions;
use crate::value::AttributeMap;
use crate::xml::{Config, XmlBuilder};

/// Options attached to one collection declaration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionOptions {
    item_class: Option<ItemClass>,
    tag: Option<String>,
}

impl CollectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every member through `T` instead of keeping raw values
    #[must_use]
    pub fn item_class<T: FromXmlFragment>(mut self) -> Self {
        self.item_class = Some(ItemClass::of::<T>());
        self
    }

    /// Element name for one member, when singularizing the attribute name
    /// gives the wrong word
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn class(&self) -> Option<&ItemClass> {
        self.item_class.as_ref()
    }

    pub fn member_tag(&self, attribute: &str) -> String {
        self.tag
            .clone()
            .unwrap_or_else(|| singularize(attribute))
    }
}

/// What a represented class declares about itself: the default root tag and
/// which attributes are collections.
///
/// A representation is built once and then only read. Deriving a subclass
/// goes through [`Representation::inherit`], which copies the table so that
/// later declarations on the copy never reach the parent.
#[derive(Clone, Debug, PartialEq)]
pub struct Representation {
    model_name: String,
    collections: IndexMap<String, CollectionOptions>,
    parse_config: Config,
}

impl Representation {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            collections: IndexMap::new(),
            parse_config: Config::default(),
        }
    }

    /// Copy of this representation for a subclass
    #[must_use]
    pub fn inherit(&self) -> Self {
        self.clone()
    }

    /// Copy of this representation for a subclass with its own root tag
    #[must_use]
    pub fn inherit_as(&self, model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..self.clone()
        }
    }

    /// Declare `name` as a collection
    #[must_use]
    pub fn collection(mut self, name: impl Into<String>, options: CollectionOptions) -> Self {
        self.declare_collection(name, options);
        self
    }

    /// Declare `name` as a collection, replacing an earlier declaration
    pub fn declare_collection(&mut self, name: impl Into<String>, options: CollectionOptions) {
        self.collections.insert(name.into(), options);
    }

    #[must_use]
    pub fn with_parse_config(mut self, config: Config) -> Self {
        self.parse_config = config;
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn collections(&self) -> &IndexMap<String, CollectionOptions> {
        &self.collections
    }

    pub fn collection_options(&self, name: &str) -> Option<&CollectionOptions> {
        self.collections.get(name)
    }

    pub fn is_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    pub fn parse_config(&self) -> Config {
        self.parse_config
    }

    /// Render `attributes` under this representation's root tag
    pub fn serialize(
        &self,
        attributes: &AttributeMap,
        builder: &mut XmlBuilder,
        options: &XmlOptions,
    ) {
        crate::ser::serialize_model(self, attributes, builder, options);
    }

    /// Render `attributes` into a fresh string
    pub fn to_xml(&self, attributes: &AttributeMap, options: &XmlOptions) -> String {
        let mut builder = XmlBuilder::with_indent(options.indent);
        self.serialize(attributes, &mut builder, options);
        builder.into_target()
    }

    /// Read an attribute map, normalizing the declared collections
    pub fn deserialize(&self, xml: &str) -> Result<AttributeMap> {
        crate::de::deserialize(xml, self)
    }
}
