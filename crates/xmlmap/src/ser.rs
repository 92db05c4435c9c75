//! Attribute maps to XML markup

use tracing::{debug, trace};

use crate::declaration::Representation;
use crate::inflect::singularize;
use crate::value::{AttributeMap, Value};
use crate::xml::XmlBuilder;

/// Rendering options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlOptions {
    /// Enclosing element name; defaults depend on what is rendered
    pub root: Option<String>,
    /// Leave out the `<?xml ...?>` prolog
    pub skip_instruct: bool,
    /// Leave out `type="..."` hints on leaves
    pub skip_types: bool,
    /// Spaces per nesting level when a fresh builder is created
    pub indent: usize,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            root: None,
            skip_instruct: false,
            skip_types: false,
            indent: 2,
        }
    }
}

impl XmlOptions {
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn skip_instruct(mut self, skip: bool) -> Self {
        self.skip_instruct = skip;
        self
    }

    #[must_use]
    pub fn skip_types(mut self, skip: bool) -> Self {
        self.skip_types = skip;
        self
    }

    #[must_use]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Options for a value rendered inside another element
    fn nested(&self, root: &str) -> Self {
        Self {
            root: Some(root.to_string()),
            skip_instruct: true,
            ..self.clone()
        }
    }
}

/// Render any value as a top-level fragment.
///
/// An unwrapped collection renders each member as its own top-level
/// fragment, each with its own prolog unless `skip_instruct` is set.
pub fn serialize_into(value: &Value, builder: &mut XmlBuilder, options: &XmlOptions) {
    match value {
        Value::Unwrapped(items) => {
            for item in items {
                serialize_into(item, builder, options);
            }
        }
        Value::Item(item) => item.to_xml(builder, options),
        _ => {
            if !options.skip_instruct {
                builder.instruct();
            }
            let root = options
                .root
                .as_deref()
                .unwrap_or_else(|| default_root(value));
            write_value(builder, root, value, options);
        }
    }
}

/// Render a value into a fresh builder indented per `options.indent`
pub fn to_xml_string(value: &Value, options: &XmlOptions) -> String {
    let mut builder = XmlBuilder::with_indent(options.indent);
    serialize_into(value, &mut builder, options);
    builder.into_target()
}

/// Render an object's attributes under its class's root tag, writing each
/// declared collection as sibling member elements with no wrapper.
pub fn serialize_model(
    representation: &Representation,
    attributes: &AttributeMap,
    builder: &mut XmlBuilder,
    options: &XmlOptions,
) {
    if !options.skip_instruct {
        builder.instruct();
    }
    let root = options
        .root
        .as_deref()
        .unwrap_or_else(|| representation.model_name());

    builder.open(root, &[]);
    for (key, value) in attributes {
        let declared = representation.collection_options(key);
        let members = match value {
            Value::Array(items) => Some(items.as_slice()),
            Value::Unwrapped(items) => Some(items.as_slice()),
            _ => None,
        };

        match (declared, members) {
            (Some(collection), Some(members)) => {
                let tag = collection.member_tag(key);
                debug!(collection = %key, tag = %tag, members = members.len(), "rendering unwrapped collection");
                for member in members {
                    write_value(builder, &tag, member, options);
                }
            }
            _ => write_value(builder, key, value, options),
        }
    }
    builder.close(root);
}

fn default_root(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "hash",
        Value::Array(_) => "objects",
        _ => "value",
    }
}

fn write_value(builder: &mut XmlBuilder, name: &str, value: &Value, options: &XmlOptions) {
    match value {
        Value::Null => builder.empty(name, &[("nil", "true")]),
        Value::Object(map) => {
            builder.open(name, &[]);
            for (key, value) in map {
                write_value(builder, key, value, options);
            }
            builder.close(name);
        }
        Value::Array(items) => {
            let attributes = type_attributes(value, options);
            if items.is_empty() {
                builder.empty(name, &attributes);
                return;
            }
            let tag = singularize(name);
            builder.open(name, &attributes);
            for item in items {
                write_value(builder, &tag, item, options);
            }
            builder.close(name);
        }
        Value::Unwrapped(items) => {
            for item in items {
                write_value(builder, name, item, options);
            }
        }
        Value::Item(item) => {
            trace!(tag = name, item = item.type_name(), "delegating to item");
            item.to_xml(builder, &options.nested(name));
        }
        Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) => {
            let attributes = type_attributes(value, options);
            let text = value.leaf_text().unwrap_or_default();
            builder.leaf(name, &attributes, &text);
        }
    }
}

fn type_attributes(value: &Value, options: &XmlOptions) -> Vec<(&'static str, &'static str)> {
    match value.type_hint() {
        Some(hint) if !options.skip_types => vec![("type", hint)],
        _ => Vec::new(),
    }
}
