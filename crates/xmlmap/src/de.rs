//! XML text to attribute maps

use indexmap::IndexMap;
use tracing::{debug, instrument, trace};

use crate::declaration::{CollectionOptions, Representation};
use crate::error::{Error, Result};
use crate::inflect::pluralize;
use crate::value::{Array, AttributeMap, Value};
use crate::xml::builder::fragment;
use crate::xml::{parse_document, parse_document_with_config, Document, Element};

/// Key for text found next to attributes or child elements
pub const CONTENT_KEY: &str = "__content__";

/// Parse `xml` and read its root element as an attribute map for
/// `representation`, normalizing every declared collection to a list.
#[instrument(level = "debug", skip_all, fields(model = representation.model_name()))]
pub fn deserialize(xml: &str, representation: &Representation) -> Result<AttributeMap> {
    let document = parse_document_with_config(xml, representation.parse_config())?;
    deserialize_document(&document, representation)
}

/// Same as [`deserialize`] on an already parsed document
pub fn deserialize_document(
    document: &Document,
    representation: &Representation,
) -> Result<AttributeMap> {
    let root = &document.root;
    let mut attributes = match element_to_value(root)? {
        Value::Object(map) => map,
        Value::Null => AttributeMap::new(),
        _ => {
            return Err(Error::malformed(
                Default::default(),
                format!("root element <{}> holds text, not attributes", root.name),
            ));
        }
    };

    for (name, options) in representation.collections() {
        normalize_collection(root, &mut attributes, name, options)?;
    }

    Ok(attributes)
}

/// Typecast a standalone fragment such as `<item>beer</item>`
pub fn fragment_value(xml: &str) -> Result<Value> {
    let document = parse_document(xml)?;
    element_to_value(&document.root)
}

/// Typecast one element, honoring `type` and `nil` hints
pub fn element_to_value(element: &Element) -> Result<Value> {
    if element.attribute("nil") == Some("true") {
        return Ok(Value::Null);
    }

    let text = element.text();
    match element.attribute("type") {
        Some("array") => {
            let items = element
                .child_elements()
                .map(element_to_value)
                .collect::<Result<Array>>()?;
            return Ok(Value::Array(items));
        }
        Some("integer") => {
            return text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| invalid_leaf(element, "integer"));
        }
        Some("float" | "double" | "decimal") => {
            return text
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| invalid_leaf(element, "float"));
        }
        Some("boolean") => {
            return match text.trim() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(invalid_leaf(element, "boolean")),
            };
        }
        Some("string") => return Ok(Value::String(text)),
        _ => {}
    }

    if element.has_child_elements() || !element.attributes.is_empty() {
        let mut map = AttributeMap::new();
        for (key, value) in &element.attributes {
            map.insert(key.clone(), value.clone());
        }
        group_children(element, &mut map)?;
        if !text.trim().is_empty() {
            map.insert(CONTENT_KEY, text);
        }
        return Ok(Value::Object(map));
    }

    if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::String(text))
    }
}

/// Insert child elements into `map`; runs of the same name become a list
/// under the pluralized name, at the position of the first occurrence.
fn group_children(element: &Element, map: &mut AttributeMap) -> Result<()> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for child in element.child_elements() {
        *counts.entry(child.name.as_str()).or_default() += 1;
    }

    for child in element.child_elements() {
        let value = element_to_value(child)?;
        let repeated = counts.get(child.name.as_str()).is_some_and(|n| *n > 1);
        if !repeated {
            map.insert(child.name.clone(), value);
            continue;
        }

        let key = pluralize(&child.name);
        trace!(element = %child.name, key = %key, "grouping repeated element");
        match map.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Value::Array(Array::from(vec![first, value]));
            }
            None => {
                map.insert(key, Value::Array(Array::from(vec![value])));
            }
        }
    }
    Ok(())
}

/// One member of a declared collection before conversion
enum Member<'a> {
    Element(&'a Element),
    Scalar(Value),
}

/// Replace whatever generic parsing produced for a declared collection with
/// a list, whether the document held zero, one or many members.
fn normalize_collection(
    root: &Element,
    attributes: &mut AttributeMap,
    name: &str,
    options: &CollectionOptions,
) -> Result<()> {
    let tag = options.member_tag(name);
    let members = collect_members(root, name, &tag)?;
    debug!(collection = %name, tag = %tag, members = members.len(), "normalizing collection");

    let values = match options.class() {
        Some(class) => members
            .into_iter()
            .map(|member| match member {
                Member::Element(element) => class.construct(&fragment(element)).map(Value::Item),
                Member::Scalar(_) => Err(Error::unknown_item_type(name, class.type_name())),
            })
            .collect::<Result<Array>>()?,
        None => members
            .into_iter()
            .map(|member| match member {
                Member::Element(element) => element_to_value(element),
                Member::Scalar(value) => Ok(value),
            })
            .collect::<Result<Array>>()?,
    };

    let raw_keys = [tag.clone(), pluralize(&tag), name.to_string()];
    let position = raw_keys
        .iter()
        .filter_map(|key| attributes.position(key))
        .min();
    for key in &raw_keys {
        attributes.remove(key);
    }
    match position {
        Some(index) => attributes.insert_at(index, name.to_string(), Value::Array(values)),
        None => {
            attributes.insert(name, Value::Array(values));
        }
    }
    Ok(())
}

fn collect_members<'a>(root: &'a Element, name: &str, tag: &str) -> Result<Vec<Member<'a>>> {
    let direct: Vec<_> = root
        .child_elements()
        .filter(|child| child.name == tag)
        .map(Member::Element)
        .collect();
    if !direct.is_empty() || tag == name {
        return Ok(direct);
    }

    let Some(wrapper) = root.child_elements().find(|child| child.name == name) else {
        return Ok(Vec::new());
    };
    if wrapper.has_child_elements() {
        return Ok(wrapper
            .child_elements()
            .filter(|child| child.name == tag)
            .map(Member::Element)
            .collect());
    }

    Ok(match element_to_value(wrapper)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(Member::Scalar).collect(),
        value => vec![Member::Scalar(value)],
    })
}

fn invalid_leaf(element: &Element, type_name: &str) -> Error {
    Error::malformed(
        Default::default(),
        format!(
            "<{}> is typed {type_name} but holds {:?}",
            element.name,
            element.text()
        ),
    )
}
