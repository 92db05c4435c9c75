//! Markup accumulator shared across serializer calls.
//!
//! A builder created with [`XmlBuilder::new`] writes compact markup with no
//! line breaks. One created with [`XmlBuilder::with_indent`] puts every tag on
//! its own line, indented by nesting level. Several representers can write
//! into the same builder; output appears in call order.

use crate::xml::model::{Content, Element};

pub const XML_INSTRUCTION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlBuilder {
    target: String,
    indent: usize,
    level: usize,
}

impl XmlBuilder {
    /// Compact builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder indenting each nesting level by `indent` spaces
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// The `<?xml ...?>` prolog
    pub fn instruct(&mut self) {
        self.write_indent();
        self.target.push_str(XML_INSTRUCTION);
        self.write_newline();
    }

    /// Start tag; everything written until [`XmlBuilder::close`] nests inside
    pub fn open(&mut self, name: &str, attributes: &[(&str, &str)]) {
        self.write_indent();
        self.write_start(name, attributes);
        self.target.push('>');
        self.write_newline();
        self.level += 1;
    }

    pub fn close(&mut self, name: &str) {
        self.level = self.level.saturating_sub(1);
        self.write_indent();
        self.target.push_str("</");
        self.target.push_str(name);
        self.target.push('>');
        self.write_newline();
    }

    /// Element holding only text, on one line
    pub fn leaf(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) {
        self.write_indent();
        self.write_start(name, attributes);
        self.target.push('>');
        self.target.push_str(&escape_text(text));
        self.target.push_str("</");
        self.target.push_str(name);
        self.target.push('>');
        self.write_newline();
    }

    /// Self-closing element
    pub fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) {
        self.write_indent();
        self.write_start(name, attributes);
        self.target.push_str("/>");
        self.write_newline();
    }

    /// Escaped character data at the current position
    pub fn text(&mut self, text: &str) {
        self.target.push_str(&escape_text(text));
    }

    /// Write a parsed element back out as markup
    pub fn element(&mut self, element: &Element) {
        let attributes: Vec<(&str, &str)> = element
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        match element.children.as_slice() {
            [] => self.empty(&element.name, &attributes),
            [Content::Text(text)] => self.leaf(&element.name, &attributes, text),
            children => {
                self.open(&element.name, &attributes);
                for child in children {
                    match child {
                        Content::Element(child) => self.element(child),
                        // Layout between tags
                        Content::Text(text) if text.trim().is_empty() => {}
                        Content::Text(text) => self.text(text),
                    }
                }
                self.close(&element.name);
            }
        }
    }

    /// Markup written so far
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn into_target(self) -> String {
        self.target
    }

    fn write_start(&mut self, name: &str, attributes: &[(&str, &str)]) {
        self.target.push('<');
        self.target.push_str(name);
        for (key, value) in attributes {
            self.target.push(' ');
            self.target.push_str(key);
            self.target.push_str("=\"");
            self.target.push_str(&escape_attribute(value));
            self.target.push('"');
        }
    }

    fn write_indent(&mut self) {
        if self.indent > 0 && self.level > 0 {
            self.target.push_str(&" ".repeat(self.indent * self.level));
        }
    }

    fn write_newline(&mut self) {
        if self.indent > 0 {
            self.target.push('\n');
        }
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}

/// Render an element as a compact standalone fragment
pub fn fragment(element: &Element) -> String {
    let mut builder = XmlBuilder::new();
    builder.element(element);
    builder.into_target()
}
