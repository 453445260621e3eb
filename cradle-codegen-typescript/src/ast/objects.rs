//! TypeScript/JavaScript object literal builder.

use cradle_codegen::{CodeBuilder, CodeFragment, Renderable};
use cradle_core::quote_literal;

/// A property in a JavaScript object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
}

impl Property {
    /// Create a property with a string value (will be quoted).
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        }
    }

    /// Create a property with a raw expression value (will not be quoted).
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    /// Create a property with a nested object value.
    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Object(value),
        }
    }

    fn to_fragment(&self) -> CodeFragment {
        match &self.value {
            PropertyValue::String(s) => {
                CodeFragment::Line(format!("{}: {},", self.key, quote_literal(s)))
            }
            PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", self.key, s)),
            PropertyValue::Object(obj) if obj.is_empty() => {
                CodeFragment::Line(format!("{}: {{}},", self.key))
            }
            PropertyValue::Object(obj) => CodeFragment::Block {
                header: format!("{}: {{", self.key),
                body: obj.properties_to_fragments(),
                close: Some("},".to_string()),
            },
        }
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::string(key, value));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::object(key, value));
        self
    }

    /// Add a shorthand-style property where the value is the same identifier.
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.raw(name.clone(), name)
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build the object as an expression string, without a trailing newline.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build().trim_end().to_string()
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties.iter().map(Property::to_fragment).collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::line("{}")];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
