//! Schema model: models, operations and the schema itself.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::PropertyType;

/// A named, ordered collection of properties representing one generated entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    /// Identifier used verbatim for generated classes and interfaces.
    pub name: String,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, PropertyType>,
    /// Operations in declaration order, when the model declares any.
    #[serde(default)]
    pub operations: Option<IndexMap<String, Operation>>,
}

/// An operation signature. Only its arguments feed code generation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Operation {
    #[serde(default)]
    pub arguments: IndexMap<String, PropertyType>,
}

/// Ordered sequence of models, the full generation input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schema {
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
            operations: None,
        }
    }

    /// Append a property.
    pub fn property(mut self, name: impl Into<String>, property: PropertyType) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Append an operation.
    pub fn operation(mut self, name: impl Into<String>, operation: Operation) -> Self {
        self.operations
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), operation);
        self
    }

    /// Iterate over operations in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.operations
            .iter()
            .flat_map(|ops| ops.iter().map(|(name, op)| (name.as_str(), op)))
    }

    /// Models referenced by properties and operation arguments, first use first.
    pub fn referenced_models(&self) -> Vec<&str> {
        self.collect_names(PropertyType::referenced_model)
    }

    /// Bare type names used as array members, first use first.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.collect_names(PropertyType::member_type_name)
    }

    fn collect_names<'a>(
        &'a self,
        name_of: fn(&'a PropertyType) -> Option<&'a str>,
    ) -> Vec<&'a str> {
        let mut names: Vec<&str> = Vec::new();
        let properties = self.properties.values();
        let arguments = self.operations().flat_map(|(_, op)| op.arguments.values());
        for name in properties.chain(arguments).filter_map(name_of) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument.
    pub fn argument(mut self, name: impl Into<String>, property: PropertyType) -> Self {
        self.arguments.insert(name.into(), property);
        self
    }
}

impl Schema {
    pub fn new(models: impl IntoIterator<Item = Model>) -> Self {
        Self {
            models: models.into_iter().collect(),
        }
    }

    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Check whether a model with the given name exists.
    pub fn has_model(&self, name: &str) -> bool {
        self.model(name).is_some()
    }

    /// Model names in schema order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }
}
