//! TypeScript type mapper implementation.

use cradle_codegen::{NamingConvention, TypeForm, TypeMapper};
use cradle_core::quote_literal;
use cradle_schema::{ArrayType, MemberType, PropertyKind, PropertyType, StringType};

use crate::naming::TS_NAMING;

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptTypeMapper {
    naming: NamingConvention,
}

impl TypeScriptTypeMapper {
    pub fn new() -> Self {
        Self { naming: TS_NAMING }
    }

    /// Generated type name of a referenced model.
    pub fn model_type_name(&self, model: &str, form: TypeForm) -> String {
        match form {
            TypeForm::Interface => self.naming.interface_name(model),
            TypeForm::Class => model.to_string(),
        }
    }
}

impl Default for TypeScriptTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_type(&self, property: &PropertyType, form: TypeForm) -> String {
        match &property.kind {
            PropertyKind::Boolean => "boolean".to_string(),
            PropertyKind::Binary => "ArrayBuffer".to_string(),
            PropertyKind::DateTime => "Date".to_string(),
            PropertyKind::Decimal(_) | PropertyKind::Integer(_) => "number".to_string(),
            PropertyKind::String(StringType {
                allowed_values: Some(values),
                ..
            }) if !values.is_empty() => values
                .iter()
                .map(|v| quote_literal(v))
                .collect::<Vec<_>>()
                .join(" | "),
            PropertyKind::String(_) | PropertyKind::UniqueIdentifier => "string".to_string(),
            PropertyKind::Array(ArrayType { member_type }) => match member_type {
                MemberType::Name(name) => format!("{}[]", name),
                MemberType::Structured(member) => format!("{}[]", self.map_type(member, form)),
            },
            PropertyKind::ReferenceModel(r) | PropertyKind::ImportModel(r) => {
                self.model_type_name(&r.model_name, form)
            }
            PropertyKind::Unknown => "any".to_string(),
        }
    }

    fn null_marker(&self) -> &'static str {
        "null"
    }
}
