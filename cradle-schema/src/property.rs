//! Property type model.
//!
//! A [`PropertyType`] describes one field of a model (or one operation
//! argument): the shape-specific data lives in [`PropertyKind`], while the
//! nullability, default value and primary-key role are shared by every kind.

use std::fmt;

use serde::Deserialize;

/// A tagged description of one field's shape, nullability, default and key role.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyType {
    /// Whether the field accepts null.
    #[serde(default)]
    pub allow_null: bool,
    /// Default value as written in the schema.
    #[serde(default)]
    pub default_value: Option<DefaultValue>,
    /// Whether the field is (part of) the primary key.
    #[serde(default)]
    pub is_primary_key: bool,
    /// Kind-specific data, discriminated by `TypeName`.
    #[serde(flatten)]
    pub kind: PropertyKind,
}

/// The kind of a property, discriminated by the `TypeName` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "TypeName")]
pub enum PropertyKind {
    String(StringType),
    Integer(IntegerType),
    Decimal(DecimalType),
    Boolean,
    Binary,
    DateTime,
    UniqueIdentifier,
    Array(ArrayType),
    ReferenceModel(ModelRef),
    ImportModel(ModelRef),
    /// Any tag this version does not know about.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringType {
    #[serde(default)]
    pub maximum_length: Option<u32>,
    #[serde(default)]
    pub allowed_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntegerType {
    #[serde(default)]
    pub autogenerate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecimalType {
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayType {
    pub member_type: MemberType,
}

/// Array member: either a nested property type or an already-resolved type name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MemberType {
    Name(String),
    Structured(Box<PropertyType>),
}

/// Weak, by-name reference to another model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelRef {
    pub model_name: String,
}

/// A default value literal as written in the schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for DefaultValue {
    /// Renders the raw literal text, without quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(b) => write!(f, "{}", b),
            DefaultValue::Int(i) => write!(f, "{}", i),
            DefaultValue::Float(x) => write!(f, "{}", x),
            DefaultValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_string())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl PropertyKind {
    /// The `TypeName` tag of this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyKind::String(_) => "String",
            PropertyKind::Integer(_) => "Integer",
            PropertyKind::Decimal(_) => "Decimal",
            PropertyKind::Boolean => "Boolean",
            PropertyKind::Binary => "Binary",
            PropertyKind::DateTime => "DateTime",
            PropertyKind::UniqueIdentifier => "UniqueIdentifier",
            PropertyKind::Array(_) => "Array",
            PropertyKind::ReferenceModel(_) => "ReferenceModel",
            PropertyKind::ImportModel(_) => "ImportModel",
            PropertyKind::Unknown => "Unknown",
        }
    }
}

impl PropertyType {
    /// Create a non-null, non-key property of the given kind.
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            allow_null: false,
            default_value: None,
            is_primary_key: false,
            kind,
        }
    }

    pub fn string() -> Self {
        Self::new(PropertyKind::String(StringType::default()))
    }

    pub fn integer() -> Self {
        Self::new(PropertyKind::Integer(IntegerType::default()))
    }

    pub fn decimal(precision: Option<u32>, scale: Option<u32>) -> Self {
        Self::new(PropertyKind::Decimal(DecimalType { precision, scale }))
    }

    pub fn boolean() -> Self {
        Self::new(PropertyKind::Boolean)
    }

    pub fn binary() -> Self {
        Self::new(PropertyKind::Binary)
    }

    pub fn date_time() -> Self {
        Self::new(PropertyKind::DateTime)
    }

    pub fn unique_identifier() -> Self {
        Self::new(PropertyKind::UniqueIdentifier)
    }

    pub fn array(member: PropertyType) -> Self {
        Self::new(PropertyKind::Array(ArrayType {
            member_type: MemberType::Structured(Box::new(member)),
        }))
    }

    pub fn array_of(type_name: impl Into<String>) -> Self {
        Self::new(PropertyKind::Array(ArrayType {
            member_type: MemberType::Name(type_name.into()),
        }))
    }

    pub fn reference(model: impl Into<String>) -> Self {
        Self::new(PropertyKind::ReferenceModel(ModelRef {
            model_name: model.into(),
        }))
    }

    pub fn import(model: impl Into<String>) -> Self {
        Self::new(PropertyKind::ImportModel(ModelRef {
            model_name: model.into(),
        }))
    }

    /// Allow null values.
    pub fn nullable(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// Mark as primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the maximum length of a string property. No-op for other kinds.
    pub fn max_length(mut self, length: u32) -> Self {
        if let PropertyKind::String(s) = &mut self.kind {
            s.maximum_length = Some(length);
        }
        self
    }

    /// Restrict a string property to a closed set of values. No-op for other kinds.
    pub fn allowed_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        if let PropertyKind::String(s) = &mut self.kind {
            s.allowed_values = Some(values.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Mark an integer property as database-generated. No-op for other kinds.
    pub fn autogenerate(mut self) -> Self {
        if let PropertyKind::Integer(i) = &mut self.kind {
            i.autogenerate = Some(true);
        }
        self
    }

    /// The `TypeName` tag of this property.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Name of the model this property points at, looking through arrays.
    pub fn referenced_model(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::ReferenceModel(r) | PropertyKind::ImportModel(r) => Some(&r.model_name),
            PropertyKind::Array(ArrayType {
                member_type: MemberType::Structured(member),
            }) => member.referenced_model(),
            _ => None,
        }
    }

    /// Bare type name of an array member, with any `[]` suffixes removed.
    ///
    /// `MemberType: "IActor[]"` yields `IActor`. Structured members are looked through.
    pub fn member_type_name(&self) -> Option<&str> {
        let PropertyKind::Array(array) = &self.kind else {
            return None;
        };
        match &array.member_type {
            MemberType::Name(name) => {
                let mut name = name.trim();
                while let Some(stripped) = name.strip_suffix("[]") {
                    name = stripped.trim_end();
                }
                Some(name)
            }
            MemberType::Structured(member) => member.member_type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PropertyType {
        serde_json::from_str(json).expect("property should parse")
    }

    #[test]
    fn test_parse_string_property() {
        let prop = parse(
            r#"{ "TypeName": "String", "MaximumLength": 128, "AllowNull": true,
                 "AllowedValues": ["a", "b"] }"#,
        );
        assert!(prop.allow_null);
        assert!(!prop.is_primary_key);
        assert_eq!(
            prop.kind,
            PropertyKind::String(StringType {
                maximum_length: Some(128),
                allowed_values: Some(vec!["a".into(), "b".into()]),
            })
        );
    }

    #[test]
    fn test_parse_integer_property() {
        let prop = parse(r#"{ "TypeName": "Integer", "IsPrimaryKey": true, "Autogenerate": true }"#);
        assert!(prop.is_primary_key);
        assert_eq!(
            prop.kind,
            PropertyKind::Integer(IntegerType {
                autogenerate: Some(true)
            })
        );
    }

    #[test]
    fn test_parse_unit_kinds() {
        assert_eq!(parse(r#"{ "TypeName": "Boolean" }"#).kind, PropertyKind::Boolean);
        assert_eq!(
            parse(r#"{ "TypeName": "DateTime", "DefaultValue": "DateTimeNow" }"#).default_value,
            Some(DefaultValue::String("DateTimeNow".into()))
        );
    }

    #[test]
    fn test_parse_unknown_type_name() {
        let prop = parse(r#"{ "TypeName": "Geometry", "AllowNull": true }"#);
        assert_eq!(prop.kind, PropertyKind::Unknown);
        assert!(prop.allow_null);
    }

    #[test]
    fn test_parse_array_members() {
        let named = parse(r#"{ "TypeName": "Array", "MemberType": "IProject" }"#);
        assert_eq!(
            named.kind,
            PropertyKind::Array(ArrayType {
                member_type: MemberType::Name("IProject".into())
            })
        );

        let nested = parse(
            r#"{ "TypeName": "Array",
                 "MemberType": { "TypeName": "ReferenceModel", "ModelName": "Project" } }"#,
        );
        assert_eq!(nested.referenced_model(), Some("Project"));
        assert_eq!(nested.member_type_name(), None);
        assert_eq!(named.member_type_name(), Some("IProject"));
        assert_eq!(PropertyType::array_of("IProject[] ").member_type_name(), Some("IProject"));
        assert_eq!(PropertyType::string().member_type_name(), None);
    }

    #[test]
    fn test_default_value_display() {
        assert_eq!(DefaultValue::Int(5).to_string(), "5");
        assert_eq!(DefaultValue::Bool(false).to_string(), "false");
        assert_eq!(DefaultValue::Float(1.5).to_string(), "1.5");
        assert_eq!(DefaultValue::from("now()").to_string(), "now()");
    }

    #[test]
    fn test_builders() {
        let prop = PropertyType::string().max_length(64).nullable();
        assert!(prop.allow_null);
        assert_eq!(prop.type_name(), "String");

        // Kind-specific setters leave other kinds alone
        let prop = PropertyType::boolean().max_length(10).autogenerate();
        assert_eq!(prop.kind, PropertyKind::Boolean);
    }
}
