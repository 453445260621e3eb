use cradle_schema::{DecimalType, IntegerType, Model, PropertyKind, PropertyType, StringType};

/// Sentinel default meaning "the current timestamp" for date-time columns.
pub const DATE_TIME_NOW: &str = "DateTimeNow";

/// Column type of a mapped property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Variable-length text
    Text,
    /// Fixed-capacity string
    String(u32),
    Date,
    Integer,
    /// Decimal, with `(precision, scale)` bounds when declared
    Decimal(Option<(u32, u32)>),
    Boolean,
    Blob,
    Uuid,
}

impl ColumnType {
    /// Column type for a property, or `None` when the kind has no column.
    pub fn for_property(property: &PropertyType) -> Option<Self> {
        let column = match &property.kind {
            PropertyKind::String(StringType {
                maximum_length: Some(length),
                ..
            }) => ColumnType::String(*length),
            PropertyKind::String(_) => ColumnType::Text,
            PropertyKind::DateTime => ColumnType::Date,
            PropertyKind::Integer(_) => ColumnType::Integer,
            PropertyKind::Decimal(DecimalType {
                precision: Some(precision),
                scale: Some(_),
            }) => {
                // Both bounds take the declared precision.
                ColumnType::Decimal(Some((*precision, *precision)))
            }
            PropertyKind::Decimal(_) => ColumnType::Decimal(None),
            PropertyKind::Boolean => ColumnType::Boolean,
            PropertyKind::Binary => ColumnType::Blob,
            PropertyKind::UniqueIdentifier => ColumnType::Uuid,
            PropertyKind::Array(_)
            | PropertyKind::ReferenceModel(_)
            | PropertyKind::ImportModel(_)
            | PropertyKind::Unknown => return None,
        };
        Some(column)
    }
}

/// A normalized column default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDefault {
    /// The runtime's current-timestamp sentinel
    Now,
    /// The runtime's v4 UUID generator sentinel
    UuidV4,
    /// A string literal that must be quoted when rendered
    Quoted(String),
    /// Expression text passed through unchanged
    Raw(String),
}

impl ColumnDefault {
    /// Normalize a property's default value, if it has one.
    pub fn for_property(property: &PropertyType) -> Option<Self> {
        let value = property.default_value.as_ref()?;
        let text = value.to_string();
        let normalized = match &property.kind {
            PropertyKind::DateTime if text == DATE_TIME_NOW => ColumnDefault::Now,
            PropertyKind::UniqueIdentifier => ColumnDefault::UuidV4,
            PropertyKind::String(_) => ColumnDefault::Quoted(text),
            _ => ColumnDefault::Raw(text),
        };
        Some(normalized)
    }
}

/// Per-field column metadata handed to the runtime's static initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub column_type: ColumnType,
    pub allow_null: bool,
    pub primary_key: bool,
    pub default_value: Option<ColumnDefault>,
    pub auto_increment: bool,
}

impl ColumnDescriptor {
    /// Describe a property as a column, or `None` when it has no column type.
    pub fn for_property(name: impl Into<String>, property: &PropertyType) -> Option<Self> {
        let column_type = ColumnType::for_property(property)?;
        Some(Self {
            name: name.into(),
            column_type,
            allow_null: property.allow_null,
            primary_key: property.is_primary_key,
            default_value: ColumnDefault::for_property(property),
            auto_increment: matches!(
                property.kind,
                PropertyKind::Integer(IntegerType {
                    autogenerate: Some(true)
                })
            ),
        })
    }
}

/// Column descriptors for a model, in property order.
///
/// Properties without a column type are left out.
pub fn columns_for_model(model: &Model) -> Vec<ColumnDescriptor> {
    model
        .properties
        .iter()
        .filter_map(|(name, property)| {
            let column = ColumnDescriptor::for_property(name, property);
            if column.is_none() {
                tracing::warn!(
                    model = %model.name,
                    property = %name,
                    type_name = property.type_name(),
                    "property has no column type, leaving it out of the initializer"
                );
            }
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_columns() {
        assert_eq!(
            ColumnType::for_property(&PropertyType::string()),
            Some(ColumnType::Text)
        );
        assert_eq!(
            ColumnType::for_property(&PropertyType::string().max_length(128)),
            Some(ColumnType::String(128))
        );
    }

    #[test]
    fn test_decimal_bounds_use_precision() {
        assert_eq!(
            ColumnType::for_property(&PropertyType::decimal(Some(10), Some(2))),
            Some(ColumnType::Decimal(Some((10, 10))))
        );
        assert_eq!(
            ColumnType::for_property(&PropertyType::decimal(Some(10), None)),
            Some(ColumnType::Decimal(None))
        );
        assert_eq!(
            ColumnType::for_property(&PropertyType::decimal(None, Some(2))),
            Some(ColumnType::Decimal(None))
        );
    }

    #[test]
    fn test_simple_columns() {
        let cases = [
            (PropertyType::date_time(), ColumnType::Date),
            (PropertyType::integer(), ColumnType::Integer),
            (PropertyType::boolean(), ColumnType::Boolean),
            (PropertyType::binary(), ColumnType::Blob),
            (PropertyType::unique_identifier(), ColumnType::Uuid),
        ];
        for (property, expected) in cases {
            assert_eq!(ColumnType::for_property(&property), Some(expected));
        }
    }

    #[test]
    fn test_no_column_for_references_arrays_and_unknown() {
        assert_eq!(ColumnType::for_property(&PropertyType::reference("Address")), None);
        assert_eq!(ColumnType::for_property(&PropertyType::import("Office")), None);
        assert_eq!(ColumnType::for_property(&PropertyType::array_of("string")), None);
        assert_eq!(
            ColumnType::for_property(&PropertyType::new(PropertyKind::Unknown)),
            None
        );
    }

    #[test]
    fn test_default_normalization() {
        assert_eq!(
            ColumnDefault::for_property(&PropertyType::date_time().with_default("DateTimeNow")),
            Some(ColumnDefault::Now)
        );
        assert_eq!(
            ColumnDefault::for_property(&PropertyType::date_time().with_default("'2020-01-01'")),
            Some(ColumnDefault::Raw("'2020-01-01'".into()))
        );
        assert_eq!(
            ColumnDefault::for_property(&PropertyType::unique_identifier().with_default("abc")),
            Some(ColumnDefault::UuidV4)
        );
        assert_eq!(
            ColumnDefault::for_property(&PropertyType::string().with_default("guest")),
            Some(ColumnDefault::Quoted("guest".into()))
        );
        assert_eq!(
            ColumnDefault::for_property(&PropertyType::integer().with_default(5)),
            Some(ColumnDefault::Raw("5".into()))
        );
        assert_eq!(
            ColumnDefault::for_property(&PropertyType::boolean().with_default(false)),
            Some(ColumnDefault::Raw("false".into()))
        );
        assert_eq!(ColumnDefault::for_property(&PropertyType::string()), None);
    }

    #[test]
    fn test_auto_increment_only_for_autogenerated_integers() {
        let id = ColumnDescriptor::for_property("id", &PropertyType::integer().autogenerate()).unwrap();
        assert!(id.auto_increment);

        let plain = ColumnDescriptor::for_property("n", &PropertyType::integer()).unwrap();
        assert!(!plain.auto_increment);

        let explicit_off = PropertyType::new(PropertyKind::Integer(IntegerType {
            autogenerate: Some(false),
        }));
        let off = ColumnDescriptor::for_property("n", &explicit_off).unwrap();
        assert!(!off.auto_increment);

        let uuid = ColumnDescriptor::for_property("key", &PropertyType::unique_identifier()).unwrap();
        assert!(!uuid.auto_increment);
    }

    #[test]
    fn test_columns_for_model_skips_unmapped() {
        let model = Model::new("User")
            .property("id", PropertyType::integer().primary_key().autogenerate())
            .property("address", PropertyType::reference("Address"))
            .property("name", PropertyType::string().max_length(128));

        let columns = columns_for_model(&model);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert!(columns[0].primary_key);
        assert!(!columns[1].allow_null);
    }
}
