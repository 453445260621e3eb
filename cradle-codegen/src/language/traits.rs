//! Language-agnostic code generation traits.

use cradle_schema::PropertyType;

/// Which generated name a model reference resolves to.
///
/// Interfaces point at their peers' interfaces, while ORM classes point at
/// the concrete classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeForm {
    /// Interface name (e.g., `IAddress`)
    Interface,
    /// Concrete class name (e.g., `Address`)
    Class,
}

/// Trait for mapping property types to language-specific type expressions.
///
/// Implement this trait for each target language to provide type mappings.
/// Unknown property kinds must map to an opaque type rather than fail.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a property type to a type expression, ignoring nullability.
    fn map_type(&self, property: &PropertyType, form: TypeForm) -> String;

    /// Marker unioned onto nullable types (e.g., `null` in TypeScript)
    fn null_marker(&self) -> &'static str;

    /// Map a property type, adding the null marker when the property allows null.
    fn wrap_map_type(&self, property: &PropertyType, form: TypeForm) -> String {
        let actual = self.map_type(property, form);
        if property.allow_null {
            format!("{} | {}", actual, self.null_marker())
        } else {
            actual
        }
    }
}
