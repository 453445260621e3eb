//! Naming conventions for generated declarations.

/// Language-specific naming conventions.
///
/// Defines how model and operation names turn into generated identifiers
/// and file names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name to its interface name (e.g., "User" -> "IUser")
    pub model_to_interface: fn(&str) -> String,
    /// Transform an operation name to its argument type name
    /// (e.g., "move-to" -> "MoveToOperationArgs")
    pub operation_to_args: fn(&str) -> String,
    /// Transform a model name to a file stem
    pub model_to_file: fn(&str) -> String,
}

impl NamingConvention {
    /// Name of the interface generated for a model.
    pub fn interface_name(&self, model: &str) -> String {
        (self.model_to_interface)(model)
    }

    /// Name of the argument interface generated for an operation.
    pub fn operation_args_name(&self, operation: &str) -> String {
        (self.operation_to_args)(operation)
    }

    /// File stem of the document generated for a model.
    pub fn file_name(&self, model: &str) -> String {
        (self.model_to_file)(model)
    }
}
