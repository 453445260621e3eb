//! TypeScript-specific naming conventions.

use cradle_codegen::NamingConvention;
use cradle_core::{to_camel_case, upper_first};

fn interface_name(model: &str) -> String {
    format!("I{}", model)
}

fn operation_args_name(operation: &str) -> String {
    format!("{}OperationArgs", upper_first(&to_camel_case(operation)))
}

fn file_name(model: &str) -> String {
    model.to_string()
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Interfaces carry an `I` prefix
    model_to_interface: interface_name,
    // Operation arguments use PascalCase plus a fixed suffix
    operation_to_args: operation_args_name,
    // One file per model, named after the model verbatim
    model_to_file: file_name,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_name() {
        assert_eq!(TS_NAMING.interface_name("User"), "IUser");
        assert_eq!(TS_NAMING.interface_name("Address"), "IAddress");
    }

    #[test]
    fn test_operation_args_name() {
        assert_eq!(TS_NAMING.operation_args_name("moveTo"), "MoveToOperationArgs");
        assert_eq!(TS_NAMING.operation_args_name("move-to"), "MoveToOperationArgs");
        assert_eq!(TS_NAMING.operation_args_name("add_actor"), "AddActorOperationArgs");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(TS_NAMING.file_name("Film"), "Film");
    }
}
