use cradle_schema::OutputLayout;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmitError>;

/// Faults that abort an emission pass.
///
/// No partial output is returned when any of these is raised.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("the {emitter} emitter does not support the '{layout}' output layout")]
    #[diagnostic(
        code(cradle::unsupported_layout),
        help("set `output_type = \"singleFile\"` for this emitter")
    )]
    UnsupportedLayout {
        emitter: &'static str,
        layout: OutputLayout,
    },

    #[error("declaration '{name}' was never created in '{document}'")]
    #[diagnostic(code(cradle::missing_declaration))]
    MissingDeclaration { name: String, document: String },

    #[error("document '{name}' was never created")]
    #[diagnostic(code(cradle::missing_document))]
    MissingDocument { name: String },

    #[error("model '{model}' references '{target}', which is not declared by any model")]
    #[diagnostic(
        code(cradle::unresolved_reference),
        help("add a model named '{target}' to the schema or fix the ModelName")
    )]
    UnresolvedReference { model: String, target: String },
}
