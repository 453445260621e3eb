//! Sequelize model classes.
//!
//! Every model becomes an exported class extending Sequelize's `Model`, with
//! one read-only field per property and a static `Initialize(sequelize)`
//! method calling `Model.init` with the column descriptors. The merged
//! document ends with an `initialize` helper that initializes every model.

use cradle_codegen::{
    CodeBuilder, ConcatMerge, DeclarationBuilder, EmitContext, MergePolicy, ModelContents, Result,
    TypeForm, TypeMapper,
    orm::{ColumnDefault, ColumnDescriptor, ColumnType, columns_for_model},
};
use cradle_core::quote_literal;
use cradle_schema::{Model, OutputLayout, PropertyKind};

use crate::{
    ast::{ArrowFn, Class, ClassField, Const, FieldMark, Import, JsObject, Method, Param},
    project::Project,
};

/// Symbols imported from the `sequelize` package, in import order.
const SEQUELIZE_IMPORTS: [&str; 3] = ["Sequelize", "Model", "DataTypes"];

/// Render a column type as a `DataTypes` expression.
pub fn column_type_expr(column_type: ColumnType) -> String {
    match column_type {
        ColumnType::Text => "DataTypes.TEXT".to_string(),
        ColumnType::String(length) => format!("DataTypes.STRING({})", length),
        ColumnType::Date => "DataTypes.DATE".to_string(),
        ColumnType::Integer => "DataTypes.INTEGER".to_string(),
        ColumnType::Decimal(Some((precision, scale))) => {
            format!("DataTypes.DECIMAL({}, {})", precision, scale)
        }
        ColumnType::Decimal(None) => "DataTypes.DECIMAL".to_string(),
        ColumnType::Boolean => "DataTypes.BOOLEAN".to_string(),
        ColumnType::Blob => "DataTypes.BLOB".to_string(),
        ColumnType::Uuid => "DataTypes.UUID".to_string(),
    }
}

/// Render a normalized default, `undefined` when there is none.
pub fn default_expr(default: Option<&ColumnDefault>) -> String {
    match default {
        None => "undefined".to_string(),
        Some(ColumnDefault::Now) => "DataTypes.NOW".to_string(),
        Some(ColumnDefault::UuidV4) => "DataTypes.UUIDV4".to_string(),
        Some(ColumnDefault::Quoted(value)) => quote_literal(value),
        Some(ColumnDefault::Raw(expr)) => expr.clone(),
    }
}

fn column_object(column: &ColumnDescriptor) -> JsObject {
    JsObject::new()
        .raw("type", column_type_expr(column.column_type))
        .raw("allowNull", column.allow_null.to_string())
        .raw("primaryKey", column.primary_key.to_string())
        .raw("defaultValue", default_expr(column.default_value.as_ref()))
        .raw("autoIncrement", column.auto_increment.to_string())
}

/// The `<Model>.init(columns, options)` statement.
fn init_statement(model: &Model) -> String {
    let columns = columns_for_model(model)
        .iter()
        .fold(JsObject::new(), |obj, column| {
            obj.object(column.name.as_str(), column_object(column))
        });
    let options = JsObject::new()
        .shorthand("sequelize")
        .string("tableName", model.name.as_str());

    let mut builder = CodeBuilder::typescript();
    builder
        .push_line(&format!("{}.init(", model.name))
        .push_indent()
        .push_lines(&format!("{},", columns.build()))
        .push_lines(&format!("{},", options.build()))
        .push_dedent()
        .push_line(");");
    builder.build()
}

fn class_fields(model: &Model, mapper: &dyn TypeMapper) -> Vec<ClassField> {
    model
        .properties
        .iter()
        .map(|(name, property)| {
            let mark = match property.kind {
                PropertyKind::ReferenceModel(_) => FieldMark::Optional,
                _ => FieldMark::Definite,
            };
            ClassField::new(name, mapper.wrap_map_type(property, TypeForm::Class))
                .public()
                .readonly()
                .mark(mark)
        })
        .collect()
}

/// Builds Sequelize classes inside a single merged document.
///
/// Only the single-file layout is supported. Every class shell is declared
/// before any model is filled, so lookups of a model never declared fail.
#[derive(Debug, Clone, Default)]
pub struct SequelizeBuilder {
    project: Project,
    file_name: String,
}

impl SequelizeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents produced by the last pass.
    pub fn project(&self) -> &Project {
        &self.project
    }
}

impl DeclarationBuilder for SequelizeBuilder {
    fn name(&self) -> &'static str {
        "typescript-sequelize"
    }

    fn supports(&self, layout: OutputLayout) -> bool {
        layout == OutputLayout::SingleFile
    }

    fn prepare(&mut self, ctx: &EmitContext<'_>) -> Result<()> {
        self.project = Project::new();
        self.file_name = ctx.options.merged_file_name();

        let file = self.project.create_source_file(&self.file_name);
        file.add_import("sequelize", SEQUELIZE_IMPORTS);
        for model in &ctx.schema.models {
            file.add_class(Class::new(&model.name).extends("Model"));
        }
        Ok(())
    }

    fn build_model(&mut self, model: &Model, ctx: &EmitContext<'_>) -> Result<String> {
        let file = self.project.source_file_mut(&self.file_name)?;
        let class = file.class_mut(&model.name)?;

        class.add_fields(class_fields(model, ctx.mapper));
        class.add_method(
            Method::new("Initialize")
                .public()
                .static_()
                .param(Param::new("sequelize", "Sequelize"))
                .statement(init_statement(model)),
        );

        file.render_declaration(&model.name)
    }
}

/// Merge policy for Sequelize output: the runtime import, the classes, and
/// an `initialize` helper calling every model's `Initialize` in schema order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequelizeMerge;

impl MergePolicy for SequelizeMerge {
    fn merge(&self, contents: &[ModelContents]) -> String {
        let import = Import::new("sequelize").named_all(SEQUELIZE_IMPORTS).build();
        let classes = ConcatMerge::with_prefix(import).merge(contents);

        let initialize = ArrowFn::new()
            .param(Param::new("sequelize", "Sequelize"))
            .body_lines(
                contents
                    .iter()
                    .map(|c| format!("{}.Initialize(sequelize);", c.model)),
            );
        let helper = Const::new("initialize", initialize.build()).build();

        format!("{}\n{}", classes, helper)
    }
}
