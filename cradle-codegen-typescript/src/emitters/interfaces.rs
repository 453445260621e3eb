//! TypeScript interfaces for every model and operation.

use cradle_codegen::{
    DeclarationBuilder, EmitContext, NamingConvention, Result, TypeForm, TypeMapper,
};
use cradle_schema::{Model, PropertyType};
use indexmap::IndexMap;

use crate::{
    ast::{Interface, InterfaceField},
    naming::TS_NAMING,
    project::{Project, SourceFile},
};

/// Emits one exported `I<Model>` interface per model, followed by one
/// `<Operation>OperationArgs` interface per operation.
///
/// In one-file-per-model mode every model's file and empty interface are
/// declared before any model is filled, so peers can be imported by name.
/// In single-file mode each model gets a fresh document, filled in one go.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    project: Project,
    naming: NamingConvention,
}

impl InterfaceBuilder {
    pub fn new() -> Self {
        Self {
            project: Project::new(),
            naming: TS_NAMING,
        }
    }

    /// Documents produced by the last pass.
    pub fn project(&self) -> &Project {
        &self.project
    }
}

impl Default for InterfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn interface_fields(
    properties: &IndexMap<String, PropertyType>,
    mapper: &dyn TypeMapper,
) -> Vec<InterfaceField> {
    properties
        .iter()
        .map(|(name, property)| {
            InterfaceField::new(name, mapper.wrap_map_type(property, TypeForm::Interface))
                .optional_if(property.allow_null)
        })
        .collect()
}

fn add_operation_arg_types(
    file: &mut SourceFile,
    model: &Model,
    naming: &NamingConvention,
    mapper: &dyn TypeMapper,
) {
    for (op_name, operation) in model.operations() {
        let mut interface = Interface::new(naming.operation_args_name(op_name));
        interface.add_fields(interface_fields(&operation.arguments, mapper));
        file.add_interface(interface);
    }
}

impl DeclarationBuilder for InterfaceBuilder {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn prepare(&mut self, ctx: &EmitContext<'_>) -> Result<()> {
        self.project = Project::new();
        if !ctx.options.is_one_file_per_model() {
            return Ok(());
        }

        for model in &ctx.schema.models {
            let file_name = ctx.options.file_name_for_model(&self.naming.file_name(&model.name));
            self.project
                .create_source_file(&file_name)
                .add_interface(Interface::new(self.naming.interface_name(&model.name)));
        }
        Ok(())
    }

    fn build_model(&mut self, model: &Model, ctx: &EmitContext<'_>) -> Result<String> {
        let file_name = ctx.options.file_name_for_model(&self.naming.file_name(&model.name));
        let interface_name = self.naming.interface_name(&model.name);
        let fields = interface_fields(&model.properties, ctx.mapper);
        let per_file = ctx.options.is_one_file_per_model();

        let file = if per_file {
            let file = self.project.source_file_mut(&file_name)?;
            file.interface_mut(&interface_name)?.add_fields(fields);
            file
        } else {
            let file = self.project.create_source_file(&file_name);
            file.add_interface(Interface::new(&interface_name))
                .add_fields(fields);
            file
        };
        add_operation_arg_types(file, model, &self.naming, ctx.mapper);

        if per_file {
            let references = model
                .referenced_models()
                .into_iter()
                .map(|target| (target, self.naming.interface_name(target)))
                .collect::<Vec<_>>();
            self.project
                .fix_missing_imports(&file_name, &model.name, references)?;
            self.project
                .import_declared_symbols(&file_name, model.member_type_names())?;
        }

        Ok(self.project.source_file(&file_name)?.render())
    }
}

#[cfg(test)]
mod tests {
    use cradle_codegen::{EmitError, EmitterOptions};
    use cradle_schema::{Operation, OutputLayout, Schema};

    use super::*;
    use crate::TypeScriptTypeMapper;

    fn run(
        builder: &mut InterfaceBuilder,
        schema: &Schema,
        layout: OutputLayout,
    ) -> Result<Vec<String>> {
        let options = EmitterOptions::new("models", layout);
        let mapper = TypeScriptTypeMapper::new();
        let ctx = EmitContext {
            schema,
            options: &options,
            mapper: &mapper,
        };
        builder.prepare(&ctx)?;
        schema
            .models
            .iter()
            .map(|model| builder.build_model(model, &ctx))
            .collect()
    }

    fn schema() -> Schema {
        Schema::new([
            Model::new("User")
                .property("id", PropertyType::integer().primary_key())
                .property("nickname", PropertyType::string().nullable())
                .property("address", PropertyType::reference("Address"))
                .operation(
                    "moveTo",
                    Operation::new().argument("address", PropertyType::reference("Address")),
                ),
            Model::new("Address").property("city", PropertyType::string()),
        ])
    }

    #[test]
    fn test_single_file_fragments() {
        let mut builder = InterfaceBuilder::new();
        let fragments = run(&mut builder, &schema(), OutputLayout::SingleFile).unwrap();

        assert_eq!(
            fragments[0],
            "export interface IUser {\n  id: number;\n  nickname?: string | null;\n  address: IAddress;\n}\n\nexport interface MoveToOperationArgs {\n  address: IAddress;\n}\n"
        );
        assert_eq!(fragments[1], "export interface IAddress {\n  city: string;\n}\n");
    }

    #[test]
    fn test_per_file_resolves_peer_imports() {
        let mut builder = InterfaceBuilder::new();
        let fragments = run(&mut builder, &schema(), OutputLayout::OneFilePerModel).unwrap();

        assert!(fragments[0].starts_with("import { IAddress } from './Address';\n\nexport interface IUser {"));
        assert!(!fragments[1].contains("import"));
        assert_eq!(builder.project().len(), 2);
    }

    #[test]
    fn test_per_file_forward_reference_is_declared_up_front() {
        // User is filled before Address, yet IAddress already exists.
        let mut builder = InterfaceBuilder::new();
        let fragments = run(&mut builder, &schema(), OutputLayout::OneFilePerModel).unwrap();
        assert!(fragments[0].contains("address: IAddress;"));
    }

    #[test]
    fn test_per_file_unresolved_reference_aborts() {
        let schema = Schema::new([
            Model::new("User").property("office", PropertyType::import("Office")),
        ]);
        let mut builder = InterfaceBuilder::new();
        let err = run(&mut builder, &schema, OutputLayout::OneFilePerModel).unwrap_err();
        assert!(matches!(
            err,
            EmitError::UnresolvedReference { ref target, .. } if target == "Office"
        ));
    }

    #[test]
    fn test_single_file_does_not_validate_references() {
        let schema = Schema::new([
            Model::new("User").property("office", PropertyType::import("Office")),
        ]);
        let mut builder = InterfaceBuilder::new();
        let fragments = run(&mut builder, &schema, OutputLayout::SingleFile).unwrap();
        assert!(fragments[0].contains("office: IOffice;"));
    }

    #[test]
    fn test_fill_without_prepare_fails_loudly() {
        let schema = schema();
        let options = EmitterOptions::new("models", OutputLayout::OneFilePerModel);
        let mapper = TypeScriptTypeMapper::new();
        let ctx = EmitContext {
            schema: &schema,
            options: &options,
            mapper: &mapper,
        };

        let mut builder = InterfaceBuilder::new();
        let err = builder.build_model(&schema.models[0], &ctx).unwrap_err();
        assert!(matches!(err, EmitError::MissingDocument { ref name } if name == "User.ts"));
    }
}
