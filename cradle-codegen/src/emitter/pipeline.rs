use cradle_schema::{Model, OutputLayout, Schema};

use super::{EmitterOptions, MergePolicy, ModelContents};
use crate::{EmitError, OutputFile, Result, TypeMapper};

/// Read-only state shared with a [`DeclarationBuilder`] during one pass.
pub struct EmitContext<'a> {
    pub schema: &'a Schema,
    pub options: &'a EmitterOptions,
    pub mapper: &'a dyn TypeMapper,
}

/// Builds the declarations of every model in two stages.
///
/// [`prepare`](Self::prepare) runs once per pass, before any model is built,
/// and resets all document state so a builder can be reused across passes.
pub trait DeclarationBuilder {
    /// Emitter identifier used in diagnostics (e.g., "typescript").
    fn name(&self) -> &'static str;

    /// Whether this builder can produce the given layout.
    fn supports(&self, layout: OutputLayout) -> bool {
        let _ = layout;
        true
    }

    /// Stage one: declare whatever shells later models must be able to address.
    fn prepare(&mut self, ctx: &EmitContext<'_>) -> Result<()>;

    /// Stage two: fill the model's declarations and render its fragment.
    fn build_model(&mut self, model: &Model, ctx: &EmitContext<'_>) -> Result<String>;
}

/// An emitter assembled from a type mapper, a declaration builder and a merge policy.
pub struct Emitter {
    options: EmitterOptions,
    mapper: Box<dyn TypeMapper>,
    builder: Box<dyn DeclarationBuilder>,
    merge: Box<dyn MergePolicy>,
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("name", &self.builder.name())
            .field("language", &self.mapper.language())
            .field("options", &self.options)
            .finish()
    }
}

impl Emitter {
    /// Assemble an emitter, rejecting layouts the builder cannot produce.
    pub fn new(
        options: EmitterOptions,
        mapper: impl TypeMapper + 'static,
        builder: impl DeclarationBuilder + 'static,
        merge: impl MergePolicy + 'static,
    ) -> Result<Self> {
        if !builder.supports(options.layout) {
            return Err(EmitError::UnsupportedLayout {
                emitter: builder.name(),
                layout: options.layout,
            });
        }
        Ok(Self {
            options,
            mapper: Box::new(mapper),
            builder: Box::new(builder),
            merge: Box::new(merge),
        })
    }

    pub fn name(&self) -> &'static str {
        self.builder.name()
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Run one emission pass over the schema.
    ///
    /// Returns one file per model in one-file-per-model mode, or a single
    /// merged file otherwise. Any fault aborts the whole pass.
    pub fn emit_schema(&mut self, schema: &Schema) -> Result<Vec<OutputFile>> {
        let ctx = EmitContext {
            schema,
            options: &self.options,
            mapper: self.mapper.as_ref(),
        };

        self.builder.prepare(&ctx)?;

        let mut contents = Vec::with_capacity(schema.len());
        for model in &schema.models {
            let fragment = self.builder.build_model(model, &ctx)?;
            tracing::debug!(
                emitter = self.builder.name(),
                model = %model.name,
                "emitted model"
            );
            contents.push(ModelContents::new(&model.name, fragment));
        }

        let files = match self.options.layout {
            OutputLayout::OneFilePerModel => contents
                .into_iter()
                .map(|c| {
                    OutputFile::new(
                        self.options.file_path_for_model(&c.model),
                        c.contents,
                        vec![c.model],
                    )
                })
                .collect(),
            OutputLayout::SingleFile => {
                let merged = self.merge.merge(&contents);
                let models = contents.into_iter().map(|c| c.model).collect();
                vec![OutputFile::new(self.options.output.clone(), merged, models)]
            }
        };
        Ok(files)
    }
}
