//! Startup: resolve configuration and schema once per process.

use std::path::Path;
use std::sync::Arc;

use greenca_core::config::GreencaConfig;
use greenca_core::errors::GreencaResult;
use greenca_core::schema::FeatureSchema;
use greenca_core::traits::IModelHandle;
use greenca_model::load_model;
use greenca_predict::Predictor;
use tracing::info;

use crate::cli::GlobalArgs;
use crate::collector::InputCollector;

/// Resolved configuration and schema.
#[derive(Debug)]
pub struct App {
    pub config: GreencaConfig,
    pub schema: FeatureSchema,
}

impl App {
    /// Resolve configuration layers rooted at `root`.
    ///
    /// Nothing else is loaded, so logging can be set up from the result
    /// before the schema and artifact are read.
    pub fn load_config(global: &GlobalArgs, root: &Path) -> GreencaResult<GreencaConfig> {
        let overrides = global.overrides();
        let config = match &global.config {
            Some(path) => GreencaConfig::load_file(path, Some(&overrides))?,
            None => GreencaConfig::load(root, Some(&overrides))?,
        };
        Ok(config)
    }

    /// Load the schema the configuration names.
    pub fn from_config(config: GreencaConfig) -> GreencaResult<Self> {
        let schema = match &config.schema.path {
            Some(path) => {
                info!(path = %path, "loading feature schema");
                FeatureSchema::load(Path::new(path))?
            }
            None => FeatureSchema::builtin(),
        };
        Ok(Self { config, schema })
    }

    /// Load the model handle. Failure here ends the process.
    pub fn load_handle(&self) -> GreencaResult<Arc<dyn IModelHandle>> {
        Ok(load_model(&self.config.model, &self.schema)?)
    }

    pub fn predictor(&self) -> GreencaResult<Predictor> {
        Ok(Predictor::new(self.schema.clone(), self.load_handle()?))
    }

    pub fn collector(&self) -> InputCollector<'_> {
        InputCollector::new(&self.schema, self.config.input.effective_out_of_range())
    }
}
