//! Predictor: assemble, classify, and label one submission.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use greenca_core::errors::{GreencaError, GreencaResult};
use greenca_core::models::{ComparativeAdvantage, DisplayLabel};
use greenca_core::schema::FeatureSchema;
use greenca_core::traits::IModelHandle;
use tracing::{debug, info_span, warn};

use crate::assembler::assemble;
use crate::diagnostics::render_failure;

/// Classify one submission, returning the typed label or the failure.
///
/// A class outside {0, 1} is reported as `GreencaError::InvariantViolation`.
pub fn try_run(
    values: &HashMap<String, f64>,
    schema: &FeatureSchema,
    handle: &dyn IModelHandle,
) -> GreencaResult<ComparativeAdvantage> {
    let record = {
        let _span = info_span!("greenca.assemble", feature_count = schema.len()).entered();
        assemble(values, schema)?
    };

    let _span = info_span!("greenca.predict", model = handle.name()).entered();
    let started = Instant::now();
    let raw_class = handle.predict(&record)?;
    debug!(
        raw_class,
        predict_micros = started.elapsed().as_micros() as u64,
        "model returned"
    );

    ComparativeAdvantage::try_from(raw_class)
}

/// Classify one submission and render the outcome for display.
///
/// Never fails: every error becomes a `DisplayLabel` with error severity.
pub fn run(
    values: &HashMap<String, f64>,
    schema: &FeatureSchema,
    handle: &dyn IModelHandle,
) -> DisplayLabel {
    match try_run(values, schema, handle) {
        Ok(advantage) => DisplayLabel::prediction(advantage),
        Err(err) => failure_label(&err, handle),
    }
}

fn failure_label(err: &GreencaError, handle: &dyn IModelHandle) -> DisplayLabel {
    warn!(error = %err, "prediction request failed");
    DisplayLabel::failure(err, render_failure(err, Some(handle)))
}

/// Schema and model handle bundled for repeated submissions.
///
/// Both are immutable, so one `Predictor` can serve concurrent callers.
#[derive(Clone)]
pub struct Predictor {
    schema: Arc<FeatureSchema>,
    handle: Arc<dyn IModelHandle>,
}

impl Predictor {
    pub fn new(schema: FeatureSchema, handle: Arc<dyn IModelHandle>) -> Self {
        Self {
            schema: Arc::new(schema),
            handle,
        }
    }

    pub fn try_run(&self, values: &HashMap<String, f64>) -> GreencaResult<ComparativeAdvantage> {
        try_run(values, &self.schema, self.handle.as_ref())
    }

    pub fn run(&self, values: &HashMap<String, f64>) -> DisplayLabel {
        run(values, &self.schema, self.handle.as_ref())
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("features", &self.schema.len())
            .field("model", &self.handle.name())
            .finish()
    }
}
