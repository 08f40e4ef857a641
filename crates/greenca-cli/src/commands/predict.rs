//! `greenca predict`: collect the form, classify, print the label.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use greenca_core::constants::APP_TITLE;
use greenca_core::errors::GreencaError;
use greenca_predict::Predictor;
use tracing::debug;

use super::{EXIT_OK, EXIT_REQUEST_FAILED};
use crate::collector::InputCollector;

/// Where the form values come from.
#[derive(Debug, Default)]
pub struct PredictArgs {
    pub assignments: Vec<String>,
    pub values_file: Option<PathBuf>,
    pub interactive: bool,
    pub json: bool,
}

/// Gather values from file, flags, then prompts (each overriding the
/// previous source), run the predictor, and write the label.
pub fn execute<R: BufRead, W: Write>(
    collector: &InputCollector<'_>,
    predictor: &Predictor,
    args: &PredictArgs,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<u8> {
    let mut values: HashMap<String, f64> = HashMap::new();

    if let Some(path) = &args.values_file {
        values.extend(
            collector
                .load_values_file(path)
                .map_err(GreencaError::from)?,
        );
    }
    values.extend(
        collector
            .collect_assignments(&args.assignments)
            .map_err(GreencaError::from)?,
    );

    if args.interactive {
        writeln!(out, "{APP_TITLE}")?;
        writeln!(out, "Please provide the following information:")?;
        collector
            .prompt(input, out, &mut values)
            .map_err(GreencaError::from)?;
    }

    let missing = collector.missing(&values);
    if !missing.is_empty() {
        debug!(?missing, "submitting with fields missing");
    }

    let label = predictor.run(&values);
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&label)?)?;
    } else {
        writeln!(out, "{label}")?;
    }

    Ok(if label.is_error() {
        EXIT_REQUEST_FAILED
    } else {
        EXIT_OK
    })
}
