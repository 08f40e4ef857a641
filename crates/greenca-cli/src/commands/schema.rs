//! `greenca schema`: show the active feature schema.

use std::io::Write;

use greenca_core::errors::GreencaError;
use greenca_core::schema::FeatureSchema;

use super::EXIT_OK;

pub fn execute<W: Write>(schema: &FeatureSchema, as_toml: bool, out: &mut W) -> anyhow::Result<u8> {
    if as_toml {
        let text = schema.to_toml().map_err(GreencaError::from)?;
        write!(out, "{text}")?;
        return Ok(EXIT_OK);
    }

    let width = schema
        .iter()
        .map(|f| f.display_name.len())
        .max()
        .unwrap_or(0);
    for (i, def) in schema.iter().enumerate() {
        writeln!(
            out,
            "{:>2}  {:<8} {:<width$}  {}",
            i + 1,
            def.model_identifier,
            def.display_name,
            def.range_label(),
        )?;
    }
    Ok(EXIT_OK)
}
