//! Built-in indicator catalog, in the order the classifier was trained with.
//!
//! Identifiers group the indicators by family: `EP` environmental protection
//! expenditure, `ET` environmental taxes, `NC` natural capital (forests and
//! land), `FS` fossil fuel subsidies, `RE` electricity generation.

use super::FeatureDefinition;

/// `(display_name, model_identifier, min, max, precision)`.
type CatalogEntry = (&'static str, &'static str, f64, f64, Option<u8>);

const CATALOG: [CatalogEntry; crate::constants::FEATURE_COUNT] = [
    ("Exp_biodiversity_landscape_protection_%GDP", "EP_0", 0.0, 1.1, None),
    ("Exp_environment_protection_%GDP", "EP_1", 0.0, 4.0, None),
    ("Exp_environmental_protection_NEC_%GDP", "EP_2", -0.4, 3.0, None),
    ("Exp_on_environmental_protection_R&D_%GDP", "EP_3", 0.0, 0.01, Some(4)),
    ("Exp_pollution_abatement_%GDP", "EP_4", 0.0, 0.7, None),
    ("Exp_waste_management_%GDP", "EP_5", 0.0, 0.8, None),
    ("Exp_waste_water_management_%GDP", "EP_6", -0.1, 0.6, None),
    ("Environmental_Taxes_%GDP", "ET_0", 0.0, 5.0, None),
    ("Taxes_Energy_%GDP", "ET_1", 0.0, 4.0, None),
    ("Taxes_Pollution_%GDP", "ET_2", 0.0, 0.4, None),
    ("Taxes_Resources_%GDP", "ET_3", 0.0, 5.0, None),
    ("Taxes_Transport_%GDP", "ET_4", 0.0, 1.7, None),
    ("Carbon_stocks_forests_MT", "NC_0", 0.0, 52_021.0, None),
    ("Index_carbon_stocks_forests", "NC_1", 62.0, 343.0, None),
    ("Index_forest_extent", "NC_2", 66.0, 280.0, None),
    ("Land_area_1000HA", "NC_3", 6.0, 1_638_000.0, None),
    ("Share_forest_area_%", "NC_4", 0.0, 93.03, None),
    ("Implicit Fossil_Fuel_Subsidies_%GDP", "FS_0", 0.13, 21.0, None),
    ("Explicit_Fossil_Fuel_Subsidies_%GDP", "FS_1", 0.0, 9.7, None),
    ("Renewable_Electricity_Generation_GWh", "RE_0", 2.3, 515_000.0, None),
    ("Non-Renewable_Electricity_Generation_GWh", "RE_0_1", 0.0, 734_500.0, None),
];

/// The built-in feature definitions, in model order.
pub fn definitions() -> Vec<FeatureDefinition> {
    CATALOG
        .iter()
        .map(|&(display_name, identifier, min, max, precision)| FeatureDefinition {
            display_name: display_name.to_string(),
            model_identifier: identifier.to_string(),
            min,
            max,
            precision,
        })
        .collect()
}
