//! Per-request data: the assembled record, the prediction, and what the
//! user is shown.

pub mod display_label;
pub mod input_record;
pub mod prediction;

pub use display_label::{DisplayLabel, Severity};
pub use input_record::InputRecord;
pub use prediction::ComparativeAdvantage;
