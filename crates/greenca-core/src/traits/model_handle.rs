use crate::errors::PredictError;
use crate::models::InputRecord;

/// A loaded, read-only binary classifier.
///
/// Implementations are immutable after load and shared across requests,
/// hence `Send + Sync`.
pub trait IModelHandle: Send + Sync {
    /// Classify one record, returning the model's raw class scalar.
    ///
    /// Fails with a `PredictError` naming the expected features when the
    /// record's keys or their order differ from what the model was fit with.
    fn predict(&self, record: &InputRecord) -> Result<i64, PredictError>;

    /// Feature names the model was fit with, in order.
    fn expected_features(&self) -> &[String];

    /// Short name for logs and diagnostics.
    fn name(&self) -> &str;
}
