//! User-visible text for failed requests.

use greenca_core::errors::{GreencaError, GreencaErrorCode};
use greenca_core::traits::IModelHandle;

/// Render a failure as the message shown in place of a label.
///
/// Key mismatches list the model's expected feature names so whoever
/// maintains the schema can see what the artifact wants.
pub fn render_failure(error: &GreencaError, handle: Option<&dyn IModelHandle>) -> String {
    let mut text = error.display_string();

    match error {
        GreencaError::Predict(e) => {
            let expected = e
                .expected_features()
                .or_else(|| handle.map(|h| h.expected_features()));
            if let Some(expected) = expected {
                text.push_str("\nModel expects features: ");
                text.push_str(&expected.join(", "));
            }
        }
        GreencaError::Assembly(_) => {
            text.push_str("\nThe input form and the feature schema disagree; the request was aborted.");
        }
        GreencaError::InvariantViolation { .. } => {
            text.push_str("\nNo label was produced.");
        }
        GreencaError::Load(_) => {
            text.push_str("\nThe model artifact is a fixed deployment asset; fix the deployment and restart.");
        }
        GreencaError::Schema(_) | GreencaError::Config(_) | GreencaError::Input(_) => {}
    }

    text
}
