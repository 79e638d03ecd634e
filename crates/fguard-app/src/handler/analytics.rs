//! Analytics view handlers

use tracing::warn;

use crate::state::{AnalyticsSnapshot, AppState};

use super::UpdateResult;

/// The joined three-report load finished. A failure in any one of the reads
/// leaves the view loading indefinitely -- there is no partial render and no
/// retry.
pub(crate) fn handle_loaded(
    state: &mut AppState,
    generation: u64,
    outcome: Result<Box<AnalyticsSnapshot>, String>,
) -> UpdateResult {
    if generation != state.analytics.generation {
        return UpdateResult::none();
    }
    match outcome {
        Ok(snapshot) => state.analytics.data = Some(*snapshot),
        Err(reason) => warn!("analytics load failed: {reason}"),
    }
    UpdateResult::none()
}
