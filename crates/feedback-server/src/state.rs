use std::sync::Arc;

use feedback_export::report::ReportOptions;
use feedback_storage::FeedbackStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
    pub report: Arc<ReportOptions>,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedbackStore>, report: ReportOptions) -> Self {
        Self {
            store,
            report: Arc::new(report),
        }
    }
}
