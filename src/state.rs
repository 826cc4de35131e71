use crate::models::{Dashboard, MetaResponse};
use std::sync::Arc;

/// Process-wide read-only state: the three series tables and the selector
/// metadata, built once before the server starts. Handlers only read, so no
/// lock is needed; a refresh would swap in a whole new `AppState`.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Dashboard>,
    pub meta: Arc<MetaResponse>,
}

impl AppState {
    pub fn new(data: Dashboard, meta: MetaResponse) -> Self {
        Self {
            data: Arc::new(data),
            meta: Arc::new(meta),
        }
    }
}
