pub mod app;
pub mod chart;
pub mod errors;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod series;
pub mod ui;
pub mod state;

pub use app::router;
pub use ingest::{load_records, resolve_source};
pub use state::AppState;
