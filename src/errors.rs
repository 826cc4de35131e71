use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure while acquiring or decoding the weekly source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Source unreachable, unreadable or malformed. Fatal at startup.
    Fetch(String),
    /// A (year, week) pair that is not a valid ISO calendar week. Detected
    /// per record; the offending record is rejected, not the whole batch.
    InvalidDate { year: i32, week: u32 },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Fetch(detail) => write!(f, "failed to load weekly data: {detail}"),
            IngestError::InvalidDate { year, week } => {
                write!(f, "no ISO calendar week {week} in {year}")
            }
        }
    }
}

impl std::error::Error for IngestError {}
