//! Domain error types.

/// Top-level error type for matrader.
#[derive(Debug, thiserror::Error)]
pub enum MatraderError {
    #[error("missing required column {column}")]
    Schema { column: String },

    #[error("invalid {field} value {value:?}: {reason}")]
    Parse {
        field: String,
        value: String,
        reason: String,
    },

    #[error("CSV error: {reason}")]
    Csv { reason: String },

    #[error("no price data loaded")]
    NoData,

    #[error("invalid parameters: {reason}")]
    InvalidParameter { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&MatraderError> for std::process::ExitCode {
    fn from(err: &MatraderError) -> Self {
        let code: u8 = match err {
            MatraderError::Io(_) | MatraderError::Csv { .. } => 1,
            MatraderError::Schema { .. } | MatraderError::Parse { .. } => 2,
            MatraderError::InvalidParameter { .. } => 3,
            MatraderError::NoData => 4,
        };
        std::process::ExitCode::from(code)
    }
}
