use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace '{path}': {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Parse Error: {0}")]
    Parse(String),

    #[error("Table Validation Error: {0}")]
    Validation(String),
}

pub type TableResult<T> = Result<T, TableError>;
