use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Unrecoverable failures. Field-level problems (bad dates, missing values)
/// never surface here, they degrade to the sentinel instead.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Delimited file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("The input has no header row")]
    EmptyInput,

    #[error(
        "Input contains duplicate column headers:\n{}\nPlease ensure all column headers are unique.",
        .details.join("\n")
    )]
    DuplicateHeaders { details: Vec<String> },

    #[error("Row at line {line} has {found} fields, but the header declares {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Columns {columns:?} all canonicalize to '{name}'")]
    ColumnCollision { name: String, columns: Vec<String> },

    #[error("Failed to serialize the normalization report: {0}")]
    Report(#[from] serde_json::Error),
}
