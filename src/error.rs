use thiserror::Error;

#[derive(Error, Debug)]
pub enum BjError {
    #[error("Invalid card rank: {0}")]
    InvalidRank(char),

    #[error("Invalid hand code: {0}")]
    InvalidCode(String),

    #[error("Invalid hand notation: {0}")]
    InvalidHand(String),

    #[error("{label} is not a row of the {table} table")]
    InvalidRowLabel { table: &'static str, label: String },

    #[error("{label} is not a column of the {table} table")]
    InvalidColumnLabel { table: &'static str, label: String },

    #[error("{table}[{row},{col}] has not been computed")]
    EmptyCell {
        table: &'static str,
        row: String,
        col: String,
    },

    #[error("{what} sums to {sum}, expected {expected}")]
    DistributionDrift {
        what: String,
        sum: f64,
        expected: f64,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BjResult<T> = Result<T, BjError>;
