#[derive(Debug, thiserror::Error)]
pub enum VegmarketError {
    /// The market site could not be reached, or answered with a
    /// non-success status.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] reqwest::Error),

    /// The fetched page did not have the expected table structure.
    #[error("parse error: {0}")]
    Parse(String),

    /// The page parsed cleanly but contained zero usable price rows.
    #[error("no vegetable prices found for '{0}'")]
    EmptyResult(String),

    /// The requested vegetable is not in the current price table.
    #[error("unknown vegetable: '{0}'")]
    InvalidSelection(String),

    /// Quantity must be a finite number greater than zero.
    #[error("invalid quantity: {0} kg")]
    InvalidQuantity(f64),

    /// City input was blank after normalization.
    #[error("city must not be empty")]
    EmptyCity,
}

pub type Result<T> = std::result::Result<T, VegmarketError>;
