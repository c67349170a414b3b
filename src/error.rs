use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Ingredient not found: {0}")]
    UnknownIngredient(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Activity multiplier {0} is not one of the supported levels")]
    InvalidActivityMultiplier(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MealError>;
