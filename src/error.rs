use thiserror::Error;

#[derive(Debug, Error)]
pub enum OvenError {
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Menu item already exists: {0}")]
    DuplicateMenuItem(String),

    #[error("No active event. Use 'event <slug>' to pick one.")]
    NoActiveEvent,

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

pub type Result<T> = std::result::Result<T, OvenError>;
