use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Login required: Please log in to use the bookmark feature.")]
    LoginRequired,

    #[error("Invalid payment details: {0}")]
    InvalidPayment(String),
}

pub type Result<T> = std::result::Result<T, Error>;
