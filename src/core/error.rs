

use thiserror::Error;

use crate::toolkit::knowledge::CatalogError;


#[derive(Error, Debug)]
pub enum ConsultError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}


pub type Result<T> = std::result::Result<T, ConsultError>;
