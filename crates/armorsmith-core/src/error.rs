//! Error types for Armorsmith

use thiserror::Error;

/// Main error type for Armorsmith operations
#[derive(Debug, Error)]
pub enum ArmorsmithError {
    /// Catalog snapshot failed validation
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A worker pool or native solver resource could not be acquired or released
    #[error("Resource error: {0}")]
    Resource(String),
}

/// Result type alias for Armorsmith operations
pub type Result<T> = std::result::Result<T, ArmorsmithError>;
