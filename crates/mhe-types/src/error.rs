// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MheError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid capacity: max_length must be >= 1, got {max_length}")]
    InvalidCapacity { max_length: usize },

    #[error("Index out of range: index={index}, length={length}")]
    OutOfRange { index: usize, length: usize },

    #[error("Channel capacity exceeded: capacity={capacity}")]
    CapacityExceeded { capacity: usize },

    #[error("Dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid sensor mask: {0}")]
    InvalidMask(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MheResult<T> = Result<T, MheError>;
