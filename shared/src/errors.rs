//! Error types for the Smart Fitness Assistant core

use thiserror::Error;

/// Errors raised by the pure calculation core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Error returned when parsing an unrecognized category name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized value '{0}'")]
pub struct UnknownVariant(pub String);
