/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum DimError {
    #[error("Unexpected input at byte {0}: {1:?}")]
    Lexical(usize, String),
    #[error("Unit parse error: {0}")]
    Grammar(String),
    #[error("Unknown unit symbol: {0}")]
    UnknownSymbol(String),
    #[error("Incompatible dimensions: expected {0}, got {1}")]
    DimensionMismatch(Dimension, Dimension),
    #[error("Cannot take root {1} of {0}: exponents are not divisible")]
    Divisibility(Dimension, i32),
    #[error("Invalid symbol {0:?}: expected 1 to 32 bytes")]
    InvalidSymbol(String),
    #[error("Bad quantity")]
    BadQuantity,
    #[error("JSON error: {0}")]
    Json(String),
}
