//! Text-classification port.
//!
//! # Responsibility
//! - Define the contract a trained priority classifier plugs into.
//! - Validate classification input bounds before a port call.
//!
//! # Invariants
//! - The core never loads or runs a model itself; implementations live
//!   behind this trait in the boundary layer.
//! - `confidence` is the probability of the returned label, in 0.0..=1.0.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum classification input length in characters.
pub const INPUT_MIN_CHARS: usize = 3;
/// Maximum classification input length in characters.
pub const INPUT_MAX_CHARS: usize = 5000;

/// Label/confidence pair produced by a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

/// Classification failure.
#[derive(Debug)]
pub enum ClassifyError {
    /// The backing model could not be reached or loaded.
    ModelUnavailable(String),
    /// Input text violates the documented length bounds.
    InvalidInput { chars: usize },
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModelUnavailable(detail) => write!(f, "classifier unavailable: {detail}"),
            Self::InvalidInput { chars } => write!(
                f,
                "classification input is {chars} chars, expected {INPUT_MIN_CHARS}..={INPUT_MAX_CHARS}"
            ),
        }
    }
}

impl Error for ClassifyError {}

/// Port for an external text classifier.
///
/// Implementations wrap a pre-trained model and return the most likely
/// label with its confidence. The core treats them as opaque.
pub trait Classifier {
    fn predict(&self, text: &str) -> Result<Prediction, ClassifyError>;
}

/// Checks the length bounds a classifier input must satisfy.
///
/// Boundary layers call this before invoking the port so implementations
/// can assume well-formed input.
pub fn validate_classify_input(text: &str) -> Result<(), ClassifyError> {
    let chars = text.chars().count();
    if !(INPUT_MIN_CHARS..=INPUT_MAX_CHARS).contains(&chars) {
        return Err(ClassifyError::InvalidInput { chars });
    }
    Ok(())
}
