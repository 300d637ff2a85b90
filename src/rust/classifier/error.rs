use linfa_logistic::error::Error as LogisticError;
use std::fmt;

/// Represents the different types of errors that can occur while training or using a pipeline.
#[derive(Debug)]
pub enum ClassifierError {
    /// Error occurred due to invalid input parameters or training data
    ValidationError(String),
    /// Error occurred while fitting the logistic regression
    TrainingError(String),
    /// Error occurred while making predictions
    PredictionError(String),
    /// Error occurred during the build phase
    BuildError(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::TrainingError(msg) => write!(f, "Training error: {}", msg),
            Self::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<LogisticError> for ClassifierError {
    fn from(err: LogisticError) -> Self {
        ClassifierError::TrainingError(err.to_string())
    }
}
