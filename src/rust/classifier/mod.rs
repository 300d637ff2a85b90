mod error;
mod linear;
mod pipeline;
pub mod builder;
pub mod vectorizer;
mod utils;

pub use error::ClassifierError;
pub use pipeline::Pipeline;
pub use builder::PipelineBuilder;
pub use vectorizer::CharNgramVectorizer;

/// Information about a fitted pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineInfo {
    /// Number of distinct labels the pipeline was trained on
    pub num_classes: usize,
    /// Labels of the classes, sorted
    pub class_labels: Vec<String>,
    /// Number of distinct character n-grams in the vocabulary
    pub vocabulary_size: usize,
    /// Inclusive n-gram length range used by the vectorizer
    pub ngram_range: (usize, usize),
    /// Number of training examples the pipeline was fitted on
    pub num_examples: usize,
}
