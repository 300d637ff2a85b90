use std::collections::BTreeSet;
use std::time::Instant;
use linfa::prelude::*;
use linfa_logistic::MultiLogisticRegression;
use ndarray::Array1;
use log::{debug, info};

use super::error::ClassifierError;
use super::linear::LinearModel;
use super::pipeline::Pipeline;
use super::vectorizer::CharNgramVectorizer;
use crate::config::TrainerConfig;
use crate::dataset::TrainingExample;

/// A builder for fitting a Pipeline with a fluent interface.
#[derive(Default, Debug)]
pub struct PipelineBuilder {
    examples: Vec<TrainingExample>,
    config: TrainerConfig,
}

impl PipelineBuilder {
    /// Creates a new empty PipelineBuilder with the default training configuration
    ///
    /// # Example
    /// ```
    /// use typifier::PipelineBuilder;
    ///
    /// let builder = PipelineBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
            config: TrainerConfig::default(),
        }
    }

    /// Replaces the whole training configuration
    pub fn with_config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the inclusive range of character n-gram lengths
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance, or a `ValidationError` if
    ///   `min_n` is zero or greater than `max_n`
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Result<Self, ClassifierError> {
        if min_n == 0 || min_n > max_n {
            return Err(ClassifierError::ValidationError(
                format!("Invalid n-gram range ({}, {})", min_n, max_n)
            ));
        }
        self.config.ngram_range = (min_n, max_n);
        Ok(self)
    }

    /// Sets the iteration limit of the logistic regression optimizer
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    fn validate_example(example: &TrainingExample) -> Result<(), ClassifierError> {
        if example.product.is_empty() {
            return Err(ClassifierError::ValidationError(
                format!("Product text cannot be empty (label '{}')", example.label)
            ));
        }
        if example.label.is_empty() {
            return Err(ClassifierError::ValidationError(
                format!("Label cannot be empty (product '{}')", example.product)
            ));
        }
        Ok(())
    }

    /// Adds a single `(product, label)` training pair
    ///
    /// # Example
    /// ```
    /// use typifier::PipelineBuilder;
    ///
    /// let builder = PipelineBuilder::new()
    ///     .add_example("butter", "dairy & chilled");
    /// assert!(builder.is_ok());
    /// ```
    pub fn add_example(
        mut self,
        product: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self, ClassifierError> {
        let example = TrainingExample::new(product, label);
        Self::validate_example(&example)?;
        self.examples.push(example);
        Ok(self)
    }

    /// Adds many training pairs; fails on the first invalid one
    pub fn add_examples<I, E>(mut self, examples: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = E>,
        E: Into<TrainingExample>,
    {
        for (i, example) in examples.into_iter().enumerate() {
            let example = example.into();
            Self::validate_example(&example).map_err(|e| match e {
                ClassifierError::ValidationError(msg) => {
                    ClassifierError::ValidationError(format!("Example {}: {}", i + 1, msg))
                }
                other => other,
            })?;
            self.examples.push(example);
        }
        Ok(self)
    }

    /// Fits the vectorizer and the logistic regression and returns the Pipeline
    ///
    /// # Returns
    /// * `Result<Pipeline, ClassifierError>` - The fitted pipeline, or an error if:
    ///   - No examples have been added
    ///   - Fewer than two distinct labels are present
    ///   - The corpus yields no n-grams
    ///   - The optimizer fails
    pub fn build(self) -> Result<Pipeline, ClassifierError> {
        if self.examples.is_empty() {
            return Err(ClassifierError::BuildError("At least one training example must be added".to_string()));
        }

        let labels: BTreeSet<&str> = self.examples.iter().map(|e| e.label.as_str()).collect();
        if labels.len() < 2 {
            return Err(ClassifierError::BuildError(
                format!("At least two distinct labels are required, found {}", labels.len())
            ));
        }
        let labels: Vec<String> = labels.into_iter().map(String::from).collect();

        let start = Instant::now();
        let products: Vec<&str> = self.examples.iter().map(|e| e.product.as_str()).collect();

        let vectorizer = CharNgramVectorizer::fit(products.as_slice(), self.config.ngram_range)?;
        let records = vectorizer.transform(products.as_slice());
        info!(
            "Vectorized {} examples into {} character n-gram features",
            products.len(),
            vectorizer.vocabulary_size()
        );

        let targets: Array1<String> = self.examples.iter().map(|e| e.label.clone()).collect();
        let dataset = Dataset::new(records, targets);

        debug!(
            "Fitting logistic regression over {} classes (alpha = {}, max_iterations = {})",
            labels.len(), self.config.alpha, self.config.max_iterations
        );
        let fitted = MultiLogisticRegression::<f64>::default()
            .alpha(self.config.alpha)
            .max_iterations(self.config.max_iterations)
            .fit(&dataset)?;
        let model = LinearModel::from_fitted(&fitted)?;

        info!("Pipeline fitted in {:.2?}", start.elapsed());

        Ok(Pipeline {
            vectorizer,
            model,
            labels,
            num_examples: self.examples.len(),
        })
    }
}
