use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;
use super::linear::LinearModel;
use super::vectorizer::CharNgramVectorizer;

/// A fitted text-classification pipeline: character n-gram TF-IDF features
/// feeding a multinomial logistic regression.
///
/// # Thread Safety
///
/// A `Pipeline` is immutable once built and is `Send + Sync`, so a single
/// instance can be shared behind an `Arc` by every request handler.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use typifier::Pipeline;
///
/// let pipeline = Pipeline::builder()
///     .add_example("butter", "dairy & chilled")?
///     .add_example("vollmilch", "dairy & chilled")?
///     .add_example("apfel", "fruit & vegetables & nuts")?
///     .add_example("banane", "fruit & vegetables & nuts")?
///     .build()?;
///
/// let label = pipeline.predict("milch")?;
/// println!("Predicted type: {}", label);
/// # Ok(())
/// # }
/// ```
#[derive(Serialize, Deserialize)]
pub struct Pipeline {
    pub(crate) vectorizer: CharNgramVectorizer,
    pub(crate) model: LinearModel,
    pub(crate) labels: Vec<String>,
    pub(crate) num_examples: usize,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Pipeline>();
    }
};

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("labels", &self.labels)
            .field("vocabulary_size", &self.vectorizer.vocabulary_size())
            .field("ngram_range", &self.vectorizer.ngram_range())
            .field("num_examples", &self.num_examples)
            .finish()
    }
}

impl Pipeline {
    /// Creates a new PipelineBuilder for fluent construction
    pub fn builder() -> super::builder::PipelineBuilder {
        super::builder::PipelineBuilder::new()
    }

    /// Returns information about the fitted pipeline
    pub fn info(&self) -> super::PipelineInfo {
        super::PipelineInfo {
            num_classes: self.labels.len(),
            class_labels: self.labels.clone(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            ngram_range: self.vectorizer.ngram_range(),
            num_examples: self.num_examples,
        }
    }

    /// Predicts the label of a product name.
    ///
    /// The returned label is always one of the labels seen during training.
    /// Text is not validated: an empty or unseen string still gets the
    /// label favoured by the model's intercepts.
    pub fn predict(&self, text: &str) -> Result<String, ClassifierError> {
        let features = self.vectorizer.transform(&[text]);
        let probabilities = self.model.probabilities(&features)?;

        LinearModel::argmax(&probabilities)
            .first()
            .and_then(|&i| self.model.classes().get(i))
            .cloned()
            .ok_or_else(|| ClassifierError::PredictionError("Model returned no prediction".into()))
    }

    /// Predicts the label of a product name and returns the probability of every class.
    ///
    /// # Returns
    /// A tuple containing:
    /// * The predicted class label
    /// * A HashMap of class labels to their probabilities (summing to 1.0)
    pub fn predict_with_scores(&self, text: &str) -> Result<(String, HashMap<String, f64>), ClassifierError> {
        let features = self.vectorizer.transform(&[text]);
        let probabilities = self.model.probabilities(&features)?;

        if probabilities.nrows() != 1 {
            return Err(ClassifierError::PredictionError(
                format!("Expected one row of probabilities, got {}", probabilities.nrows())
            ));
        }

        let best_class = LinearModel::argmax(&probabilities)
            .first()
            .and_then(|&i| self.model.classes().get(i))
            .cloned()
            .ok_or_else(|| ClassifierError::PredictionError("Model has no classes".into()))?;

        let scores: HashMap<String, f64> = self.model.classes()
            .iter()
            .cloned()
            .zip(probabilities.row(0).iter().copied())
            .collect();

        Ok((best_class, scores))
    }

    /// Sorted list of labels the pipeline can emit
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
