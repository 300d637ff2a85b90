//! Grocery product categorization.
//!
//! A [`Pipeline`] turns a product name into character n-gram TF-IDF
//! features and classifies them with a multinomial logistic regression.
//! The trainer fits a pipeline from a CSV of `(product, type)` rows and
//! writes it to disk; the server loads it once and answers predictions
//! over HTTP, attaching each type's UUID from a static table.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use typifier::{categories, dataset, Pipeline};
//!
//! let examples = dataset::load_csv("training.csv")?;
//! let pipeline = Pipeline::builder()
//!     .add_examples(examples)?
//!     .build()?;
//!
//! let label = pipeline.predict("butter")?;
//! println!("{} -> {:?}", label, categories::uuid_for(&label));
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod categories;
pub mod classifier;
pub mod client;
pub mod config;
pub mod dataset;
pub mod server;

pub use artifact::ArtifactError;
pub use classifier::{CharNgramVectorizer, ClassifierError, Pipeline, PipelineBuilder, PipelineInfo};
pub use client::{ClientError, TypifierClient};
pub use config::{ServerConfig, TrainerConfig};
pub use dataset::{DatasetError, TrainingExample};
pub use server::{AppState, PredictRequest, PredictResponse, ServerError};

/// Initializes `env_logger` with an `info` default, overridable through `RUST_LOG`.
/// Calling it more than once is harmless.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
