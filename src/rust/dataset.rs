//! Loading of labelled training data.
//!
//! The training file is a CSV with a header row naming (at least) the
//! columns `product` and `type`:
//!
//! ```text
//! product,type
//! butter,dairy & chilled
//! apfel,fruit & vegetables & nuts
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Training data not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed CSV: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Training data is empty")]
    Empty,
}

/// One labelled product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub product: String,
    #[serde(rename = "type")]
    pub label: String,
}

impl TrainingExample {
    pub fn new(product: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            label: label.into(),
        }
    }
}

impl<P: Into<String>, L: Into<String>> From<(P, L)> for TrainingExample {
    fn from((product, label): (P, L)) -> Self {
        Self::new(product, label)
    }
}

/// Reads every row of a CSV file. Any malformed row fails the whole load.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>, DatasetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DatasetError::NotFound(path.display().to_string()));
    }
    log::info!("Loading training data from {:?}", path);
    let examples = from_reader(File::open(path)?)?;
    log::info!("Loaded {} training examples", examples.len());
    Ok(examples)
}

/// Reads training examples from any CSV source.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TrainingExample>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let examples = csv_reader
        .deserialize::<TrainingExample>()
        .collect::<Result<Vec<_>, _>>()?;

    if examples.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(examples)
}

/// Sorted set of distinct labels
pub fn labels(examples: &[TrainingExample]) -> Vec<String> {
    examples
        .iter()
        .map(|e| e.label.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_product_and_type_columns() -> Result<(), DatasetError> {
        let data = "product,type\nbutter,dairy & chilled\n\"äpfel, rot\",fruit & vegetables & nuts\n";
        let examples = from_reader(data.as_bytes())?;
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], TrainingExample::new("butter", "dairy & chilled"));
        assert_eq!(examples[1].product, "äpfel, rot");
        Ok(())
    }

    #[test]
    fn test_extra_columns_are_ignored() -> Result<(), DatasetError> {
        let data = "id,product,type\n1,kaffee,coffee & tea\n";
        let examples = from_reader(data.as_bytes())?;
        assert_eq!(examples, vec![TrainingExample::new("kaffee", "coffee & tea")]);
        Ok(())
    }

    #[test]
    fn test_missing_column_fails() {
        let data = "product,category\nbutter,dairy & chilled\n";
        assert!(matches!(from_reader(data.as_bytes()), Err(DatasetError::CsvError(_))));
    }

    #[test]
    fn test_ragged_row_fails_whole_load() {
        let data = "product,type\nbutter,dairy & chilled\nbrot\n";
        assert!(matches!(from_reader(data.as_bytes()), Err(DatasetError::CsvError(_))));
    }

    #[test]
    fn test_empty_file_fails() {
        assert!(matches!(from_reader("product,type\n".as_bytes()), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_missing_file() {
        let result = load_csv("/nonexistent/typifier/training.csv");
        assert!(matches!(result, Err(DatasetError::NotFound(_))));
    }

    #[test]
    fn test_labels_are_sorted_and_unique() {
        let examples = vec![
            TrainingExample::new("cola", "drinks & alcohol"),
            TrainingExample::new("brot", "bakery"),
            TrainingExample::new("bier", "drinks & alcohol"),
        ];
        assert_eq!(labels(&examples), vec!["bakery", "drinks & alcohol"]);
    }
}
