use std::collections::{BTreeMap, BTreeSet};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;
use super::utils::normalize_rows;

/// Character n-gram TF-IDF vectorizer restricted to word boundaries.
///
/// Text is lowercased and split on whitespace. Each word is padded with a
/// single space on either side and n-grams are taken inside the padded
/// word only, so no n-gram spans two words. A padded word that is not
/// longer than `n` is emitted once as a whole and larger `n` are skipped.
///
/// Weights are raw term counts scaled by the smoothed inverse document
/// frequency `ln((1 + n_docs) / (1 + df)) + 1`, and every row is
/// L2-normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharNgramVectorizer {
    min_n: usize,
    max_n: usize,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl CharNgramVectorizer {
    /// Fits vocabulary and IDF weights on the given documents
    pub fn fit<S: AsRef<str>>(docs: &[S], ngram_range: (usize, usize)) -> Result<Self, ClassifierError> {
        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ClassifierError::ValidationError(
                format!("Invalid n-gram range ({}, {})", min_n, max_n)
            ));
        }
        if docs.is_empty() {
            return Err(ClassifierError::ValidationError("Cannot fit vectorizer on an empty corpus".into()));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in docs {
            let unique: BTreeSet<String> = char_wb_ngrams(doc.as_ref(), min_n, max_n).into_iter().collect();
            for gram in unique {
                *document_frequency.entry(gram).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(ClassifierError::ValidationError(
                "Corpus produced no n-grams; every document is blank".into()
            ));
        }

        let n_docs = docs.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (gram, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(gram, index);
        }

        Ok(Self { min_n, max_n, vocabulary, idf })
    }

    /// Transforms documents into an L2-normalized TF-IDF matrix (one row per document).
    /// N-grams not seen during fitting are ignored.
    pub fn transform<S: AsRef<str>>(&self, docs: &[S]) -> Array2<f64> {
        let mut matrix = Array2::zeros((docs.len(), self.vocabulary.len()));
        for (row, doc) in docs.iter().enumerate() {
            for gram in char_wb_ngrams(doc.as_ref(), self.min_n, self.max_n) {
                if let Some(&col) = self.vocabulary.get(&gram) {
                    matrix[[row, col]] += 1.0;
                }
            }
            for (col, weight) in self.idf.iter().enumerate() {
                matrix[[row, col]] *= weight;
            }
        }
        normalize_rows(&mut matrix);
        matrix
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        (self.min_n, self.max_n)
    }

    pub fn idf(&self, gram: &str) -> Option<f64> {
        self.vocabulary.get(gram).map(|&i| self.idf[i])
    }
}

/// Splits text into word-bounded character n-grams.
pub fn char_wb_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut grams = Vec::new();

    for word in lowered.split_whitespace() {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        let len = padded.len();

        for n in min_n..=max_n {
            if len <= n {
                grams.push(padded.iter().collect());
                break;
            }
            for window in padded.windows(n) {
                grams.push(window.iter().collect());
            }
        }
    }

    grams
}
