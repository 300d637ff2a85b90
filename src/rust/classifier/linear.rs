use ndarray::{Array1, Array2, Axis};
use linfa_logistic::MultiFittedLogisticRegression;
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;

/// Parameters of a fitted multinomial logistic regression.
///
/// `weights` has shape `(n_features, n_classes)`; column `j` belongs to
/// `classes[j]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LinearModel {
    weights: Array2<f64>,
    intercept: Array1<f64>,
    classes: Vec<String>,
}

impl LinearModel {
    /// Copies the parameters out of a linfa model
    pub(crate) fn from_fitted(fitted: &MultiFittedLogisticRegression<f64, String>) -> Result<Self, ClassifierError> {
        let weights = fitted.params().to_owned();
        let intercept = fitted.intercept().to_owned();
        let n_classes = weights.ncols();

        if intercept.len() != n_classes {
            return Err(ClassifierError::BuildError(format!(
                "Intercept has {} entries but model has {} classes",
                intercept.len(), n_classes
            )));
        }

        let classes = fitted.classes().to_vec();
        if classes.len() != n_classes {
            return Err(ClassifierError::BuildError(format!(
                "Model has {} labels but {} weight columns",
                classes.len(), n_classes
            )));
        }

        Ok(Self { weights, intercept, classes })
    }

    pub(crate) fn n_features(&self) -> usize {
        self.weights.nrows()
    }

    pub(crate) fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Softmax probabilities, one row per input row and one column per class
    pub(crate) fn probabilities(&self, features: &Array2<f64>) -> Result<Array2<f64>, ClassifierError> {
        if features.ncols() != self.n_features() {
            return Err(ClassifierError::PredictionError(format!(
                "Feature width {} does not match model width {}",
                features.ncols(), self.n_features()
            )));
        }

        let mut logits = features.dot(&self.weights) + &self.intercept;
        for mut row in logits.axis_iter_mut(Axis(0)) {
            let max = row.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
            row.mapv_inplace(|x| (x - max).exp());
            let sum = row.sum();
            row.mapv_inplace(|x| x / sum);
        }
        Ok(logits)
    }

    /// Index of the most probable class for each row
    pub(crate) fn argmax(probabilities: &Array2<f64>) -> Vec<usize> {
        probabilities
            .axis_iter(Axis(0))
            .map(|row| {
                row.iter()
                    .enumerate()
                    .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(i, _)| i)
                    .unwrap_or(0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn toy_model() -> LinearModel {
        LinearModel {
            weights: array![[2.0, -2.0], [-1.0, 1.0]],
            intercept: array![0.0, 0.0],
            classes: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() -> Result<(), ClassifierError> {
        let model = toy_model();
        let probs = model.probabilities(&array![[1.0, 0.0], [0.0, 1.0]])?;
        for row in probs.axis_iter(Axis(0)) {
            assert!((row.sum() - 1.0).abs() < 1e-12);
        }
        assert_eq!(LinearModel::argmax(&probs), vec![0, 1]);
        Ok(())
    }

    #[test]
    fn test_from_fitted_matches_linfa_probabilities() -> Result<(), ClassifierError> {
        use linfa::prelude::*;
        use linfa_logistic::MultiLogisticRegression;

        let records = array![
            [1.0, 0.0, 0.0],
            [0.9, 0.1, 0.0],
            [0.0, 1.0, 0.0],
            [0.1, 0.9, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.1, 0.9],
        ];
        let targets: Array1<String> = ["bakery", "bakery", "frozen", "frozen", "spreads", "spreads"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let dataset = Dataset::new(records.clone(), targets);

        let fitted = MultiLogisticRegression::<f64>::default()
            .max_iterations(100)
            .fit(&dataset)?;
        let model = LinearModel::from_fitted(&fitted)?;

        assert_eq!(model.classes(), fitted.classes());
        let ours = model.probabilities(&records)?;
        let theirs = fitted.predict_probabilities(&records);
        assert_eq!(ours.dim(), theirs.dim());
        for (a, b) in ours.iter().zip(theirs.iter()) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }

        let predicted = fitted.predict(&records);
        for (row, column) in LinearModel::argmax(&ours).into_iter().enumerate() {
            assert_eq!(model.classes()[column], predicted[row]);
        }
        Ok(())
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let model = toy_model();
        let result = model.probabilities(&array![[1.0, 0.0, 0.0]]);
        assert!(matches!(result, Err(ClassifierError::PredictionError(_))));
    }
}
