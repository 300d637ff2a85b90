use ndarray::{Array1, Array2, Axis};

pub(crate) fn normalize_vector(vec: &Array1<f64>) -> Array1<f64> {
    let norm: f64 = vec.iter().map(|&x| x * x).sum::<f64>().sqrt();
    if norm > 1e-10 {
        vec / norm
    } else {
        Array1::zeros(vec.len())
    }
}

/// L2-normalizes every row in place; all-zero rows stay zero.
pub(crate) fn normalize_rows(matrix: &mut Array2<f64>) {
    for mut row in matrix.axis_iter_mut(Axis(0)) {
        let normalized = normalize_vector(&row.to_owned());
        row.assign(&normalized);
    }
}
