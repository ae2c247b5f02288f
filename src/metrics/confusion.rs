use crate::error::TreeError;
use nalgebra::{DMatrix, DVector};
use std::collections::BTreeSet;

/// Confusion matrix together with the class labels of its rows and columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
    pub classes: Vec<String>,
    pub matrix: DMatrix<usize>,
}

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Rows index the true class, columns the predicted class, both in sorted
    /// label order.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::LengthMismatch` if the two vectors differ in length.
    fn confusion_matrix(
        &self,
        y_true: &DVector<String>,
        y_pred: &DVector<String>,
    ) -> Result<ConfusionMatrix, TreeError> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch {
                expected: y_true.len(),
                found: y_pred.len(),
            });
        }

        let classes: Vec<String> = y_true
            .iter()
            .chain(y_pred.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());

        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            let matrix_row = classes.binary_search(y_t).map_err(|_| {
                TreeError::InternalConsistency(format!("class '{}' missing from matrix", y_t))
            })?;
            let matrix_col = classes.binary_search(y_p).map_err(|_| {
                TreeError::InternalConsistency(format!("class '{}' missing from matrix", y_p))
            })?;
            matrix[(matrix_row, matrix_col)] += 1;
        }

        Ok(ConfusionMatrix { classes, matrix })
    }

    /// Computes the accuracy based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The share of predictions equal to the true label, or an error when the
    /// vectors differ in length.
    fn accuracy(
        &self,
        y_true: &DVector<String>,
        y_pred: &DVector<String>,
    ) -> Result<f64, TreeError> {
        let confusion = self.confusion_matrix(y_true, y_pred)?;

        let correct: usize = confusion.matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }
}
