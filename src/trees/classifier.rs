//! Decision Tree Classifier
use super::builder::TreeBuilder;
use super::node::TreeNode;
use super::params::{LeafLabel, SplitCriterion, TreeParams};
use super::report::Reporter;
use crate::data::dataset::Dataset;
use crate::error::TreeError;
use crate::metrics::confusion::ClassificationMetrics;
use nalgebra::{DMatrix, DVector};
use tracing::info;

/// Decision tree classifier over categorical attributes.
#[derive(Clone, Debug, Default)]
pub struct DecisionTreeClassifier {
    root: Option<TreeNode>,
    n_attributes: usize,
    tree_params: TreeParams,
}

impl ClassificationMetrics for DecisionTreeClassifier {}

impl DecisionTreeClassifier {
    /// Creates a new classifier with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `criterion` - Score used to rank attributes, gain ratio when `None`.
    /// * `leaf_label` - How leaves pick their label, first observed when `None`.
    pub fn with_params(criterion: Option<SplitCriterion>, leaf_label: Option<LeafLabel>) -> Self {
        Self {
            root: None,
            n_attributes: 0,
            tree_params: TreeParams {
                criterion: criterion.unwrap_or_default(),
                leaf_label: leaf_label.unwrap_or_default(),
            },
        }
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// The fitted tree, if any.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Builds the decision tree from a dataset, replacing any previous tree.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree couldn't be built.
    pub fn fit(&mut self, dataset: &Dataset) -> Result<&TreeNode, TreeError> {
        let tree = TreeBuilder::new(self.tree_params.clone()).build(dataset)?;
        info!(
            rows = dataset.nrows(),
            attributes = dataset.n_attributes(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "fitted decision tree"
        );

        self.n_attributes = dataset.n_attributes();
        Ok(&*self.root.insert(tree))
    }

    /// Predicts the class of every row of `features`.
    ///
    /// # Arguments
    ///
    /// * `features` - One record per row, holding the predictor attributes only.
    ///
    /// # Errors
    ///
    /// Fails with `TreeError::NotFitted` before `fit`, with
    /// `TreeError::LengthMismatch` if `features` does not have one column per
    /// attribute seen during `fit`, and with `TreeError::UnseenValue` if a row
    /// holds a value no branch was grown for.
    pub fn predict(&self, features: &DMatrix<String>) -> Result<DVector<String>, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        if features.ncols() != self.n_attributes {
            return Err(TreeError::LengthMismatch {
                expected: self.n_attributes,
                found: features.ncols(),
            });
        }

        let predictions = (0..features.nrows())
            .map(|row| {
                let record: Vec<&str> = (0..features.ncols())
                    .map(|column| features[(row, column)].as_str())
                    .collect();
                root.predict(&record).map(str::to_owned)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DVector::from_vec(predictions))
    }

    /// Reports the fitted tree to `reporter` in pre-order.
    pub fn report<R: Reporter + ?Sized>(&self, reporter: &mut R) -> Result<(), TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        root.walk(reporter);
        Ok(())
    }
}
