//! Top-down growth of a decision tree.
//!
//! Each call scores every predictor attribute of the rows it receives,
//! including attributes already split on by its ancestors, and either splits
//! on the best one or closes the branch with a leaf.
use super::node::TreeNode;
use super::params::{LeafLabel, TreeParams};
use super::report::Reporter;
use super::scorer::{best_attribute, AttributeScores};
use crate::data::dataset::Dataset;
use crate::error::TreeError;
use crate::metrics::statistics::{self, OccurrenceMap};
use indexmap::IndexMap;
use tracing::{debug, trace};

#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    params: TreeParams,
}

impl TreeBuilder {
    pub fn new(params: TreeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    /// Grows a complete tree from `dataset`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InternalConsistency` if an empty set of rows reaches a
    /// node.
    pub fn build(&self, dataset: &Dataset) -> Result<TreeNode, TreeError> {
        self.grow(dataset, 0, None)
    }

    fn grow(
        &self,
        dataset: &Dataset,
        depth: usize,
        parent_attribute: Option<usize>,
    ) -> Result<TreeNode, TreeError> {
        if dataset.is_empty() {
            return Err(TreeError::InternalConsistency(format!(
                "empty dataset reached a node at depth {}",
                depth
            )));
        }

        let occurrences = statistics::occurrences(dataset);
        let scores = AttributeScores::evaluate(dataset, &occurrences);
        trace!(
            depth,
            information = ?scores.information.as_slice(),
            gain = ?scores.gain.as_slice(),
            split_information = ?scores.split_information.as_slice(),
            gain_ratio = ?scores.gain_ratio.as_slice(),
            "scored attributes"
        );

        match best_attribute(scores.ranking(self.params.criterion)) {
            Some((attribute, score)) if score > 0.0 => {
                debug!(
                    depth,
                    parent = ?parent_attribute,
                    rows = dataset.nrows(),
                    distinct = ?statistics::distinct_values(&occurrences),
                    class_entropy = scores.class_entropy,
                    attribute,
                    score,
                    "split"
                );

                let mut children = IndexMap::new();
                for (value, subset) in dataset.partition(attribute)? {
                    let child = self.grow(&subset, depth + 1, Some(attribute))?;
                    children.insert(value, child);
                }
                Ok(TreeNode::Internal {
                    attribute,
                    children,
                })
            }
            _ => {
                let label = self.leaf_label(&occurrences)?;
                debug!(
                    depth,
                    parent = ?parent_attribute,
                    rows = dataset.nrows(),
                    label = %label,
                    "leaf"
                );
                Ok(TreeNode::Leaf { label })
            }
        }
    }

    fn leaf_label(&self, occurrences: &[OccurrenceMap]) -> Result<String, TreeError> {
        let classes = occurrences.last().ok_or_else(|| {
            TreeError::InternalConsistency("occurrences are missing the class column".into())
        })?;

        let label = match self.params.leaf_label {
            LeafLabel::FirstObserved => classes.first().map(|(label, _)| label),
            LeafLabel::Majority => classes
                .iter()
                .fold(None, |best: Option<(&String, usize)>, (label, &count)| match best {
                    Some((_, best_count)) if count <= best_count => best,
                    _ => Some((label, count)),
                })
                .map(|(label, _)| label),
        };

        label
            .cloned()
            .ok_or_else(|| TreeError::InternalConsistency("a leaf received no class values".into()))
    }
}

/// Grows a tree with the default parameters: gain ratio, first observed leaf label.
pub fn build_tree(dataset: &Dataset) -> Result<TreeNode, TreeError> {
    TreeBuilder::default().build(dataset)
}

/// Grows a tree and reports its nodes to `reporter` in pre-order.
///
/// Nothing is reported unless the whole tree was built.
pub fn build_tree_with_reporter<R: Reporter + ?Sized>(
    dataset: &Dataset,
    params: &TreeParams,
    reporter: &mut R,
) -> Result<TreeNode, TreeError> {
    let tree = TreeBuilder::new(params.clone()).build(dataset)?;
    tree.walk(reporter);
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::params::SplitCriterion;
    use crate::trees::report::OutlineReporter;

    fn market() -> Dataset {
        Dataset::from_rows(vec![
            vec!["old", "yes", "swr", "down"],
            vec!["old", "no", "swr", "down"],
            vec!["old", "no", "hwr", "down"],
            vec!["mid", "yes", "swr", "down"],
            vec!["mid", "yes", "hwr", "down"],
            vec!["mid", "no", "hwr", "up"],
            vec!["mid", "no", "swr", "up"],
            vec!["new", "yes", "swr", "up"],
            vec!["new", "no", "hwr", "up"],
            vec!["new", "no", "swr", "up"],
        ])
        .unwrap()
    }

    fn params(criterion: SplitCriterion, leaf_label: LeafLabel) -> TreeParams {
        TreeParams {
            criterion,
            leaf_label,
        }
    }

    #[test]
    fn test_perfect_split() {
        let dataset = Dataset::from_rows(vec![
            vec!["a", "yes"],
            vec!["a", "yes"],
            vec!["b", "no"],
            vec!["b", "no"],
        ])
        .unwrap();

        let tree = build_tree(&dataset).unwrap();

        let expected = TreeNode::Internal {
            attribute: 0,
            children: IndexMap::from([
                ("a".to_string(), TreeNode::leaf("yes")),
                ("b".to_string(), TreeNode::leaf("no")),
            ]),
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_constant_class_is_a_leaf() {
        let dataset = Dataset::from_rows(vec![
            vec!["a", "x", "yes"],
            vec!["b", "y", "yes"],
            vec!["c", "x", "yes"],
        ])
        .unwrap();

        assert_eq!(build_tree(&dataset).unwrap(), TreeNode::leaf("yes"));
    }

    #[test]
    fn test_unique_values_without_gain_is_a_leaf() {
        let dataset =
            Dataset::from_rows(vec![vec!["a", "no"], vec!["b", "no"], vec!["c", "no"]]).unwrap();

        assert_eq!(build_tree(&dataset).unwrap(), TreeNode::leaf("no"));
    }

    #[test]
    fn test_market_tree() {
        let tree = build_tree(&market()).unwrap();

        let expected = TreeNode::Internal {
            attribute: 0,
            children: IndexMap::from([
                ("old".to_string(), TreeNode::leaf("down")),
                (
                    "mid".to_string(),
                    TreeNode::Internal {
                        attribute: 1,
                        children: IndexMap::from([
                            ("yes".to_string(), TreeNode::leaf("down")),
                            ("no".to_string(), TreeNode::leaf("up")),
                        ]),
                    },
                ),
                ("new".to_string(), TreeNode::leaf("up")),
            ]),
        };
        assert_eq!(tree, expected);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_market_tree_predicts_its_training_rows() {
        let dataset = market();
        let tree = build_tree(&dataset).unwrap();

        for row in 0..dataset.nrows() {
            let record: Vec<&str> = (0..dataset.n_attributes())
                .map(|column| dataset.value(row, column))
                .collect();
            assert_eq!(tree.predict(&record).unwrap(), dataset.value(row, 3));
        }
    }

    #[test]
    fn test_tie_break_prefers_first_column() {
        let dataset = Dataset::from_rows(vec![
            vec!["a", "x", "yes"],
            vec!["a", "x", "yes"],
            vec!["b", "y", "no"],
            vec!["b", "y", "no"],
        ])
        .unwrap();

        match build_tree(&dataset).unwrap() {
            TreeNode::Internal { attribute, .. } => assert_eq!(attribute, 0),
            leaf => panic!("expected a split, got {:?}", leaf),
        }
    }

    #[test]
    fn test_criterion_changes_the_split() {
        let dataset = Dataset::from_rows(vec![
            vec!["r1", "a", "yes"],
            vec!["r2", "a", "yes"],
            vec!["r3", "b", "no"],
            vec!["r4", "b", "no"],
        ])
        .unwrap();

        let ratio = TreeBuilder::new(params(SplitCriterion::GainRatio, LeafLabel::FirstObserved))
            .build(&dataset)
            .unwrap();
        let gain = TreeBuilder::new(params(
            SplitCriterion::InformationGain,
            LeafLabel::FirstObserved,
        ))
        .build(&dataset)
        .unwrap();

        assert!(matches!(ratio, TreeNode::Internal { attribute: 1, .. }));
        assert!(matches!(gain, TreeNode::Internal { attribute: 0, .. }));
        assert_eq!(gain.leaf_count(), 4);
    }

    #[test]
    fn test_leaf_label_policies() {
        let dataset = Dataset::from_rows(vec![
            vec!["a", "no"],
            vec!["a", "yes"],
            vec!["a", "yes"],
        ])
        .unwrap();

        let first = TreeBuilder::new(params(SplitCriterion::GainRatio, LeafLabel::FirstObserved))
            .build(&dataset)
            .unwrap();
        let majority = TreeBuilder::new(params(SplitCriterion::GainRatio, LeafLabel::Majority))
            .build(&dataset)
            .unwrap();

        assert_eq!(first, TreeNode::leaf("no"));
        assert_eq!(majority, TreeNode::leaf("yes"));
    }

    #[test]
    fn test_majority_tie_goes_to_first_observed() {
        let dataset = Dataset::from_rows(vec![vec!["a", "up"], vec!["a", "down"]]).unwrap();

        let tree = TreeBuilder::new(params(SplitCriterion::GainRatio, LeafLabel::Majority))
            .build(&dataset)
            .unwrap();

        assert_eq!(tree, TreeNode::leaf("up"));
    }

    #[test]
    fn test_empty_dataset_is_an_internal_error() {
        let empty = market().select_rows(&[]);

        let result = TreeBuilder::default().build(&empty);

        assert!(matches!(result, Err(TreeError::InternalConsistency(_))));
    }

    #[test]
    fn test_build_tree_with_reporter() {
        let names = vec![
            "age".to_string(),
            "competition".to_string(),
            "type".to_string(),
        ];
        let mut reporter = OutlineReporter::with_attribute_names(names);

        let tree = build_tree_with_reporter(&market(), &TreeParams::new(), &mut reporter).unwrap();

        let expected = "\
split on age
  age = old -> down
  age = mid: split on competition
    competition = yes -> down
    competition = no -> up
  age = new -> up
";
        assert_eq!(reporter.output(), expected);
        assert_eq!(tree.leaf_count(), 4);
    }
}
