use super::report::{NodeEvent, NodeKind, OutlineReporter, Reporter};
use crate::error::TreeError;
use indexmap::IndexMap;
use std::fmt::{self, Display};

/// Decision tree node
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    Leaf {
        label: String,
    },
    Internal {
        attribute: usize,
        /// One child per value of `attribute` seen while growing, in first-seen order.
        children: IndexMap<String, TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Length of the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { children, .. } => {
                1 + children.values().map(TreeNode::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { children, .. } => children.values().map(TreeNode::leaf_count).sum(),
        }
    }

    /// Follows the branches matching `features` down to a leaf and returns its label.
    ///
    /// `features` holds the predictor values of one record; a trailing class
    /// value is allowed and ignored.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::LengthMismatch` if a split needs an attribute past the
    /// end of `features`, and `TreeError::UnseenValue` if no branch exists for
    /// the record's value.
    pub fn predict<S: AsRef<str>>(&self, features: &[S]) -> Result<&str, TreeError> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => return Ok(label.as_str()),
                Self::Internal {
                    attribute,
                    children,
                } => {
                    let value = features
                        .get(*attribute)
                        .ok_or(TreeError::LengthMismatch {
                            expected: attribute + 1,
                            found: features.len(),
                        })?
                        .as_ref();
                    node = children.get(value).ok_or_else(|| TreeError::UnseenValue {
                        attribute: *attribute,
                        value: value.to_owned(),
                    })?;
                }
            }
        }
    }

    /// Reports every node in pre-order: a node before its children, children in
    /// branch order.
    pub fn walk<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        let mut stack: Vec<(&TreeNode, usize, Option<usize>, Option<&str>)> =
            vec![(self, 0, None, None)];

        while let Some((node, depth, parent_attribute, branch)) = stack.pop() {
            let kind = match node {
                Self::Leaf { label } => NodeKind::Leaf {
                    label: label.as_str(),
                },
                Self::Internal {
                    attribute,
                    children,
                } => {
                    for (value, child) in children.iter().rev() {
                        stack.push((child, depth + 1, Some(*attribute), Some(value.as_str())));
                    }
                    NodeKind::Split {
                        attribute: *attribute,
                    }
                }
            };

            reporter.report(&NodeEvent {
                depth,
                parent_attribute,
                branch,
                kind,
            });
        }
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reporter = OutlineReporter::new();
        self.walk(&mut reporter);
        f.write_str(reporter.output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market_tree() -> TreeNode {
        let competition = TreeNode::Internal {
            attribute: 1,
            children: IndexMap::from([
                ("yes".to_string(), TreeNode::leaf("down")),
                ("no".to_string(), TreeNode::leaf("up")),
            ]),
        };
        TreeNode::Internal {
            attribute: 0,
            children: IndexMap::from([
                ("old".to_string(), TreeNode::leaf("down")),
                ("mid".to_string(), competition),
                ("new".to_string(), TreeNode::leaf("up")),
            ]),
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<(bool, usize, Option<usize>, String)>,
    }

    impl Reporter for Recorder {
        fn report(&mut self, event: &NodeEvent<'_>) {
            let text = match event.kind {
                NodeKind::Split { attribute } => attribute.to_string(),
                NodeKind::Leaf { label } => label.to_string(),
            };
            self.events
                .push((event.is_leaf(), event.depth, event.parent_attribute, text));
        }
    }

    #[test]
    fn test_depth_and_leaf_count() {
        let tree = market_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(TreeNode::leaf("yes").depth(), 0);
    }

    #[test]
    fn test_predict() {
        let tree = market_tree();
        assert_eq!(tree.predict(&["old", "yes", "swr"]).unwrap(), "down");
        assert_eq!(tree.predict(&["mid", "no", "hwr"]).unwrap(), "up");
        assert_eq!(tree.predict(&["mid", "yes", "hwr", "up"]).unwrap(), "down");
    }

    #[test]
    fn test_predict_unseen_value() {
        let tree = market_tree();
        let result = tree.predict(&["ancient", "yes", "swr"]);
        match result {
            Err(TreeError::UnseenValue { attribute, value }) => {
                assert_eq!(attribute, 0);
                assert_eq!(value, "ancient");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_predict_short_record() {
        let tree = market_tree();
        let result = tree.predict(&["mid"]);
        assert!(matches!(
            result,
            Err(TreeError::LengthMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_walk_is_pre_order() {
        let mut recorder = Recorder::default();
        market_tree().walk(&mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                (false, 0, None, "0".to_string()),
                (true, 1, Some(0), "down".to_string()),
                (false, 1, Some(0), "1".to_string()),
                (true, 2, Some(1), "down".to_string()),
                (true, 2, Some(1), "up".to_string()),
                (true, 1, Some(0), "up".to_string()),
            ]
        );
    }

    #[test]
    fn test_display() {
        let expected = "\
split on #0
  #0 = old -> down
  #0 = mid: split on #1
    #1 = yes -> down
    #1 = no -> up
  #0 = new -> up
";
        assert_eq!(market_tree().to_string(), expected);
    }
}
