use crate::error::TreeError;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Score used to rank attributes when choosing a split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitCriterion {
    /// Information gain normalised by split information (C4.5).
    #[default]
    GainRatio,
    /// Raw information gain (ID3).
    InformationGain,
}

impl FromStr for SplitCriterion {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gain-ratio" => Ok(Self::GainRatio),
            "information-gain" => Ok(Self::InformationGain),
            other => Err(TreeError::InvalidParameter(format!(
                "the criterion must be either 'gain-ratio' or 'information-gain', got '{}'",
                other
            ))),
        }
    }
}

impl Display for SplitCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GainRatio => f.write_str("gain-ratio"),
            Self::InformationGain => f.write_str("information-gain"),
        }
    }
}

/// How a leaf picks its decision label from the class values that reach it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeafLabel {
    /// The first class value met in the leaf's rows.
    #[default]
    FirstObserved,
    /// The most frequent class value, ties going to the one met first.
    Majority,
}

impl FromStr for LeafLabel {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-observed" => Ok(Self::FirstObserved),
            "majority" => Ok(Self::Majority),
            other => Err(TreeError::InvalidParameter(format!(
                "the leaf label must be either 'first-observed' or 'majority', got '{}'",
                other
            ))),
        }
    }
}

impl Display for LeafLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstObserved => f.write_str("first-observed"),
            Self::Majority => f.write_str("majority"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeParams {
    pub criterion: SplitCriterion,
    pub leaf_label: LeafLabel,
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            criterion: SplitCriterion::GainRatio,
            leaf_label: LeafLabel::FirstObserved,
        }
    }

    pub fn set_criterion(&mut self, criterion: &str) -> Result<(), TreeError> {
        self.criterion = criterion.parse()?;
        Ok(())
    }

    pub fn set_leaf_label(&mut self, leaf_label: &str) -> Result<(), TreeError> {
        self.leaf_label = leaf_label.parse()?;
        Ok(())
    }

    pub fn criterion(&self) -> SplitCriterion {
        self.criterion
    }

    pub fn leaf_label(&self) -> LeafLabel {
        self.leaf_label
    }
}
