//! Attribute scoring: information, gain, split information and gain ratio.
use super::params::SplitCriterion;
use crate::data::dataset::Dataset;
use crate::metrics::statistics::{self, entropy, probability_vector, OccurrenceMap};
use indexmap::IndexMap;
use nalgebra::DVector;

/// Every score computed for the predictor attributes of one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeScores {
    pub class_entropy: f64,
    pub information: DVector<f64>,
    pub gain: DVector<f64>,
    pub split_information: DVector<f64>,
    pub gain_ratio: DVector<f64>,
}

impl AttributeScores {
    /// Scores all predictor attributes of `dataset`.
    ///
    /// `occurrences` must have been counted on the same dataset.
    pub fn evaluate(dataset: &Dataset, occurrences: &[OccurrenceMap]) -> Self {
        let probabilities = statistics::probabilities(occurrences);

        let class_entropy = class_entropy(dataset);
        let information = information(dataset, occurrences);
        let gain = gain(class_entropy, &information);
        let split_information = split_information(&probabilities);
        let gain_ratio = gain_ratio(&gain, &split_information);

        Self {
            class_entropy,
            information,
            gain,
            split_information,
            gain_ratio,
        }
    }

    /// The score vector attributes are ranked by under `criterion`.
    pub fn ranking(&self, criterion: SplitCriterion) -> &DVector<f64> {
        match criterion {
            SplitCriterion::GainRatio => &self.gain_ratio,
            SplitCriterion::InformationGain => &self.gain,
        }
    }
}

/// Entropy of the class column over the whole dataset.
pub fn class_entropy(dataset: &Dataset) -> f64 {
    entropy(&probability_vector(&statistics::count(dataset.class_column())))
}

/// Expected class entropy after splitting on each predictor attribute.
///
/// For attribute `i` this is the sum over its values `v` of
/// `|D_v| / |D| * H(class | D_v)`, with `D_v` the rows holding `v`. Values are
/// visited in the order of `occurrences[i]`.
pub fn information(dataset: &Dataset, occurrences: &[OccurrenceMap]) -> DVector<f64> {
    let nrows = dataset.nrows() as f64;

    let information: Vec<f64> = occurrences
        .iter()
        .take(dataset.n_attributes())
        .enumerate()
        .map(|(attribute, values)| {
            let class_counts = class_counts_by_value(dataset, attribute);
            values
                .iter()
                .map(|(value, &count)| {
                    class_counts.get(value.as_str()).map_or(0.0, |counts| {
                        count as f64 / nrows * entropy(&probability_vector(counts))
                    })
                })
                .sum()
        })
        .collect();

    DVector::from_vec(information)
}

/// Class occurrences of the rows holding each value of `attribute`.
fn class_counts_by_value(dataset: &Dataset, attribute: usize) -> IndexMap<&str, OccurrenceMap> {
    let class_index = dataset.class_index();
    let mut table: IndexMap<&str, OccurrenceMap> = IndexMap::new();
    for row in 0..dataset.nrows() {
        *table
            .entry(dataset.value(row, attribute))
            .or_default()
            .entry(dataset.value(row, class_index).to_owned())
            .or_insert(0) += 1;
    }
    table
}

pub fn gain(class_entropy: f64, information: &DVector<f64>) -> DVector<f64> {
    information.map(|value| class_entropy - value)
}

/// Entropy of each predictor attribute's own value distribution.
///
/// The last vector belongs to the class column and is skipped.
pub fn split_information(probabilities: &[DVector<f64>]) -> DVector<f64> {
    let predictors = probabilities
        .split_last()
        .map_or(&[][..], |(_, predictors)| predictors);
    DVector::from_iterator(predictors.len(), predictors.iter().map(entropy))
}

/// Gain divided by split information, or 0 where the split information is 0.
pub fn gain_ratio(gain: &DVector<f64>, split_information: &DVector<f64>) -> DVector<f64> {
    gain.zip_map(split_information, |gain, split| {
        if split > 0.0 {
            gain / split
        } else {
            0.0
        }
    })
}

/// Index and value of the highest score. Ties go to the lowest index.
pub fn best_attribute(scores: &DVector<f64>) -> Option<(usize, f64)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (index, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((index, score)),
        })
}
