use crate::data::dataset::Dataset;
use indexmap::IndexMap;
use nalgebra::DVector;

/// Count of every distinct value of one column, in first-appearance order.
pub type OccurrenceMap = IndexMap<String, usize>;

/// Counts how many times each value occurs.
pub fn count<'a, I>(values: I) -> OccurrenceMap
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().fold(IndexMap::new(), |mut acc, value| {
        *acc.entry(value.to_owned()).or_insert(0) += 1;
        acc
    })
}

/// Occurrence map of every column of the dataset, the class column last.
pub fn occurrences(dataset: &Dataset) -> Vec<OccurrenceMap> {
    (0..dataset.ncols())
        .map(|column| count(dataset.column(column)))
        .collect()
}

/// Number of distinct values found in each column.
pub fn distinct_values(occurrences: &[OccurrenceMap]) -> Vec<usize> {
    occurrences.iter().map(IndexMap::len).collect()
}

/// Relative frequency of each value, in the iteration order of `occurrences`.
pub fn probability_vector(occurrences: &OccurrenceMap) -> DVector<f64> {
    let total = occurrences.values().sum::<usize>() as f64;
    DVector::from_iterator(
        occurrences.len(),
        occurrences.values().map(|&count| count as f64 / total),
    )
}

pub fn probabilities(occurrences: &[OccurrenceMap]) -> Vec<DVector<f64>> {
    occurrences.iter().map(probability_vector).collect()
}

/// Shannon entropy in bits. Zero probabilities contribute nothing.
pub fn entropy(probabilities: &DVector<f64>) -> f64 {
    -probabilities
        .iter()
        .filter(|&&p| p != 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}
