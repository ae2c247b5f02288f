use super::dataset::Dataset;
use crate::error::TreeError;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// A dataset read from delimited text, with the header row if there was one.
#[derive(Clone, Debug)]
pub struct LoadedDataset {
    pub header: Option<Vec<String>>,
    pub dataset: Dataset,
}

/// Reads delimited text into a `Dataset`, one record per line.
#[derive(Clone, Debug)]
pub struct DatasetReader {
    delimiter: u8,
    has_headers: bool,
    trim: bool,
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            trim: true,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Whether surrounding whitespace is stripped from every value.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadedDataset, TreeError> {
        let reader = self.builder().from_path(path)?;
        self.load(reader)
    }

    pub fn from_reader<R: Read>(&self, rdr: R) -> Result<LoadedDataset, TreeError> {
        self.load(self.builder().from_reader(rdr))
    }

    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(if self.trim { Trim::All } else { Trim::None });
        builder
    }

    fn load<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<LoadedDataset, TreeError> {
        let header = if self.has_headers {
            Some(reader.headers()?.iter().map(str::to_owned).collect())
        } else {
            None
        };

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            rows.push(record.iter().map(str::to_owned).collect::<Vec<_>>());
        }

        let dataset = Dataset::from_rows(rows)?;
        Ok(LoadedDataset { header, dataset })
    }
}
