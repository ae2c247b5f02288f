use anyhow::{bail, Context, Result};
use clap::Parser;
use rusty_c45::data::reader::DatasetReader;
use rusty_c45::metrics::confusion::ClassificationMetrics;
use rusty_c45::trees::classifier::DecisionTreeClassifier;
use rusty_c45::trees::params::{LeafLabel, SplitCriterion};
use rusty_c45::trees::report::OutlineReporter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Grow a decision tree from a delimited text file and print it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File with one record per line, the class value last.
    path: PathBuf,

    /// Field delimiter.
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Treat the first line as attribute names.
    #[arg(long)]
    has_headers: bool,

    /// Attribute ranking: gain-ratio or information-gain.
    #[arg(long, default_value_t = SplitCriterion::GainRatio)]
    criterion: SplitCriterion,

    /// Leaf label policy: first-observed or majority.
    #[arg(long, default_value_t = LeafLabel::FirstObserved)]
    leaf_label: LeafLabel,

    /// Print the accuracy of the tree on its own training records.
    #[arg(long)]
    evaluate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.delimiter.is_ascii() {
        bail!("the delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }

    let loaded = DatasetReader::new()
        .delimiter(args.delimiter as u8)
        .has_headers(args.has_headers)
        .from_path(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let mut classifier =
        DecisionTreeClassifier::with_params(Some(args.criterion), Some(args.leaf_label));
    classifier
        .fit(&loaded.dataset)
        .context("failed to grow the decision tree")?;

    let mut reporter = match loaded.header {
        Some(names) => OutlineReporter::with_attribute_names(names),
        None => OutlineReporter::new(),
    };
    classifier.report(&mut reporter)?;
    print!("{}", reporter.output());

    if args.evaluate {
        let predictions = classifier.predict(&loaded.dataset.features())?;
        let accuracy = classifier.accuracy(&loaded.dataset.labels(), &predictions)?;
        println!("Training accuracy: {:.2}%", accuracy * 100.0);
    }

    Ok(())
}
