//! # Rusty-c45
//!
//! `rusty-c45` induces decision trees from tables of categorical records,
//! choosing splits by information gain ratio in the manner of C4.5.
//! Every record is a row of string values whose last value is the class label.
//!
//! ## Getting Started
//!
//! To use `rusty-c45`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-c45 = "*"
//! ```
//!
//! ## Example Usage
//!
//! Grow a tree and print it as an outline:
//!
//! ```rust
//! use rusty_c45::data::dataset::Dataset;
//! use rusty_c45::trees::builder::build_tree;
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec!["sunny", "yes"],
//!     vec!["sunny", "yes"],
//!     vec!["rainy", "no"],
//!     vec!["rainy", "no"],
//! ])
//! .unwrap();
//!
//! let tree = build_tree(&dataset).unwrap();
//!
//! assert_eq!(tree.predict(&["rainy"]).unwrap(), "no");
//! print!("{}", tree);
//! ```

/// Datasets and delimited-text loading
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Counting, entropy and classification metrics
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::TreeError;
pub use trees::builder::{build_tree, build_tree_with_reporter};
