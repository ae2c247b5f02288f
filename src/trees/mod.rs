pub mod builder;
pub mod classifier;
pub mod node;
pub mod params;
pub mod report;
pub mod scorer;
