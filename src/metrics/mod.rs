pub mod confusion;
pub mod statistics;
