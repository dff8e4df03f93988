// file: src/stats/mod.rs
// description: descriptive statistics over the whole collection
// reference: internal module structure

pub mod aggregator;

pub use aggregator::{CategoryBreakdown, FrequencyTable, StatsAggregator, StatsReport};
