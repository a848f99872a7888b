//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! Each use case drives one read → parse → aggregate pipeline over the ports:
//!
//! - [`statistics`]: descriptive statistics over numeric lines
//! - [`conversion`]: binary / hexadecimal conversion table
//! - [`word_count`]: word frequencies
//! - [`publish`]: rendering a summary and handing it to every sink
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod conversion;
pub mod publish;
pub mod statistics;
pub mod word_count;

#[cfg(test)]
pub(crate) mod testing;

pub use conversion::ConvertNumbers;
pub use publish::PublishReport;
pub use statistics::ComputeStatistics;
pub use word_count::CountWords;
