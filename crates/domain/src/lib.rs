//! # Domain
//!
//! Pure logic of the three utilities, free of I/O:
//!
//! - [`parsing`]: tolerant parsers producing [`model::ParsedValue`]
//! - [`radix`]: binary / hexadecimal conversion with two's-complement fields
//! - [`analytics`]: statistics, conversion table and word frequencies

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
pub mod parsing;
pub mod radix;
