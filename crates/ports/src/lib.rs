//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: reading the input file as numbered lines
//! - [`diagnostics`]: reporting malformed records without aborting
//! - [`report`]: run summaries, rendering and publishing the final report
//!
//! These ports keep the use cases independent of the console and file system.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod report;
pub mod source;
