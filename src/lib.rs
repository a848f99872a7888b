// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod logging;

pub use config::{RunConfig, Tool};
