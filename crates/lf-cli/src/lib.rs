//! LogFlow command-line analyzer.
//!
//! Wires argument parsing, configuration, logging, the parser and reporter
//! registries, and the parse → analyze → report pipeline.

pub mod args;
pub mod config;
pub mod logging;
pub mod pipeline;
