//! reportgen-core
//!
//! Pure domain types and naming conventions for generated reports.
//! No network or process dependency: this is the shared vocabulary of the
//! reportgen pipelines.

pub mod error;
pub mod models;
pub mod output_names;
pub mod redact;
