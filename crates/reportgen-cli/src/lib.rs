//! reportgen library root.
//!
//! Re-exports the binary's modules so that integration tests can drive the
//! pipelines with in-process fakes instead of live services.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
