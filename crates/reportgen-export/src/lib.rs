//! reportgen-export
//!
//! HTML template substitution and PDF rendering to local files.

pub mod error;
pub mod files;
pub mod pdf;
pub mod render;
pub mod report;
