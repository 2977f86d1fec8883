//! reportgen-google
//!
//! Service-account authentication plus the two hosted-document calls the
//! cloud pipeline needs: inserting text and exporting the document as PDF.

pub mod auth;
pub mod client;
pub mod docs;
pub mod drive;
pub mod error;

pub use client::GoogleClient;
pub use docs::DocumentEditor;
pub use drive::DocumentExporter;
pub use error::GoogleError;
