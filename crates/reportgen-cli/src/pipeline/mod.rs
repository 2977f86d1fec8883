//! The two report pipelines and the best-effort steps they are built from.
//!
//! Steps never fail: each logs what went wrong and hands back an empty
//! string or `None`, and the pipeline carries on with whatever it has. The
//! only early exit is when content generation produced nothing.

pub mod cloud;
pub mod local;
pub mod steps;
