//! Data model for scaffold runs.
//!
//! - [`Manifest`]: ordered list of [`ManifestEntry`] values, each a directory or
//!   a file with verbatim content, relative to a project root.
//! - [`Report`]: the per-entry [`Outcome`] of a run, in manifest order.

mod entry;
mod report;

pub use entry::*;
pub use report::*;
