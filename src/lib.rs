//! Idempotent project scaffolding for NeonMint.
//!
//! A scaffold run walks a [`models::Manifest`] and creates every directory and
//! file it names beneath a project root, skipping anything that already exists.
//! Built-in manifests are exposed as [`presets::Preset`]s.

pub mod config;
pub mod models;
pub mod presets;
pub mod scaffold;
