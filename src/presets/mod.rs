//! Built-in NeonMint manifests.
//!
//! Each preset is a complete, declarative [`Manifest`]. Presets differ only in
//! their payloads; the directory skeleton and shared content come from
//! [`common`].

mod classic;
pub mod common;
mod tailwind;

use serde::{Deserialize, Serialize};

use crate::models::Manifest;
use crate::scaffold::ScaffoldError;

/// A named built-in manifest.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Tailwind CSS v4 through the Vite plugin
    #[default]
    Tailwind,
    /// Plain CSS, no Tailwind
    Classic,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[Self::Tailwind, Self::Classic]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Classic => "classic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Tailwind => "NeonMint with Tailwind CSS v4 integration",
            Self::Classic => "NeonMint with plain global CSS",
        }
    }

    /// Build the preset's manifest.
    pub fn manifest(&self) -> Result<Manifest, ScaffoldError> {
        match self {
            Self::Tailwind => tailwind::manifest(),
            Self::Classic => classic::manifest(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
