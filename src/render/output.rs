// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of rendered pages

use crate::render::html::render_document;
use crate::render::PageModel;
use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file name's extension.
    pub fn for_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str().and_then(Self::parse)
    }

    pub fn serialize(&self, model: &PageModel) -> Result<String> {
        match self {
            OutputFormat::Html => Ok(render_document(model)),
            // The structured forms expose the resolved model for inspection.
            OutputFormat::Json => Ok(serde_json::to_string_pretty(model)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(model)?),
        }
    }
}
