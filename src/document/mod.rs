//! Documents on disk
//!
//! A `Document` pairs a file path with the adapter for its dialect. The
//! core never touches files; this is the only module that does.

pub mod adapters;

pub use adapters::{DocumentAdapter, JsonAdapter, TomlAdapter, YamlAdapter};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Infer from the file extension, falling back to YAML.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Format::Toml,
            "json" => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn adapter(self) -> Box<dyn DocumentAdapter> {
        match self {
            Format::Yaml => Box::new(YamlAdapter),
            Format::Toml => Box::new(TomlAdapter),
            Format::Json => Box::new(JsonAdapter),
        }
    }
}

pub struct Document {
    path: PathBuf,
    adapter: Box<dyn DocumentAdapter>,
    value: Value,
}

impl Document {
    /// Read and parse `path`. `format` overrides extension inference.
    pub fn load(path: &Path, format: Option<Format>) -> Result<Self> {
        let format = format.unwrap_or_else(|| Format::from_path(path));
        Self::load_with(path, format.adapter())
    }

    pub fn load_with(path: &Path, adapter: Box<dyn DocumentAdapter>) -> Result<Self> {
        tracing::info!("Reading {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed reading document: {}", path.display()))?;

        // Empty files are valid and hold nothing.
        let value = if content.trim().is_empty() {
            Value::Null
        } else {
            adapter.parse(&content).with_context(|| {
                format!("Failed parsing {} document: {}", adapter.name(), path.display())
            })?
        };

        let document = Self { path: path.to_path_buf(), adapter, value };
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(text) = document.render() {
                tracing::debug!("Read data {}:\n{}", document.label(), text);
            }
        }
        Ok(document)
    }

    /// File stem, used to tag log output.
    pub fn label(&self) -> String {
        self.path.file_stem().and_then(|s| s.to_str()).unwrap_or("").to_string()
    }

    pub fn format_name(&self) -> &'static str {
        self.adapter.name()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn take_value(&mut self) -> Value {
        std::mem::take(&mut self.value)
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn render(&self) -> Result<String> {
        self.adapter
            .render(&self.value)
            .with_context(|| format!("Failed rendering document: {}", self.path.display()))
    }

    /// Write back to the path the document was loaded from.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = self.render()?;
        tracing::info!("Writing {}", path.display());
        fs::write(path, &text)
            .with_context(|| format!("Failed writing document: {}", path.display()))?;
        tracing::debug!("Wrote data {}:\n{}", self.label(), text);
        Ok(())
    }
}
