//! Per-dialect adapters between raw text and an ordered value tree.

use anyhow::{Context, Result};
use serde_yaml::Value;

/// Load/save capability for one configuration dialect.
pub trait DocumentAdapter {
    fn name(&self) -> &'static str;

    fn parse(&self, text: &str) -> Result<Value>;

    fn render(&self, value: &Value) -> Result<String>;
}

pub struct YamlAdapter;

impl DocumentAdapter for YamlAdapter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        serde_yaml::from_str(text).context("Invalid YAML syntax")
    }

    fn render(&self, value: &Value) -> Result<String> {
        serde_yaml::to_string(value).context("Failed to serialize YAML")
    }
}

pub struct TomlAdapter;

impl DocumentAdapter for TomlAdapter {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        toml::from_str(text).context("Invalid TOML syntax")
    }

    fn render(&self, value: &Value) -> Result<String> {
        // TOML has no null; fail here rather than write a lossy document.
        toml::to_string_pretty(value).context("Failed to serialize TOML")
    }
}

pub struct JsonAdapter;

impl DocumentAdapter for JsonAdapter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        serde_json::from_str(text).context("Invalid JSON syntax")
    }

    fn render(&self, value: &Value) -> Result<String> {
        let mut out = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
        out.push('\n');
        Ok(out)
    }
}
