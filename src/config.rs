//! Localizer settings, loadable from a TOML file.
use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::locate::DEFAULT_LOCALES_DIR;

/// How found values are written into marked elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentPolicy {
    /// Locale files are same-origin and trusted, values are inserted as markup.
    #[default]
    TrustedMarkup,
    /// Values are inserted as plain text.
    Escape,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locales_dir: String,
    /// Chosen when the browser preference starts with it; first half of the toggle cycle.
    pub primary_language: String,
    /// Fallback default and second half of the toggle cycle.
    pub secondary_language: String,
    pub storage_key: String,
    pub missing_log_limit: usize,
    pub active_classes: Vec<String>,
    pub content_policy: ContentPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: DEFAULT_LOCALES_DIR.to_string(),
            primary_language: "en".into(),
            secondary_language: "id".into(),
            storage_key: "lang".into(),
            missing_log_limit: 50,
            active_classes: vec!["bg-primary".into(), "text-dark".into()],
            content_policy: ContentPolicy::TrustedMarkup,
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("parse localizer config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Default language for a reported preference such as `en-US`.
    pub fn default_language(&self, preference: Option<&str>) -> String {
        match preference {
            Some(p) if p.starts_with(self.primary_language.as_str()) => self.primary_language.clone(),
            _ => self.secondary_language.clone(),
        }
    }

    /// Two-language cycle: primary -> secondary, anything else -> primary.
    pub fn next_language(&self, current: &str) -> String {
        if current == self.primary_language { self.secondary_language.clone() } else { self.primary_language.clone() }
    }
}
