//! Configuration loader for tohtml.
//!
//! `defaults/tohtml.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ToHtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tohtml_render::markdown::MarkdownOptions;
use tohtml_render::{IdScheme, PageOptions};

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/tohtml.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ToHtmlConfig {
    pub page: PageConfig,
    pub toc: TocConfig,
    pub markdown: MarkdownConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub lang: String,
}

/// Table of contents and scroll-sync behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct TocConfig {
    pub interactive: bool,
    pub scroll_offset: u32,
    pub ids: IdScheme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub front_matter: bool,
    pub sourcepos: bool,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            front_matter: config.front_matter,
            sourcepos: config.sourcepos,
        }
    }
}

impl From<&ToHtmlConfig> for PageOptions {
    fn from(config: &ToHtmlConfig) -> Self {
        PageOptions {
            title: config.page.title.clone(),
            lang: config.page.lang.clone(),
            interactive: config.toc.interactive,
            scroll_offset: config.toc.scroll_offset,
            id_scheme: config.toc.ids,
            markdown: (&config.markdown).into(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (e.g. from a CLI flag).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ToHtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ToHtmlConfig, ConfigError> {
    Loader::new().build()
}
