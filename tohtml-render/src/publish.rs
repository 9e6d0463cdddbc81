//! Page publishing.
//!
//! One call that renders a Markdown source into a page and either hands back the
//! HTML or writes it to disk. Rendering always completes in memory first, so a
//! failed build never leaves a partial file behind.

use crate::error::BuildError;
use crate::html::{render_page, PageOptions};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a page.
///
/// ```ignore
/// let spec = PageSpec::new(&markdown, options).with_output_path("out.html");
/// ```
#[derive(Debug)]
pub struct PageSpec<'a> {
    /// Raw Markdown, before entity unescaping
    pub markdown: &'a str,
    pub options: PageOptions,
    /// When set, the page is written here instead of returned
    pub output: Option<PathBuf>,
}

impl<'a> PageSpec<'a> {
    pub fn new(markdown: &'a str, options: PageOptions) -> Self {
        Self {
            markdown,
            options,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Where a published page ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Render and deliver one page.
///
/// # Errors
///
/// Returns [`BuildError`] if rendering, script data encoding or the file write
/// fails. Nothing is written unless rendering succeeded.
pub fn publish(spec: PageSpec<'_>) -> Result<PublishResult, BuildError> {
    let html = render_page(spec.markdown, &spec.options)?;

    let artifact = match spec.output {
        Some(path) => {
            fs::write(&path, html.as_bytes())?;
            info!("wrote {} bytes to {}", html.len(), path.display());
            PublishArtifact::File(path)
        }
        None => {
            info!("rendered {} bytes", html.len());
            PublishArtifact::InMemory(html)
        }
    };

    Ok(PublishResult { artifact })
}
