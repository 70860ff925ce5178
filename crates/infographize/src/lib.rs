//! Infographize - server-side rendering of AntV infographic syntax to SVG.
//!
//! The crate reads an infographic syntax file, hands it to a [`Renderer`]
//! and writes the resulting SVG. Rendering itself is delegated to the
//! `@antv/infographic` package through [`SsrRenderer`].

pub mod config;
pub mod preview;
pub mod render;

mod error;

pub use error::InfographizeError;
pub use preview::{PreviewError, PreviewLauncher};
pub use render::{RenderError, Renderer, SsrRenderer};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, trace};

use config::AppConfig;

/// Result of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    output: PathBuf,
    bytes: usize,
}

impl Rendered {
    /// Path the SVG was written to.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Size of the written SVG in bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

/// Builder for rendering infographic syntax files.
///
/// # Examples
///
/// ```rust,no_run
/// use infographize::{InfographicBuilder, config::AppConfig};
///
/// let builder = InfographicBuilder::from_config(&AppConfig::default());
/// let rendered = builder
///     .render_file("chart.antv", "out/chart.svg")
///     .expect("Failed to render");
///
/// println!("{} bytes", rendered.bytes());
/// ```
///
/// Any [`Renderer`] can be plugged in, including closures:
///
/// ```
/// use infographize::{InfographicBuilder, RenderError};
///
/// let builder = InfographicBuilder::new(|syntax: &str| -> Result<String, RenderError> {
///     Ok(format!("<svg><!-- {syntax} --></svg>"))
/// });
/// assert_eq!(builder.render("bar").unwrap(), "<svg><!-- bar --></svg>");
/// ```
#[derive(Debug, Default)]
pub struct InfographicBuilder<R = SsrRenderer> {
    renderer: R,
}

impl InfographicBuilder<SsrRenderer> {
    /// Create a builder that uses the subprocess renderer described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(SsrRenderer::new(config.renderer().clone()))
    }
}

impl<R: Renderer> InfographicBuilder<R> {
    /// Create a builder around the given renderer.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Read a syntax file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`InfographizeError::Read`] if the file is missing,
    /// unreadable or not valid UTF-8.
    pub fn read(&self, input: impl AsRef<Path>) -> Result<String, InfographizeError> {
        let input = input.as_ref();
        info!(input_path = input.display().to_string(); "Reading syntax file");

        let syntax = fs::read_to_string(input).map_err(|source| InfographizeError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        trace!(bytes = syntax.len(); "Syntax loaded");
        Ok(syntax)
    }

    /// Render syntax text to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`InfographizeError::Render`] if the renderer fails.
    pub fn render(&self, syntax: &str) -> Result<String, InfographizeError> {
        info!("Rendering infographic");
        let svg = self.renderer.render(syntax)?;
        debug!(bytes = svg.len(); "Infographic rendered");
        Ok(svg)
    }

    /// Write an SVG string, creating missing parent directories first.
    ///
    /// Existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`InfographizeError::CreateDir`] or [`InfographizeError::Write`]
    /// on file system failures.
    pub fn write(
        &self,
        output: impl AsRef<Path>,
        svg: &str,
    ) -> Result<Rendered, InfographizeError> {
        let output = output.as_ref();
        prepare_output_dir(output)?;

        fs::write(output, svg).map_err(|source| InfographizeError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!(output_file = output.display().to_string(); "SVG written");
        Ok(Rendered {
            output: output.to_path_buf(),
            bytes: svg.len(),
        })
    }

    /// Read `input`, render it, and write the SVG to `output`.
    ///
    /// Nothing is created on disk unless rendering succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`read`](Self::read),
    /// [`render`](Self::render) or [`write`](Self::write).
    pub fn render_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Rendered, InfographizeError> {
        let syntax = self.read(input)?;
        let svg = self.render(&syntax)?;
        self.write(output, &svg)
    }
}

/// Create every missing directory above `output`.
fn prepare_output_dir(output: &Path) -> Result<(), InfographizeError> {
    let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    debug!(path = parent.display().to_string(); "Ensuring output directory exists");
    fs::create_dir_all(parent).map_err(|source| InfographizeError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_bare_file_name() {
        assert!(prepare_output_dir(Path::new("chart.svg")).is_ok());
    }

    #[test]
    fn test_prepare_nested_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a/b/c/chart.svg");

        prepare_output_dir(&output).unwrap();
        prepare_output_dir(&output).unwrap();

        assert!(dir.path().join("a/b/c").is_dir());
        assert!(!output.exists());
    }

    #[test]
    fn test_prepare_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blocker"), "x").unwrap();

        let err = prepare_output_dir(&dir.path().join("blocker/chart.svg")).unwrap_err();
        assert!(matches!(err, InfographizeError::CreateDir { .. }));
    }
}
