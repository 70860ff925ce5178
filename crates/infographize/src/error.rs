//! Error types for infographic rendering.
//!
//! This module provides the main error type [`InfographizeError`] which wraps
//! the failures that can end a rendering run.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::render::RenderError;

/// The main error type for infographize operations.
///
/// File system variants carry the path that was being accessed so the
/// diagnostic names the failing file.
#[derive(Debug, Error)]
pub enum InfographizeError {
    #[error("Failed to read syntax file {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to create output directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write output file {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfographizeError {
    /// Returns `true` if the error came from the external renderer.
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = InfographizeError::Read {
            path: PathBuf::from("missing/chart.antv"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        // The io error is reported once, as the source
        let message = err.to_string();
        assert_eq!(message, "Failed to read syntax file missing/chart.antv");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "No such file or directory");
        assert!(!err.is_render());
    }

    #[test]
    fn test_render_error_is_render() {
        let err = InfographizeError::from(RenderError::EmptyOutput);
        assert!(err.is_render());
        assert_eq!(err.to_string(), "Render failed: renderer produced no output");
    }
}
