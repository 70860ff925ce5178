//! Error adapter for converting InfographizeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use infographize::InfographizeError;

/// Marker printed in front of renderer failures.
pub const RENDER_FAILURE_MARKER: &str = "❌";

/// Adapter giving [`InfographizeError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a InfographizeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            InfographizeError::Read { .. } => "infographize::read",
            InfographizeError::CreateDir { .. } => "infographize::create_dir",
            InfographizeError::Write { .. } => "infographize::write",
            InfographizeError::Render(_) => "infographize::render",
            InfographizeError::Config(_) => "infographize::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            InfographizeError::Read { .. } => {
                "check that the syntax file exists and is readable"
            }
            InfographizeError::CreateDir { .. } | InfographizeError::Write { .. } => {
                "check that the output location is writable"
            }
            InfographizeError::Render(_) => {
                "check the infographic syntax and that the renderer runtime can load @antv/infographic"
            }
            InfographizeError::Config(_) => {
                "fix the configuration file or pass a different one with --config"
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Single-line report for renderer failures, `None` for every other error.
pub fn render_failure_line(err: &InfographizeError) -> Option<String> {
    match err {
        InfographizeError::Render(render_err) => {
            let message = render_err.to_string();
            let message = message
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("; ");
            Some(format!("{RENDER_FAILURE_MARKER} Render failed: {message}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use infographize::RenderError;

    use super::*;

    #[test]
    fn test_render_failure_line() {
        let err = InfographizeError::from(RenderError::Message(
            "Unknown template: bogus".to_string(),
        ));

        assert_eq!(
            render_failure_line(&err).unwrap(),
            "❌ Render failed: Unknown template: bogus"
        );
    }

    #[test]
    fn test_multi_line_message_is_one_line() {
        let err = InfographizeError::from(RenderError::Message(
            "Invalid data\n  expected items\n".to_string(),
        ));

        let line = render_failure_line(&err).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(line, "❌ Render failed: Invalid data; expected items");
    }

    #[test]
    fn test_non_render_has_no_line() {
        let err = InfographizeError::Config("bad".to_string());
        assert!(render_failure_line(&err).is_none());
    }

    #[test]
    fn test_codes() {
        let read = InfographizeError::Read {
            path: PathBuf::from("chart.antv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let write = InfographizeError::Write {
            path: PathBuf::from("out/chart.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            ErrorAdapter(&read).code().unwrap().to_string(),
            "infographize::read"
        );
        assert_eq!(
            ErrorAdapter(&write).code().unwrap().to_string(),
            "infographize::write"
        );
        assert!(ErrorAdapter(&write).help().is_some());
    }

    #[test]
    fn test_display_passes_through() {
        let err = InfographizeError::Config("Missing configuration file: x.toml".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Configuration error: Missing configuration file: x.toml"
        );
    }
}
