//! Opening rendered output in an external editor.
//!
//! A preview is a convenience: callers are expected to downgrade every
//! [`PreviewError`] to a warning.

use std::{
    io,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

use log::{debug, info};
use thiserror::Error;

use crate::config::PreviewConfig;

/// Errors from launching the preview editor.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to launch editor `{editor}`: {source}")]
    Spawn { editor: String, source: io::Error },

    #[error("editor `{editor}` exited with {status}")]
    Status { editor: String, status: ExitStatus },
}

/// Launches the configured editor on a file.
#[derive(Debug, Clone, Default)]
pub struct PreviewLauncher {
    config: PreviewConfig,
}

impl PreviewLauncher {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Name of the editor executable, for user-facing messages.
    pub fn editor(&self) -> &str {
        self.config.editor()
    }

    /// Run `<editor> <args...> <path>` and wait for it to return.
    ///
    /// Editors such as `code --reuse-window` hand the file to a running
    /// instance and return immediately.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Spawn`] if the editor cannot be started and
    /// [`PreviewError::Status`] if it exits unsuccessfully.
    pub fn open(&self, path: &Path) -> Result<(), PreviewError> {
        info!(editor = self.editor(), path = path.display().to_string(); "Opening preview");

        let status = Command::new(self.editor())
            .args(self.config.args())
            .arg(path)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| PreviewError::Spawn {
                editor: self.editor().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(PreviewError::Status {
                editor: self.editor().to_string(),
                status,
            });
        }

        debug!("Preview launched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_editor() {
        let launcher = PreviewLauncher::new(PreviewConfig::new(
            "infographize-no-such-editor",
            vec!["--reuse-window".to_string()],
        ));

        let err = launcher.open(Path::new("out.svg")).unwrap_err();
        assert!(matches!(err, PreviewError::Spawn { .. }));
        assert!(err.to_string().contains("infographize-no-such-editor"));
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_receives_path_last() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("opened.txt");
        let script = format!("printf '%s' \"$1\" > '{}'", marker.display());

        let launcher = PreviewLauncher::new(PreviewConfig::new(
            "sh",
            vec!["-c".to_string(), script, "sh".to_string()],
        ));
        launcher.open(Path::new("out/chart.svg")).unwrap();

        assert_eq!(std::fs::read_to_string(marker).unwrap(), "out/chart.svg");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_editor() {
        let launcher = PreviewLauncher::new(PreviewConfig::new("false", Vec::new()));
        let err = launcher.open(Path::new("out.svg")).unwrap_err();
        assert!(matches!(err, PreviewError::Status { .. }));
    }
}
