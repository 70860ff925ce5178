//! Configuration types for infographic rendering.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources. Every field has a default, so an empty document is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining renderer and preview settings.
//! - [`RendererConfig`] - Controls how the JavaScript runtime hosting the renderer is started.
//! - [`PreviewConfig`] - Controls which editor opens the rendered file.
//!
//! # Example
//!
//! ```
//! # use infographize::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.renderer().runtime(), "bun");
//! assert_eq!(config.preview().editor(), "code");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default JavaScript runtime used to host the renderer.
pub const DEFAULT_RUNTIME: &str = "bun";

/// Default module exposing `renderToString`.
pub const DEFAULT_SSR_MODULE: &str = "@antv/infographic/ssr";

/// Default module imported for its side effects before rendering.
pub const DEFAULT_PRELOAD_MODULE: &str = "@antv/infographic";

/// Default editor executable used for previews.
pub const DEFAULT_EDITOR: &str = "code";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Renderer configuration section.
    #[serde(default)]
    renderer: RendererConfig,

    /// Preview configuration section.
    #[serde(default)]
    preview: PreviewConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(renderer: RendererConfig, preview: PreviewConfig) -> Self {
        Self { renderer, preview }
    }

    /// Returns the renderer configuration.
    pub fn renderer(&self) -> &RendererConfig {
        &self.renderer
    }

    /// Returns the preview configuration.
    pub fn preview(&self) -> &PreviewConfig {
        &self.preview
    }
}

/// How the renderer subprocess is launched.
///
/// The runtime is invoked as `<runtime> <runtime_args...> -e <script>`.
/// `working_dir` should point at a directory whose `node_modules` contains
/// the renderer package; when unset the child inherits the current directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    runtime: String,
    runtime_args: Vec<String>,
    working_dir: Option<PathBuf>,
    ssr_module: String,
    preload: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            runtime_args: Vec::new(),
            working_dir: None,
            ssr_module: DEFAULT_SSR_MODULE.to_string(),
            preload: vec![DEFAULT_PRELOAD_MODULE.to_string()],
        }
    }
}

impl RendererConfig {
    /// Creates a renderer configuration for the given runtime executable,
    /// keeping the default modules.
    pub fn with_runtime(runtime: impl Into<String>, runtime_args: Vec<String>) -> Self {
        Self {
            runtime: runtime.into(),
            runtime_args,
            ..Self::default()
        }
    }

    /// Sets the working directory of the renderer subprocess.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Returns the runtime executable.
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    /// Returns extra arguments placed before the evaluated script.
    pub fn runtime_args(&self) -> &[String] {
        &self.runtime_args
    }

    /// Returns the working directory of the subprocess, if configured.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Returns the module exporting `renderToString`.
    pub fn ssr_module(&self) -> &str {
        &self.ssr_module
    }

    /// Returns modules imported before the SSR module.
    pub fn preload(&self) -> &[String] {
        &self.preload
    }
}

/// Which editor opens the rendered file.
///
/// The editor is invoked as `<editor> <args...> <output_path>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    editor: String,
    args: Vec<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            args: vec!["--reuse-window".to_string()],
        }
    }
}

impl PreviewConfig {
    /// Creates a preview configuration for the given editor command.
    pub fn new(editor: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            editor: editor.into(),
            args,
        }
    }

    /// Returns the editor executable.
    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// Returns arguments placed before the output path.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
