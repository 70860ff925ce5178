//! Renderer abstraction and the server-side renderer subprocess.
//!
//! The layout and SVG emission belong to the `@antv/infographic` package.
//! [`SsrRenderer`] hosts it in a JavaScript runtime child process: the syntax
//! text goes in on stdin and the SVG comes back on stdout.

use std::{
    io::{self, Write},
    process::{Command, ExitStatus, Stdio},
};

use log::{debug, info, trace};
use thiserror::Error;

use crate::config::RendererConfig;

/// Environment variable carrying the module that exports `renderToString`.
pub const SSR_MODULE_ENV: &str = "INFOGRAPHIZE_SSR_MODULE";

/// Environment variable carrying the comma separated preload modules.
pub const PRELOAD_ENV: &str = "INFOGRAPHIZE_PRELOAD";

/// Script evaluated by the runtime.
///
/// Thrown `Error`s are reported by their `message`; any other thrown value
/// is converted with `String(value)`.
const SSR_SCRIPT: &str = r#"
const chunks = [];
for await (const chunk of process.stdin) chunks.push(chunk);
const syntax = Buffer.concat(chunks).toString("utf-8");
try {
  const preload = (process.env.INFOGRAPHIZE_PRELOAD ?? "").split(",").filter(Boolean);
  for (const name of preload) await import(name);
  const { renderToString } = await import(process.env.INFOGRAPHIZE_SSR_MODULE);
  const svg = await renderToString(syntax);
  process.stdout.write(String(svg));
} catch (e) {
  process.stderr.write(e instanceof Error ? e.message : String(e));
  process.exit(1);
}
"#;

/// Errors reported by a [`Renderer`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to start renderer runtime `{runtime}`: {source}")]
    Spawn { runtime: String, source: io::Error },

    #[error("renderer I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Failed { status: ExitStatus, message: String },

    #[error("renderer output is not valid UTF-8")]
    InvalidUtf8,

    #[error("renderer produced no output")]
    EmptyOutput,

    /// Failure raised by an in-process renderer.
    #[error("{0}")]
    Message(String),
}

/// Turns infographic syntax into an SVG document.
pub trait Renderer {
    /// Render `syntax` and return the complete SVG text.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the renderer rejects the syntax or
    /// cannot be run.
    fn render(&self, syntax: &str) -> Result<String, RenderError>;
}

impl<F> Renderer for F
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    fn render(&self, syntax: &str) -> Result<String, RenderError> {
        self(syntax)
    }
}

/// Renderer backed by `renderToString` running in a JavaScript runtime.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
    config: RendererConfig,
}

impl SsrRenderer {
    /// Create a renderer that launches the runtime described by `config`.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(self.config.runtime());
        cmd.args(self.config.runtime_args())
            .arg("-e")
            .arg(SSR_SCRIPT)
            .env(SSR_MODULE_ENV, self.config.ssr_module())
            .env(PRELOAD_ENV, self.config.preload().join(","))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = self.config.working_dir() {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Renderer for SsrRenderer {
    fn render(&self, syntax: &str) -> Result<String, RenderError> {
        info!(runtime = self.config.runtime(); "Starting renderer");

        let mut child = self
            .command()
            .spawn()
            .map_err(|source| RenderError::Spawn {
                runtime: self.config.runtime().to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(syntax.as_bytes()) {
                // The child may exit without reading its input; its status tells why.
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("Renderer closed stdin early");
                }
                result => result?,
            }
        }

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();

        if !output.status.success() {
            let message = if stderr.is_empty() {
                format!("renderer exited with {}", output.status)
            } else {
                single_line(stderr)
            };
            return Err(RenderError::Failed {
                status: output.status,
                message,
            });
        }

        if !stderr.is_empty() {
            debug!(stderr = stderr; "Renderer diagnostics");
        }
        if output.stdout.is_empty() {
            return Err(RenderError::EmptyOutput);
        }

        let svg = String::from_utf8(output.stdout).map_err(|_| RenderError::InvalidUtf8)?;
        trace!(bytes = svg.len(); "Renderer output received");

        Ok(svg)
    }
}

/// Collapse multi-line runtime output (stack traces, multi-line messages)
/// into one line joined with `"; "`.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
