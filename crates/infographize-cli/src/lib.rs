//! CLI logic for the infographize tool.
//!
//! This module contains the core CLI logic: load configuration, render the
//! syntax file, report the result, and optionally open a preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::Path;

use log::info;

use infographize::{InfographicBuilder, InfographizeError, PreviewLauncher, Rendered, Renderer};

/// What happened to a requested preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStatus {
    /// `--preview` was not given.
    NotRequested,
    /// The editor accepted the file.
    Opened,
    /// The editor could not be launched; the user was told to open the file manually.
    Unavailable,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunReport {
    pub rendered: Rendered,
    pub preview: PreviewStatus,
}

/// Run the infographize CLI application
///
/// Loads configuration, then renders the input file with the configured
/// renderer runtime and editor.
///
/// # Errors
///
/// Returns `InfographizeError` for:
/// - Configuration loading errors
/// - File I/O errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<RunReport, InfographizeError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let builder = InfographicBuilder::from_config(&app_config);
    let launcher = PreviewLauncher::new(app_config.preview().clone());

    run_with(args, &builder, &launcher)
}

/// Run the pipeline with an explicit builder and preview launcher.
///
/// Prints the confirmation line after the SVG is written. Preview failures
/// are reported as a warning and never fail the run.
///
/// # Errors
///
/// Returns `InfographizeError` for file I/O and rendering errors.
pub fn run_with<R: Renderer>(
    args: &Args,
    builder: &InfographicBuilder<R>,
    launcher: &PreviewLauncher,
) -> Result<RunReport, InfographizeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing infographic"
    );

    let rendered = builder.render_file(&args.input, &args.output)?;
    println!("✅ Rendered → {}", args.output);

    let preview = if args.preview {
        open_preview(launcher, &args.output)
    } else {
        PreviewStatus::NotRequested
    };

    Ok(RunReport { rendered, preview })
}

fn open_preview(launcher: &PreviewLauncher, output: &str) -> PreviewStatus {
    match launcher.open(Path::new(output)) {
        Ok(()) => {
            println!("🔍 Opened preview in {}", launcher.editor());
            PreviewStatus::Opened
        }
        Err(err) => {
            info!(err:%; "Preview failed");
            println!("⚠️ Preview unavailable — open manually: {output}");
            PreviewStatus::Unavailable
        }
    }
}
