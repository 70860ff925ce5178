//! Command-line argument definitions for the infographize CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the preview step,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for rendering AntV infographics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the infographic syntax file
    #[arg(value_name = "SYNTAX_FILE")]
    pub input: String,

    /// Path to the output SVG file; parent directories are created as needed
    #[arg(value_name = "OUTPUT_SVG")]
    pub output: String,

    /// Open the rendered SVG in an editor after writing it
    #[arg(long)]
    pub preview: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_positionals_and_preview() {
        let args =
            Args::try_parse_from(["infographize", "chart.antv", "out/chart.svg", "--preview"])
                .unwrap();

        assert_eq!(args.input, "chart.antv");
        assert_eq!(args.output, "out/chart.svg");
        assert!(args.preview);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_preview_flag_position_is_free() {
        let args =
            Args::try_parse_from(["infographize", "--preview", "chart.antv", "chart.svg"]).unwrap();
        assert!(args.preview);
        assert_eq!(args.output, "chart.svg");
    }

    #[test]
    fn test_preview_defaults_off() {
        let args = Args::try_parse_from(["infographize", "chart.antv", "chart.svg"]).unwrap();
        assert!(!args.preview);
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        let err = Args::try_parse_from(["infographize", "chart.antv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_both_is_usage_error() {
        let err = Args::try_parse_from(["infographize"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["infographize", "chart.antv", "chart.svg", "--watch"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
