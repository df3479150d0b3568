use crate::config::{DEFAULT_PLATE, RenderConfig};
use crate::image::{Colormap, ResizeFilter};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Render attenuation plates as false-color images
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Plate file(s) to render
    #[arg(value_name = "FILE", default_value = DEFAULT_PLATE)]
    pub files: Vec<PathBuf>,

    /// Directory for rendered images
    #[arg(short, long, default_value = "./Images")]
    pub output_dir: PathBuf,

    /// Color mapping
    #[arg(short, long, value_enum)]
    pub mode: Option<Colormap>,

    /// Plate side length in samples
    #[arg(short = 's', long)]
    pub grid_size: Option<u32>,

    /// Output image side length in pixels
    #[arg(long)]
    pub window: Option<u32>,

    /// Resampling filter for the output image
    #[arg(long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// Expected sample sum; enables the checksum warning for any run
    #[arg(long, conflicts_with = "no_checksum")]
    pub checksum: Option<f64>,

    /// Allowed difference between the sample sum and the expected checksum
    #[arg(long, default_value_t = 0.0)]
    pub checksum_tolerance: f64,

    /// Never warn about checksum mismatches
    #[arg(long)]
    pub no_checksum: bool,

    /// Save only, do not show the image in the terminal
    #[arg(long)]
    pub no_display: bool,

    /// Display width in terminal columns
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Display height in terminal rows
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Show plate summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Invoked without any argument
    #[arg(skip)]
    pub bare_run: bool,
}

impl Args {
    /// Parse the process arguments, exiting with usage on error
    #[must_use]
    pub fn from_env() -> Self {
        Self::try_from_argv(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `argv` (program name first), recording whether it carried any argument
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments, `--help` and `--version`
    pub fn try_from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut args = Self::try_parse_from(argv.iter().cloned())?;
        args.bare_run = argv.len() <= 1;
        Ok(args)
    }

    /// The checksum only guards the canonical run
    ///
    /// It is active when the program was started without arguments, or
    /// when `--checksum` names an expected sum. Any other argument
    /// suppresses it, and `--no-checksum` always disables it.
    #[must_use]
    pub fn strict_checksum(&self) -> bool {
        if self.no_checksum {
            return false;
        }
        self.checksum.is_some() || self.bare_run
    }

    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            grid_size: self.grid_size.unwrap_or(defaults.grid_size),
            window: self.window.unwrap_or(defaults.window),
            colormap: self.mode.unwrap_or(defaults.colormap),
            filter: self.filter.unwrap_or(defaults.filter),
            expected_checksum: self.checksum.unwrap_or(defaults.expected_checksum),
            checksum_tolerance: self.checksum_tolerance,
            strict_checksum: self.strict_checksum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_from_argv(std::iter::once("tracemap").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_bare_run_is_canonical() {
        let args = parse(&[]);
        let config = args.render_config();

        assert!(args.bare_run);
        assert_eq!(args.files, vec![PathBuf::from(DEFAULT_PLATE)]);
        assert_eq!(config, RenderConfig::default());
        assert!(config.strict_checksum);
        assert_eq!(args.output_dir, PathBuf::from("./Images"));
        assert!(!args.no_display);
    }

    #[test]
    fn test_any_argument_suppresses_checksum() {
        for argv in [
            &["Data/savedPlate"][..],
            &["-o", "x", "plate"],
            &["-v"],
            &["--no-display"],
            &["-W", "40"],
            &["--mode", "grayscale", "plate"],
        ] {
            let args = parse(argv);
            assert!(!args.bare_run, "{argv:?}");
            assert!(!args.render_config().strict_checksum, "{argv:?}");
        }
    }

    #[test]
    fn test_explicit_checksum_reenables_check() {
        let args = parse(&["-s", "10", "--checksum", "42.5", "plate"]);
        let config = args.render_config();

        assert_eq!(config.grid_size, 10);
        assert_eq!(config.expected_checksum, 42.5);
        assert!(config.strict_checksum);
    }

    #[test]
    fn test_no_checksum() {
        assert!(!parse(&["--no-checksum", "plate"]).strict_checksum());
        assert!(Args::try_from_argv(["tracemap", "--no-checksum", "--checksum", "1", "p"]).is_err());
    }

    #[test]
    fn test_value_enums() {
        let args = parse(&["-m", "false-color-high", "--filter", "lanczos3", "--window", "300"]);
        let config = args.render_config();

        assert_eq!(config.colormap, Colormap::FalseColorHighFreq);
        assert_eq!(config.filter, ResizeFilter::Lanczos3);
        assert_eq!(config.window, 300);
        assert_eq!(args.files, vec![PathBuf::from(DEFAULT_PLATE)]);
    }
}
