use image::DynamicImage;
use tracemap::cli::Args;
use tracemap::display;
use tracemap::output::{self, FileSink};
use tracemap::pipeline::{self, ProcessError};
use tracing_subscriber::{Layer as _, layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() {
    let args = Args::from_env();

    if let Err(e) = setup_logging() {
        eprintln!("Failed to set up logging: {e}");
    }

    let epoch_secs = match output::unix_timestamp() {
        Ok(secs) => secs,
        Err(e) => {
            println!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        if let Err(e) = process_file(file_path, &args, epoch_secs) {
            if args.verbose
                && let Some(summary) = e.summary()
            {
                tracemap::print_summary(summary, &args.render_config());
            }
            println!("Error: {e}");
            any_failed = true;
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

/// Render a single plate file
fn process_file(file_path: &std::path::Path, args: &Args, epoch_secs: u64) -> Result<(), ProcessError> {
    let config = args.render_config();

    // Batch runs share one timestamp, so tag each image with its source
    let tag = if args.files.len() > 1 {
        file_path.file_stem().and_then(|s| s.to_str())
    } else {
        None
    };

    // Stages 1-3: load, render, save
    let outcome = pipeline::run(
        file_path,
        &config,
        &args.output_dir,
        epoch_secs,
        tag,
        &mut FileSink,
    )?;

    if args.verbose {
        tracemap::print_summary(&outcome.rendered.summary, &config);
        tracemap::print_outcome(&outcome.path, outcome.rendered.warning.as_ref());
    }

    // Stage 4: Display
    if !args.no_display {
        let summary = outcome.rendered.summary;
        let image = DynamicImage::ImageRgb8(outcome.rendered.output);
        display::print_image(&image, args).map_err(|e| ProcessError::DisplayFailed {
            summary,
            error: format!("{e:#}"),
        })?;
    }

    Ok(())
}

/// Setup logging.
fn setup_logging() -> anyhow::Result<()> {
    let filters = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("info".parse()?)
        .from_env_lossy();
    // stdout belongs to the terminal image
    let filter_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filters);
    let tracing_setup = tracing_subscriber::registry().with(filter_layer);
    tracing_setup.try_init()?;

    Ok(())
}
