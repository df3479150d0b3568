use crate::config::RenderConfig;
use crate::integrity::IntegrityWarning;
use crate::types::PlateSummary;
use std::path::Path;

pub fn print_summary(summary: &PlateSummary, config: &RenderConfig) {
    println!("{:20}: {}", "Plate", summary.size);
    println!("{:20}: {}", "Max Value", summary.max_value);
    println!("{:20}: {:.9}", "Sample Sum", summary.sum);
    println!("{:20}: {}", "Empty Cells", summary.empty_cells);
    println!("{:20}: {}", "Colormap", config.colormap);
    println!("{:20}: {}x{} [{:?}]", "Output", config.window, config.window, config.filter);
}

pub fn print_outcome(path: &Path, warning: Option<&IntegrityWarning>) {
    println!("{:20}: {}", "Saved", path.display());
    if let Some(w) = warning {
        println!("{:20}: {}", "Checksum", w);
    }
    println!();
}
