//! Output naming, encoding and sinks

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where encoded images go
pub trait OutputSink {
    /// Persist `bytes` at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes could not be stored
    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// Writes to the filesystem, creating missing parent directories
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write image: {}", path.display()))
    }
}

/// Keeps every write in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub writes: Vec<(PathBuf, Vec<u8>)>,
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.writes.push((path.to_path_buf(), bytes.to_vec()));
        Ok(())
    }
}

/// `<dir>/image_<epoch>.png`, or `<dir>/image_<epoch>_<tag>.png` when tagged
#[must_use]
pub fn output_path(dir: &Path, epoch_secs: u64, tag: Option<&str>) -> PathBuf {
    let name = match tag {
        Some(tag) => format!("image_{epoch_secs}_{tag}.png"),
        None => format!("image_{epoch_secs}.png"),
    };
    dir.join(name)
}

/// Seconds since the Unix epoch, from the wall clock
///
/// # Errors
///
/// Returns an error if the system clock is set before 1970
pub fn unix_timestamp() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .context("System clock is before the Unix epoch")
}

/// Encode an RGB raster as PNG
///
/// # Errors
///
/// Returns an error if encoding fails
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf.into_inner())
}
