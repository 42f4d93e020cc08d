//! Snapshot export: persists the canvas drawing region to an image file.
//!
//! Saving is fire-and-forget from the interaction loop's point of view: the
//! region is read back synchronously, written under a timestamp-derived
//! name, and any failure is reported through the returned error without
//! touching drawing state.

use crate::draw::Canvas;
use crate::util::Rect;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while saving a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to prepare snapshot directory: {0}")]
    Directory(#[source] std::io::Error),

    #[error("failed to encode snapshot image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("snapshot region is empty")]
    EmptyRegion,
}

/// Configuration for snapshot saving.
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Directory snapshots are written to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Paintboard"),
            template: "board_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Generates a filename from the template and the current local time.
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    format!("{}.{}", now.format(template), format)
}

/// Ensures the save directory exists, creating it if necessary.
fn ensure_directory_exists(directory: &Path) -> Result<(), SnapshotError> {
    if !directory.exists() {
        log::info!("creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(SnapshotError::Directory)?;
    }
    Ok(())
}

/// Saves a canvas region to a timestamped image file.
///
/// # Arguments
/// * `canvas` - Source pixel buffer
/// * `region` - Region to persist (the drawing area below the toolbar band)
/// * `config` - Destination directory, filename template, and format
///
/// # Returns
/// The path of the written file.
pub fn save_region(
    canvas: &Canvas,
    region: Rect,
    config: &SaveConfig,
) -> Result<PathBuf, SnapshotError> {
    let image = canvas.read_region(region);
    if image.width() == 0 || image.height() == 0 {
        return Err(SnapshotError::EmptyRegion);
    }

    ensure_directory_exists(&config.directory)?;

    let filename = generate_filename(&config.template, &config.format);
    let path = config.directory.join(filename);

    log::info!(
        "saving {}x{} snapshot to {}",
        image.width(),
        image.height(),
        path.display()
    );
    image.save(&path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BACKGROUND, Color};
    use tempfile::TempDir;

    #[test]
    fn generated_filename_carries_timestamp_and_extension() {
        let filename = generate_filename("board_%Y%m%d", "png");
        assert!(filename.starts_with("board_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("20"));
    }

    #[test]
    fn save_writes_a_decodable_image_of_the_region() {
        let temp = TempDir::new().unwrap();
        let config = SaveConfig {
            directory: temp.path().join("snaps"),
            template: "test_%s".to_string(),
            format: "png".to_string(),
        };

        let mut canvas = Canvas::new(100, 100, BACKGROUND);
        canvas.fill_rect(Rect::new(0, 40, 100, 60), Color::new(255, 0, 0));

        let path = save_region(&canvas, Rect::new(0, 40, 100, 60), &config).unwrap();
        assert!(path.exists());

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (100, 60));
        assert_eq!(written.get_pixel(50, 30).0, [255, 0, 0]);
    }

    #[test]
    fn empty_region_is_rejected_without_touching_disk() {
        let temp = TempDir::new().unwrap();
        let config = SaveConfig {
            directory: temp.path().join("snaps"),
            ..SaveConfig::default()
        };
        let canvas = Canvas::new(10, 10, BACKGROUND);

        let result = save_region(&canvas, Rect::new(50, 50, 10, 10), &config);
        assert!(matches!(result, Err(SnapshotError::EmptyRegion)));
        assert!(!config.directory.exists());
    }
}
