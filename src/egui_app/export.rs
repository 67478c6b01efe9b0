//! Persists the rendered view as a PNG image.

use std::path::Path;

use egui::ColorImage;

/// Errors that may occur while writing the rendered view to disk.
#[derive(Debug, thiserror::Error)]
pub enum ViewExportError {
    /// The captured framebuffer did not match its reported dimensions.
    #[error("Screenshot buffer did not match its reported {width}x{height} size")]
    BufferSize {
        width: u32,
        height: u32,
    },
    /// Encoding or writing the image failed.
    #[error("Failed to write image: {0}")]
    Write(#[from] image::ImageError),
}

/// Write a captured frame to `path` as PNG.
pub fn write_png(frame: &ColorImage, path: &Path) -> Result<(), ViewExportError> {
    let [width, height] = frame.size;
    let mut rgba = Vec::with_capacity(width * height * 4);
    for pixel in &frame.pixels {
        rgba.extend_from_slice(&pixel.to_array());
    }
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, rgba).ok_or(
        ViewExportError::BufferSize {
            width: width as u32,
            height: height as u32,
        },
    )?;
    buffer.save(path)?;
    Ok(())
}
