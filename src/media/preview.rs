/// On-screen preview of the image being labelled
use std::path::Path;

use crate::error::Result;

/// Default bounding box for previews (square)
pub const DEFAULT_PREVIEW_SIZE: u32 = 400;

/// A decoded, downsized image ready to hand to the UI
#[derive(Debug, Clone)]
pub struct Preview {
    /// Filename only, used as the label's image name
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub rgba: Vec<u8>,
}

/// Decode an image file and shrink it to fit a `max_side` square
///
/// Fails with a decode error for formats the `image` crate cannot read.
/// Images already smaller than the box are left at their size.
pub fn load_preview(path: &Path, max_side: u32) -> Result<Preview> {
    let img = image::open(path)?;

    let img = if img.width() > max_side || img.height() > max_side {
        img.thumbnail(max_side, max_side)
    } else {
        img
    };
    let rgba = img.to_rgba8();

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    tracing::debug!(
        "Decoded preview {} at {}x{}",
        file_name,
        rgba.width(),
        rgba.height()
    );

    Ok(Preview {
        file_name,
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
