/// Image file handling
///
/// This module handles:
/// - Encoding image files into text payloads for the database
/// - Decoding and downsizing images for the on-screen preview

pub mod payload;
pub mod preview;

/// Extensions offered by the image picker
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff"];
