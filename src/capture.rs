//! Image file ingestion for the Solve section.
//!
//! Self-contained device-capture boundary: reads a photographed problem from
//! a file path, validates that it is a JPEG or PNG, and produces the base64
//! transport encoding plus a displayable preview descriptor. No coupling to
//! networking or application state.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::GenericImageView;

use crate::error::CaptureError;

/// Maximum raw image size in bytes (4 MB).
const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// An image loaded from disk, ready for transport.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// File name shown in the preview (not the full path).
    pub file_name: String,
    /// `image/jpeg` or `image/png`.
    pub mime_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
    /// Pixel dimensions, for the preview descriptor.
    pub width: u32,
    pub height: u32,
}

impl CapturedImage {
    /// Base64 transport encoding of the raw bytes.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// Displayable stand-in for an inline preview.
    pub fn preview(&self) -> ImagePreview {
        ImagePreview {
            file_name: self.file_name.clone(),
            byte_len: self.data.len(),
            width: self.width,
            height: self.height,
        }
    }
}

/// What the terminal shows instead of the image itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub file_name: String,
    pub byte_len: usize,
    pub width: u32,
    pub height: u32,
}

impl ImagePreview {
    /// One-line summary, e.g. `problem.jpg (231 KB, 1024x768)`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {}x{})",
            self.file_name,
            format_bytes(self.byte_len),
            self.width,
            self.height
        )
    }
}

/// Read and validate an image file for submission.
pub fn load_image(path: &Path) -> Result<CapturedImage, CaptureError> {
    let data = std::fs::read(path).map_err(|source| CaptureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if data.len() > MAX_IMAGE_BYTES {
        return Err(CaptureError::TooLarge {
            path: path.to_path_buf(),
            size: data.len(),
            limit: MAX_IMAGE_BYTES,
        });
    }

    let format = image::guess_format(&data).map_err(|e| CaptureError::NotAnImage {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mime_type = match format {
        image::ImageFormat::Jpeg => "image/jpeg",
        image::ImageFormat::Png => "image/png",
        _ => {
            return Err(CaptureError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let (width, height) = image::load_from_memory(&data)
        .map_err(|e| CaptureError::NotAnImage {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .dimensions();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(CapturedImage {
        file_name,
        mime_type: mime_type.to_string(),
        data,
        width,
        height,
    })
}

fn format_bytes(len: usize) -> String {
    if len >= 1024 * 1024 {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    } else if len >= 1024 {
        format!("{} KB", len / 1024)
    } else {
        format!("{} B", len)
    }
}
