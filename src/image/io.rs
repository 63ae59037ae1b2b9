//! I/O helpers for grayscale masks and JSON.
//!
//! - `load_mask_u8` / `load_mask_u16`: read a PNG/JPEG/etc. into an owned
//!   grayscale buffer.
//! - `save_mask_u8` / `save_mask_u16`: write an owned buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PlaneBuf;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an 8-bit grayscale buffer.
pub fn load_mask_u8(path: &Path) -> Result<PlaneBuf<u8>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(PlaneBuf::from_vec(width, height, img.into_raw()))
}

/// Load an image from disk and convert to a 16-bit grayscale buffer.
pub fn load_mask_u16(path: &Path) -> Result<PlaneBuf<u16>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma16();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(PlaneBuf::from_vec(width, height, img.into_raw()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_mask_u8(buffer: &PlaneBuf<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a 16-bit grayscale buffer to a PNG.
pub fn save_mask_u16(buffer: &PlaneBuf<u16>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma16(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
