// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image fetching and decoding.
//!
//! This module loads the annotated image from an http(s) URL or a local
//! path and converts it to raw RGBA pixels suitable for display in egui.
//! Loading runs on a background thread (see the app's loader channel), so
//! everything here may block.

use anyhow::{Context, Result};
use std::io::Read;

/// Decoded image data ready to be turned into a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Fetch and decode an image from a URL or filesystem path.
pub fn load_image(source: &str) -> Result<LoadedImage> {
    let bytes = fetch_bytes(source)?;
    let rgba = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode image from {source}"))?
        .to_rgba8();

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

fn fetch_bytes(source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = ureq::get(source)
            .call()
            .with_context(|| format!("failed to fetch {source}"))?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .with_context(|| format!("failed to read response body from {source}"))?;
        Ok(bytes)
    } else {
        std::fs::read(source).with_context(|| format!("failed to read {source}"))
    }
}

/// Gray stand-in texture shown when the image source cannot be loaded.
/// Existing boxes are kept; only the backdrop changes.
pub fn placeholder() -> LoadedImage {
    const W: u32 = 400;
    const H: u32 = 300;
    let mut pixels = Vec::with_capacity((W * H * 4) as usize);
    for y in 0..H {
        for x in 0..W {
            let border = x < 2 || y < 2 || x >= W - 2 || y >= H - 2;
            let gray = if border { 90u8 } else { 60u8 };
            pixels.extend_from_slice(&[gray, gray, gray, 255]);
        }
    }
    LoadedImage {
        width: W,
        height: H,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        let img = placeholder();
        assert_eq!(img.width, 400);
        assert_eq!(img.height, 300);
        assert_eq!(img.pixels.len(), 400 * 300 * 4);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_image("/definitely/not/here.png").is_err());
    }
}
