// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exported/imported configuration document.

use super::bbox::BBox;
use serde::{Deserialize, Serialize};

/// The complete annotation set for one image: the image source plus every
/// committed box, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub boxes: Vec<BBox>,
}

impl ImageConfig {
    /// Create a config for the given image with no boxes yet.
    pub fn new(image_url: String) -> Self {
        Self {
            image_url,
            boxes: Vec::new(),
        }
    }
}
