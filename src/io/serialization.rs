// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration serialization and deserialization.
//!
//! This module is the codec between the in-memory [`ImageConfig`] and its
//! JSON document form: `{"imageUrl": ..., "boxes": [...]}` with stable key
//! order and human-readable indentation. Parsing validates the full shape
//! and fails atomically; a bad document never partially applies.

use crate::models::config::ImageConfig;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Failure to parse a configuration document. Recoverable: callers report
/// the message and keep their prior state.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialize a config to pretty-printed JSON, boxes in store order.
pub fn to_json(config: &ImageConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(json)
}

/// Parse a JSON document into a config.
///
/// Requires a string `imageUrl` and a `boxes` array whose entries each carry
/// a string `id` and numeric `x`, `y`, `width`, `height`.
pub fn from_json(text: &str) -> Result<ImageConfig, ConfigError> {
    let config = serde_json::from_str(text)?;
    Ok(config)
}

/// Export a config as a JSON file.
pub fn export_json(config: &ImageConfig, path: &Path) -> Result<()> {
    let json = to_json(config)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Import a config from a JSON file.
pub fn import_json(path: &Path) -> Result<ImageConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = from_json(&json)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bbox::BBox;

    fn sample_config() -> ImageConfig {
        ImageConfig {
            image_url: "https://example.com/cat.png".to_string(),
            boxes: vec![
                BBox {
                    id: "box-1".to_string(),
                    x: 10.0,
                    y: 20.0,
                    width: 30.0,
                    height: 40.0,
                },
                BBox {
                    id: "box-2".to_string(),
                    x: 55.5,
                    y: 5.25,
                    width: 12.0,
                    height: 8.0,
                },
            ],
        }
    }

    #[test]
    fn test_round_trip() {
        let config = sample_config();
        let json = to_json(&config).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_stable_key_order_and_indentation() {
        let json = to_json(&sample_config()).unwrap();
        assert!(json.starts_with("{\n  \"imageUrl\""));
        let url_pos = json.find("imageUrl").unwrap();
        let boxes_pos = json.find("boxes").unwrap();
        assert!(url_pos < boxes_pos);
    }

    #[test]
    fn test_box_order_preserved() {
        let json = to_json(&sample_config()).unwrap();
        let parsed = from_json(&json).unwrap();
        let ids: Vec<&str> = parsed.boxes.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["box-1", "box-2"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(from_json("not json at all").is_err());
        assert!(from_json("{\"imageUrl\": \"x\", \"boxes\": [").is_err());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        // Missing boxes.
        assert!(from_json(r#"{"imageUrl": "x"}"#).is_err());
        // imageUrl must be a string.
        assert!(from_json(r#"{"imageUrl": 7, "boxes": []}"#).is_err());
        // Box coordinates must be numeric.
        assert!(from_json(
            r#"{"imageUrl": "x", "boxes": [{"id": "a", "x": "10", "y": 0, "width": 5, "height": 5}]}"#
        )
        .is_err());
        // Box id must be present.
        assert!(from_json(
            r#"{"imageUrl": "x", "boxes": [{"x": 1, "y": 0, "width": 5, "height": 5}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_empty_box_list_is_valid() {
        let parsed = from_json(r#"{"imageUrl": "", "boxes": []}"#).unwrap();
        assert_eq!(parsed.image_url, "");
        assert!(parsed.boxes.is_empty());
    }
}
