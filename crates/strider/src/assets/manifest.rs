use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing or resolving game assets.
/// Asset failures are fatal at startup and are never retried.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The manifest JSON could not be parsed.
    #[error("malformed asset manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A clip points at an atlas index the manifest does not declare.
    #[error("clip `{clip}` references atlas {atlas} but only {count} atlases are declared")]
    AtlasOutOfRange {
        clip: String,
        atlas: u32,
        count: usize,
    },

    /// A clip required by the game is not in the manifest.
    #[error("missing required clip `{0}`")]
    MissingClip(String),
}

/// Asset manifest describing atlases, animation clips and sounds.
/// Loaded from a JSON document at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named clip lookup: name → atlas strip description.
    #[serde(default)]
    pub clips: HashMap<String, ClipDescriptor>,
    /// Optional audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "avatar").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file.
    pub path: String,
}

/// Describes a clip: consecutive columns on one row of an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Row in the atlas grid.
    pub row: u32,
    /// First column of the strip (default: 0).
    #[serde(default)]
    pub start_col: u32,
    /// Number of frames. 1 means a single held frame.
    pub frames: u32,
    /// Seconds per frame; irrelevant for single-frame clips.
    #[serde(default)]
    pub step_time: f32,
    /// Whether the clip loops (default: true).
    #[serde(default = "default_looping")]
    pub looping: bool,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
}

fn default_looping() -> bool {
    true
}

impl AssetManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Self = serde_json::from_str(json)?;
        for (name, clip) in &manifest.clips {
            if clip.atlas as usize >= manifest.atlases.len() {
                return Err(AssetError::AtlasOutOfRange {
                    clip: name.clone(),
                    atlas: clip.atlas,
                    count: manifest.atlases.len(),
                });
            }
        }
        Ok(manifest)
    }
}
