use std::collections::HashMap;

use crate::assets::manifest::{AssetError, AssetManifest};
use crate::components::animation::Clip;

/// Clip lookup built from an AssetManifest.
/// Provides name-based clip resolution for game code.
pub struct ClipLibrary {
    clips: HashMap<String, Clip>,
}

impl ClipLibrary {
    /// Build a library from a parsed, validated manifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut clips = HashMap::with_capacity(manifest.clips.len());
        for (name, desc) in &manifest.clips {
            let clip = if desc.frames <= 1 {
                Clip::still(desc.start_col as f32, desc.row as f32)
            } else {
                let mut clip = Clip::strip(
                    desc.row as f32,
                    desc.start_col as f32,
                    desc.frames,
                    desc.step_time,
                );
                clip.looping = desc.looping;
                clip
            };
            clips.insert(name.clone(), clip);
        }
        Self { clips }
    }

    /// Look up a clip by name.
    pub fn get(&self, name: &str) -> Option<&Clip> {
        self.clips.get(name)
    }

    /// Clone a clip out or fail with a typed error. Used by startup paths
    /// where a missing clip is fatal.
    pub fn require(&self, name: &str) -> Result<Clip, AssetError> {
        self.clips
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::MissingClip(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "atlases": [
            { "name": "avatar", "cols": 8, "rows": 2, "path": "avatar.png" }
        ],
        "clips": {
            "run": { "atlas": 0, "row": 0, "frames": 4, "step_time": 0.15 },
            "fall": { "atlas": 0, "row": 1, "start_col": 3, "frames": 1 }
        }
    }"#;

    #[test]
    fn builds_strips_and_stills() {
        let manifest = AssetManifest::from_json(JSON).unwrap();
        let library = ClipLibrary::from_manifest(&manifest);

        let run = library.get("run").unwrap();
        assert_eq!(run.frame_count(), 4);
        assert_eq!(run.step_time, 0.15);
        assert!(run.looping);

        let fall = library.get("fall").unwrap();
        assert_eq!(fall.frames, vec![(3.0, 1.0)]);
        assert!(!fall.looping);
    }

    #[test]
    fn require_missing_clip_fails() {
        let manifest = AssetManifest::from_json(JSON).unwrap();
        let library = ClipLibrary::from_manifest(&manifest);

        assert!(library.require("run").is_ok());
        let err = library.require("slide").unwrap_err();
        assert!(matches!(err, AssetError::MissingClip(name) if name == "slide"));
    }
}
