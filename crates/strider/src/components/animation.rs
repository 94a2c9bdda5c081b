//! Animation clips and the player that selects among them.

use std::collections::HashMap;

/// A named sequence of atlas cells.
#[derive(Debug, Clone)]
pub struct Clip {
    /// Frame cells as (col, row) pairs in the atlas.
    pub frames: Vec<(f32, f32)>,
    /// Seconds per frame. Ignored for single-frame clips.
    pub step_time: f32,
    /// Whether to loop at the end; non-looping clips hold their last frame.
    pub looping: bool,
}

impl Clip {
    /// Consecutive columns on one atlas row, looping.
    pub fn strip(row: f32, start_col: f32, frame_count: u32, step_time: f32) -> Self {
        let frames = (0..frame_count)
            .map(|i| (start_col + i as f32, row))
            .collect();
        Self {
            frames,
            step_time,
            looping: true,
        }
    }

    /// A single frame held indefinitely.
    pub fn still(col: f32, row: f32) -> Self {
        Self {
            frames: vec![(col, row)],
            step_time: 0.0,
            looping: false,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Selects and advances one of several named clips.
///
/// Switching via `play_if_different` never restarts the clip that is
/// already showing, so a state re-asserted every frame does not stutter.
#[derive(Debug, Clone, Default)]
pub struct AnimationPlayer {
    clips: HashMap<String, Clip>,
    current: String,
    frame: usize,
    timer: f32,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip under a name.
    pub fn add(&mut self, name: impl Into<String>, clip: Clip) {
        self.clips.insert(name.into(), clip);
    }

    /// Start a named clip from its first frame. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        if self.clips.contains_key(name) {
            self.current = name.to_string();
            self.frame = 0;
            self.timer = 0.0;
        }
    }

    /// Switch clips only when the requested one is not already playing.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Name of the clip currently playing.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Current frame (col, row) for sprite display.
    pub fn current_frame(&self) -> Option<(f32, f32)> {
        self.clips
            .get(&self.current)
            .and_then(|clip| clip.frames.get(self.frame).copied())
    }

    /// Advance by `dt` seconds. Single-frame clips and finished non-looping
    /// clips hold their frame.
    pub fn tick(&mut self, dt: f32) {
        let Some(clip) = self.clips.get(&self.current) else {
            return;
        };
        if clip.frames.len() < 2 || clip.step_time <= 0.0 {
            return;
        }

        self.timer += dt;
        while self.timer >= clip.step_time {
            self.timer -= clip.step_time;
            self.frame += 1;
            if self.frame >= clip.frames.len() {
                if clip.looping {
                    self.frame = 0;
                } else {
                    self.frame = clip.frames.len() - 1;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(name: &str, clip: Clip) -> AnimationPlayer {
        let mut p = AnimationPlayer::new();
        p.add(name, clip);
        p.play(name);
        p
    }

    #[test]
    fn strip_cycles_through_frames() {
        let mut anim = player_with("run", Clip::strip(0.0, 0.0, 4, 0.15));
        assert_eq!(anim.current_frame(), Some((0.0, 0.0)));

        anim.tick(0.16);
        assert_eq!(anim.current_frame(), Some((1.0, 0.0)));

        // three more steps wraps back to frame 0
        anim.tick(0.45);
        assert_eq!(anim.current_frame(), Some((0.0, 0.0)));
    }

    #[test]
    fn still_holds_indefinitely() {
        let mut anim = player_with("jump", Clip::still(2.0, 1.0));
        anim.tick(10.0);
        assert_eq!(anim.current_frame(), Some((2.0, 1.0)));
    }

    #[test]
    fn play_if_different_keeps_phase() {
        let mut anim = AnimationPlayer::new();
        anim.add("run", Clip::strip(0.0, 0.0, 4, 0.15));
        anim.add("fall", Clip::still(5.0, 0.0));
        anim.play("run");
        anim.tick(0.2);
        let frame = anim.current_frame();

        anim.play_if_different("run");
        assert_eq!(anim.current_frame(), frame);

        anim.play_if_different("fall");
        assert_eq!(anim.current_frame(), Some((5.0, 0.0)));
    }

    #[test]
    fn unknown_clip_is_ignored() {
        let mut anim = player_with("run", Clip::strip(0.0, 0.0, 2, 0.1));
        anim.play("missing");
        assert_eq!(anim.current(), "run");
    }
}
