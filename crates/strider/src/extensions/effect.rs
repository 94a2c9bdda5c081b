// extensions/effect.rs
//
// Timed one-shot effects, ticked by the host once per frame and removed on
// completion. Effects run independently of the avatar's physics integration
// and reach it only through the EffectTarget capability trait.

use super::easing::{ease, Easing};

/// Surface a timed effect mutates. The avatar implements this, keeping
/// effects decoupled from its internals.
pub trait EffectTarget {
    /// Move vertically by a delta (negative = up).
    fn shift_y(&mut self, dy: f32);
    /// Set sprite opacity.
    fn set_alpha(&mut self, alpha: f32);
}

/// What an effect does to its target over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectKind {
    /// Move vertically by `by` in total, applied as per-tick deltas so it
    /// composes with whatever else moves the target in the meantime.
    TranslateY { by: f32 },
    /// Blink opacity down to `floor` and back, `cycles` times, ending opaque.
    Flash { floor: f32, cycles: u32 },
}

/// A single one-shot timed effect.
#[derive(Debug, Clone)]
pub struct Effect {
    kind: EffectKind,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    /// Eased displacement already handed to the target (TranslateY only).
    applied: f32,
}

impl Effect {
    /// Eased vertical move-by: `by` pixels in total over `duration` seconds.
    pub fn translate_y(by: f32, duration: f32, easing: Easing) -> Self {
        Self {
            kind: EffectKind::TranslateY { by },
            duration,
            elapsed: 0.0,
            easing,
            applied: 0.0,
        }
    }

    /// Opacity blink: dip to `floor` and back `cycles` times over `duration`.
    pub fn flash(floor: f32, cycles: u32, duration: f32) -> Self {
        Self {
            kind: EffectKind::Flash { floor, cycles },
            duration,
            elapsed: 0.0,
            easing: Easing::Linear,
            applied: 0.0,
        }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Normalized progress [0, 1].
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Advance by `dt` and apply to the target. Returns true when finished.
    fn tick(&mut self, dt: f32, target: &mut dyn EffectTarget) -> bool {
        self.elapsed += dt;
        let t = self.progress();

        match self.kind {
            EffectKind::TranslateY { by } => {
                let eased_total = ease(0.0, by, t, self.easing);
                target.shift_y(eased_total - self.applied);
                self.applied = eased_total;
            }
            EffectKind::Flash { floor, cycles } => {
                if self.elapsed >= self.duration {
                    target.set_alpha(1.0);
                } else {
                    // triangle wave: opaque at cycle edges, `floor` mid-cycle
                    let phase = (t * cycles as f32).fract();
                    let dip = 1.0 - (phase * 2.0 - 1.0).abs();
                    target.set_alpha(lerp_alpha(floor, dip));
                }
            }
        }

        self.elapsed >= self.duration
    }
}

#[inline]
fn lerp_alpha(floor: f32, dip: f32) -> f32 {
    1.0 + (floor - 1.0) * dip
}

/// Active effects on a single target, ticked once per frame by the host.
#[derive(Debug, Default)]
pub struct EffectState {
    effects: Vec<Effect>,
}

impl EffectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a new effect.
    pub fn add(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Advance all effects and apply them to the target, dropping the ones
    /// that completed this tick.
    pub fn tick(&mut self, dt: f32, target: &mut dyn EffectTarget) {
        self.effects.retain_mut(|effect| !effect.tick(dt, target));
    }

    /// Number of active effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether there are no active effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Clear all effects.
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        y: f32,
        alpha: f32,
        min_alpha: f32,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                y: 0.0,
                alpha: 1.0,
                min_alpha: 1.0,
            }
        }
    }

    impl EffectTarget for Probe {
        fn shift_y(&mut self, dy: f32) {
            self.y += dy;
        }
        fn set_alpha(&mut self, alpha: f32) {
            self.alpha = alpha;
            self.min_alpha = self.min_alpha.min(alpha);
        }
    }

    #[test]
    fn translate_reaches_exact_total() {
        let mut fx = EffectState::new();
        let mut probe = Probe::new();
        fx.add(Effect::translate_y(-500.0, 0.3, Easing::QuadOut));

        // uneven tick sizes must still sum to the full displacement
        for dt in [0.05, 0.11, 0.02, 0.2] {
            fx.tick(dt, &mut probe);
        }
        assert!((probe.y - -500.0).abs() < 0.01, "y = {}", probe.y);
        assert!(fx.is_empty());
    }

    #[test]
    fn translate_composes_with_outside_movement() {
        let mut fx = EffectState::new();
        let mut probe = Probe::new();
        fx.add(Effect::translate_y(-100.0, 1.0, Easing::Linear));

        fx.tick(0.5, &mut probe);
        probe.y += 30.0; // something else moved the target
        fx.tick(0.5, &mut probe);

        // the effect contributed exactly -100 on top of the outside +30
        assert!((probe.y - -70.0).abs() < 0.01, "y = {}", probe.y);
    }

    #[test]
    fn quad_out_front_loads_displacement() {
        let mut fx = EffectState::new();
        let mut probe = Probe::new();
        fx.add(Effect::translate_y(-500.0, 0.3, Easing::QuadOut));

        fx.tick(0.15, &mut probe);
        let first_half = -probe.y;
        fx.tick(0.15, &mut probe);
        let second_half = -probe.y - first_half;
        assert!(first_half > second_half);
    }

    #[test]
    fn flash_dips_and_restores() {
        let mut fx = EffectState::new();
        let mut probe = Probe::new();
        fx.add(Effect::flash(0.25, 3, 0.6));

        let dt = 0.6 / 36.0;
        for _ in 0..40 {
            fx.tick(dt, &mut probe);
        }
        assert!(probe.min_alpha < 0.3, "min alpha = {}", probe.min_alpha);
        assert_eq!(probe.alpha, 1.0);
        assert!(fx.is_empty());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut fx = EffectState::new();
        let mut probe = Probe::new();
        fx.add(Effect::translate_y(-40.0, 0.0, Easing::Linear));

        fx.tick(0.016, &mut probe);
        assert!((probe.y - -40.0).abs() < 0.001);
        assert!(fx.is_empty());
    }
}
