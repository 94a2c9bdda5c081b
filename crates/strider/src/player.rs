//! The playable runner avatar.
//!
//! The avatar runs automatically; the host drives it through `update`,
//! `jump` and `on_collision`, all serialized by the game loop. It owns its
//! position exclusively — the only outside influence is the timed jump
//! impulse, which reaches it through the [`EffectTarget`] seam.

use glam::Vec2;

use crate::api::context::HostContext;
use crate::api::types::{EntityId, EntityKind, SoundKind};
use crate::assets::manifest::{AssetError, AssetManifest};
use crate::assets::registry::ClipLibrary;
use crate::components::animation::AnimationPlayer;
use crate::components::collider::CircleCollider;
use crate::components::sprite::SpriteComponent;
use crate::core::world::WorldParams;
use crate::extensions::easing::Easing;
use crate::extensions::effect::{Effect, EffectTarget};
use crate::score::ScoreSink;

/// Avatar bounding box edge in virtual pixels.
pub const AVATAR_SIZE: f32 = 150.0;
/// Total upward displacement of one jump impulse.
pub const JUMP_LENGTH: f32 = 500.0;

/// Gravity scale while rising; full gravity applies while falling.
const RISE_GRAVITY_SCALE: f32 = 0.4;
/// Jump impulse duration in seconds.
const JUMP_DURATION: f32 = 0.30;
/// Hurt feedback: blink count, opacity floor and total duration.
const HURT_FLASH_CYCLES: u32 = 3;
const HURT_FLASH_FLOOR: f32 = 0.25;
const HURT_FLASH_DURATION: f32 = 0.6;

/// Clip names the avatar requires from the asset manifest.
pub const CLIP_RUN: &str = "run";
pub const CLIP_JUMP: &str = "jump";
pub const CLIP_FALL: &str = "fall";

/// Animation/behavior mode, derived from physical conditions each frame.
///
/// This is a flat selection enum, not a transition graph: `jump()` forces
/// `Jumping`, detected descent forces `Falling`, and the ground clamp
/// forces `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Running,
    Jumping,
    Falling,
}

impl PlayerState {
    fn clip(self) -> &'static str {
        match self {
            PlayerState::Running => CLIP_RUN,
            PlayerState::Jumping => CLIP_JUMP,
            PlayerState::Falling => CLIP_FALL,
        }
    }
}

/// The playable runner avatar.
pub struct PlayerEntity {
    pos: Vec2,
    size: Vec2,
    vertical_velocity: f32,
    /// Previous frame's position, written at the very end of every update.
    /// Only consumer is the falling test.
    last_pos: Vec2,
    state: PlayerState,
    sprite: SpriteComponent,
    animation: AnimationPlayer,
    collider: CircleCollider,
    score: Box<dyn ScoreSink>,
}

impl PlayerEntity {
    /// Build the avatar from manifest clips and fit its collision circle.
    ///
    /// Requires the `run`, `jump` and `fall` clips; a missing clip or
    /// malformed manifest is fatal to game startup.
    pub fn load(
        pos: Vec2,
        manifest: &AssetManifest,
        score: Box<dyn ScoreSink>,
    ) -> Result<Self, AssetError> {
        let library = ClipLibrary::from_manifest(manifest);
        let mut animation = AnimationPlayer::new();
        animation.add(CLIP_RUN, library.require(CLIP_RUN)?);
        animation.add(CLIP_JUMP, library.require(CLIP_JUMP)?);
        animation.add(CLIP_FALL, library.require(CLIP_FALL)?);
        animation.play(CLIP_RUN);

        let size = Vec2::splat(AVATAR_SIZE);
        log::info!("avatar loaded at {:?}", pos);

        Ok(Self {
            pos,
            size,
            vertical_velocity: 0.0,
            last_pos: pos,
            state: PlayerState::Running,
            sprite: SpriteComponent::default(),
            animation,
            collider: CircleCollider::fitting(size),
            score,
        })
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn sprite(&self) -> &SpriteComponent {
        &self.sprite
    }

    pub fn collider(&self) -> CircleCollider {
        self.collider
    }

    /// Y coordinate of the avatar's bottom edge.
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Whether the avatar's bottom edge is above the ground.
    pub fn in_air(&self, world: &WorldParams) -> bool {
        self.bottom() < world.ground_level
    }

    fn is_falling(&self) -> bool {
        self.last_pos.y < self.pos.y
    }

    /// Per-frame simulation step. `dt` is the elapsed frame time in
    /// seconds; the host guarantees it is positive.
    pub fn update(&mut self, dt: f32, world: &WorldParams) {
        if self.in_air(world) {
            // Accumulated velocity is added directly each frame, not scaled
            // by dt; gravity constants are tuned to this frame rule.
            self.pos.y += self.vertical_velocity;
            let accel = if self.is_falling() {
                world.gravity
            } else {
                world.gravity * RISE_GRAVITY_SCALE
            };
            self.vertical_velocity += accel * dt;
        }

        if self.is_falling() {
            self.state = PlayerState::Falling;
        }

        // Ground clamp: the avatar never sinks below the playfield floor.
        if self.bottom() > world.ground_level {
            self.pos.y = world.ground_level - self.size.y * 0.5;
            self.vertical_velocity = 0.0;
            if self.state != PlayerState::Running {
                log::debug!("landed at y {:.1}", self.pos.y);
            }
            self.state = PlayerState::Running;
        }

        self.last_pos = self.pos;

        self.animation.play_if_different(self.state.clip());
        self.animation.tick(dt);
        if let Some((col, row)) = self.animation.current_frame() {
            self.sprite.col = col;
            self.sprite.row = row;
        }
    }

    /// Jump input. The displayed state flips to `Jumping` even mid-air;
    /// the sound and the upward impulse fire only from the ground.
    pub fn jump(&mut self, world: &WorldParams, ctx: &mut HostContext) {
        self.state = PlayerState::Jumping;
        if self.in_air(world) {
            return;
        }
        ctx.emit_sound(SoundKind::Jump);
        ctx.effects
            .add(Effect::translate_y(-JUMP_LENGTH, JUMP_DURATION, Easing::QuadOut));
    }

    /// Collision-start notification from the host. `other` is looked up in
    /// the scene; ids that no longer resolve are ignored.
    pub fn on_collision(&mut self, other: EntityId, ctx: &mut HostContext) {
        let Some(kind) = ctx.scene.get(other).map(|e| e.kind) else {
            return;
        };
        match kind {
            EntityKind::Obstacle => {
                ctx.emit_sound(SoundKind::Damage);
                self.score.reset_score();
                ctx.effects.add(Effect::flash(
                    HURT_FLASH_FLOOR,
                    HURT_FLASH_CYCLES,
                    HURT_FLASH_DURATION,
                ));
            }
            EntityKind::Point => {
                ctx.emit_sound(SoundKind::Score);
                ctx.scene.despawn(other);
                self.score.add_score(1);
            }
            EntityKind::Scenery => {}
        }
    }
}

impl EffectTarget for PlayerEntity {
    fn shift_y(&mut self, dy: f32) {
        self.pos.y += dy;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.sprite.alpha = alpha;
    }
}
