use glam::Vec2;

use crate::api::types::{EntityId, EntityKind};
use crate::components::collider::CircleCollider;
use crate::components::sprite::SpriteComponent;

/// Fat world object — a single struct with optional components.
///
/// Covers everything the scene scrolls past the avatar: obstacles, points,
/// scenery. The avatar itself is composed separately and never stored here.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Collision classification.
    pub kind: EntityKind,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space (center of the bounding box).
    pub pos: Vec2,
    /// World-space bounding-box size.
    pub size: Vec2,
    /// Sprite component (optional — entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
    /// Collision volume (optional — scenery usually has none).
    pub collider: Option<CircleCollider>,
}

impl Entity {
    /// Create a new entity of the given kind at the origin.
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            sprite: None,
            collider: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_collider(mut self, collider: CircleCollider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Attach a circle collider fitted to the current size.
    /// Call after `with_size`.
    pub fn with_fitted_collider(mut self) -> Self {
        self.collider = Some(CircleCollider::fitting(self.size));
        self
    }
}
