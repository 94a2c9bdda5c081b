pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod extensions;
pub mod player;
pub mod score;

// Re-export key types at crate root for convenience
pub use api::context::HostContext;
pub use api::types::{EntityId, EntityKind, SoundKind};
pub use assets::manifest::{
    AssetError, AssetManifest, AtlasDescriptor, ClipDescriptor, SoundDescriptor,
};
pub use assets::registry::ClipLibrary;
pub use components::animation::{AnimationPlayer, Clip};
pub use components::collider::CircleCollider;
pub use components::entity::Entity;
pub use components::sprite::{AtlasId, SpriteComponent};
pub use crate::core::scene::Scene;
pub use crate::core::world::WorldParams;
pub use extensions::easing::{ease, lerp, Easing};
pub use extensions::effect::{Effect, EffectKind, EffectState, EffectTarget};
pub use player::{PlayerEntity, PlayerState, AVATAR_SIZE, CLIP_FALL, CLIP_JUMP, CLIP_RUN, JUMP_LENGTH};
pub use score::ScoreSink;
