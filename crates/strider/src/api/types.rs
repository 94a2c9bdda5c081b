/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Classification of a world object the avatar can collide with.
/// The collision handler matches on this instead of inspecting concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A hazard. Touching one wipes the running score.
    Obstacle,
    /// A collectible worth one point, removed on pickup.
    Point,
    /// Background decoration with no collision reaction.
    Scenery,
}

/// A sound effect emitted by game logic.
/// Fire-and-forget: queued on the context, drained by the host audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Jump,
    Score,
    Damage,
}
