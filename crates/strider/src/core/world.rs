/// Read-only world parameters, consumed by the avatar every frame.
///
/// Y grows downward and the ground sits below the playfield, so "airborne"
/// means the avatar's bottom edge is above (numerically less than)
/// `ground_level`. The gravity constant is tuned to the frame rule the
/// avatar uses (accumulated velocity is added to position once per frame),
/// so typical values are small (10–30), not pixel-per-second-squared scale.
#[derive(Debug, Clone, Copy)]
pub struct WorldParams {
    /// Y coordinate of the playfield floor.
    pub ground_level: f32,
    /// Downward acceleration constant.
    pub gravity: f32,
}

impl WorldParams {
    pub fn new(ground_level: f32, gravity: f32) -> Self {
        Self {
            ground_level,
            gravity,
        }
    }
}
