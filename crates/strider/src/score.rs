/// Externally owned scoring, triggered by the avatar and never read back.
///
/// The host supplies an implementation at avatar construction; both calls
/// are fire-and-forget.
pub trait ScoreSink {
    /// Award points for a collected pickup.
    fn add_score(&mut self, amount: u32);
    /// Wipe the running score after a hazard hit.
    fn reset_score(&mut self);
}
