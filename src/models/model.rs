/// A trait that defines the interface for making day/night predictions.
pub trait Predictor {
    /// Construct a new predictor with empty memory.
    fn new() -> Self;

    /// Guess whether it will be day on the next planet. 'spaceship_hint'
    /// is an independent prediction supplied by the caller.
    #[must_use]
    fn predict(&self, next_planet_id: u64, spaceship_hint: bool) -> bool;

    /// Record the actual outcome observed on the planet just visited.
    fn observe(&mut self, next_planet_id: u64, outcome: bool);
}
