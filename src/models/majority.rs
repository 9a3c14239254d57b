//! A baseline model that only tracks the per-planet majority.

use super::model::Predictor;
use crate::table::StatsTable;

/// A predictor that ignores visit order and guesses the majority outcome
/// seen on each planet so far. The simulator and the benchmarks use it
/// as the stand-in for the spaceship computer.
pub struct MajorityModel {
    observations: StatsTable<1024>,
}

impl Predictor for MajorityModel {
    fn new() -> Self {
        Self {
            observations: StatsTable::new(),
        }
    }

    fn predict(&self, next_planet_id: u64, spaceship_hint: bool) -> bool {
        match self.observations.get(next_planet_id) {
            Some(stats) => stats.majority(),
            None => spaceship_hint,
        }
    }

    fn observe(&mut self, next_planet_id: u64, outcome: bool) {
        self.observations.record(next_planet_id, outcome);
    }
}

#[test]
fn test_majority_model() {
    let mut model = MajorityModel::new();
    assert!(model.predict(7, true));

    model.observe(7, false);
    model.observe(7, false);
    model.observe(7, true);
    assert!(!model.predict(7, true));

    // Other planets are unaffected.
    assert!(model.predict(8, true));
}
