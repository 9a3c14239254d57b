//! The Robo day/night predictor and its bounded memory.

use super::model::Predictor;
use crate::table::{OutcomeTable, StatsTable};
use crate::ROBO_MEMORY_LIMIT;

/// Slot counts for the three history tables. Together with the slot
/// widths these keep RoboMemory under ROBO_MEMORY_LIMIT.
const SINGLE_SLOTS: usize = 1024;
const PAIR_SLOTS: usize = 1024;
const TRIPLE_SLOTS: usize = 512;

/// Everything Robo remembers between visits. Mutated only by 'observe';
/// 'predict' reads a consistent snapshot.
pub struct RoboMemory {
    /// Cumulative day/night tallies per planet.
    planet_observations: StatsTable<SINGLE_SLOTS>,
    /// Last outcome seen for each (previous, current) transition.
    planet_pair_observations: OutcomeTable<(u64, u64), PAIR_SLOTS>,
    /// Last outcome seen for each (prev-prev, previous, current) transition.
    planet_triple_observations: OutcomeTable<(u64, u64, u64), TRIPLE_SLOTS>,
    last_planet_id: Option<u64>,
    last_last_planet_id: Option<u64>,
    consecutive_day_count: u32,
}

// Robo is ineligible if its memory exceeds the 64 KiB budget.
const _: () = assert!(std::mem::size_of::<RoboMemory>() <= ROBO_MEMORY_LIMIT);

impl RoboMemory {
    fn new() -> Self {
        Self {
            planet_observations: StatsTable::new(),
            planet_pair_observations: OutcomeTable::new(),
            planet_triple_observations: OutcomeTable::new(),
            last_planet_id: None,
            last_last_planet_id: None,
            consecutive_day_count: 0,
        }
    }
}

/// A predictor that guesses the time of day on the next planet from the
/// visit history and learns from each observed outcome.
pub struct RoboPredictor {
    memory: Box<RoboMemory>,
}

impl Predictor for RoboPredictor {
    fn new() -> Self {
        Self {
            memory: Box::new(RoboMemory::new()),
        }
    }

    fn predict(&self, next_planet_id: u64, spaceship_hint: bool) -> bool {
        let mem = &self.memory;

        // Two days in a row already. Cap the streak and call night,
        // whatever the other signals say.
        if mem.consecutive_day_count >= 2 {
            return false;
        }

        let triple_prediction =
            match (mem.last_last_planet_id, mem.last_planet_id) {
                (Some(a), Some(b)) => mem
                    .planet_triple_observations
                    .get((a, b, next_planet_id)),
                _ => None,
            };

        let pair_prediction = mem
            .last_planet_id
            .and_then(|b| mem.planet_pair_observations.get((b, next_planet_id)));

        // Trust the spaceship computer only when both learned transition
        // signals corroborate it.
        if let (Some(triple), Some(pair)) = (triple_prediction, pair_prediction)
        {
            if triple == pair && pair == spaceship_hint {
                return spaceship_hint;
            }
        }

        if let Some(stats) = mem.planet_observations.get(next_planet_id) {
            return stats.majority();
        }

        // Never seen this planet. Defer to the spaceship computer.
        spaceship_hint
    }

    fn observe(&mut self, next_planet_id: u64, outcome: bool) {
        let mem = &mut self.memory;

        if outcome {
            mem.consecutive_day_count = mem.consecutive_day_count.saturating_add(1);
        } else {
            mem.consecutive_day_count = 0;
        }

        // Transition records are keyed by the pre-shift history.
        if let (Some(a), Some(b)) = (mem.last_last_planet_id, mem.last_planet_id)
        {
            mem.planet_triple_observations
                .put((a, b, next_planet_id), outcome);
        }
        if let Some(b) = mem.last_planet_id {
            mem.planet_pair_observations
                .put((b, next_planet_id), outcome);
        }

        mem.last_last_planet_id = mem.last_planet_id;
        mem.last_planet_id = Some(next_planet_id);

        mem.planet_observations.record(next_planet_id, outcome);
    }
}

#[test]
fn test_streak_cap() {
    let mut robo = RoboPredictor::new();
    robo.observe(1, true);
    robo.observe(2, true);

    // Two days in a row. The next call must predict night.
    assert!(!robo.predict(3, true));
    assert!(!robo.predict(1, true));

    // A night releases the cap.
    robo.observe(3, false);
    assert!(robo.predict(9, true));
}

#[test]
fn test_empty_memory_returns_hint() {
    let robo = RoboPredictor::new();
    assert!(robo.predict(42, true));
    assert!(!robo.predict(42, false));
}
