//! Fixed-capacity tables that back the predictor's memory.
//!
//! The memory budget is a hard ceiling, so none of these tables may grow.
//! Each table is a direct-mapped cache: a key hashes to exactly one slot,
//! the full key is stored in the slot, and a new key that lands on an
//! occupied slot evicts the resident entry. Lookups only hit on an exact
//! key match, never on a hash collision.

/// Multiplier for the slot hash (the 64-bit golden ratio).
const HASH_MUL: u64 = 0x9e37_79b9_7f4a_7c15;

fn mix(val: u64) -> u64 {
    val.wrapping_mul(HASH_MUL).rotate_left(31)
}

/// A key that can select a slot in a fixed-capacity table.
pub trait TableKey: Copy + Eq {
    /// Map the key to a slot index in '0..len'.
    fn slot(&self, len: usize) -> usize;
}

impl TableKey for u64 {
    fn slot(&self, len: usize) -> usize {
        (mix(*self) % len as u64) as usize
    }
}

impl TableKey for (u64, u64) {
    fn slot(&self, len: usize) -> usize {
        (mix(self.0 ^ mix(self.1)) % len as u64) as usize
    }
}

impl TableKey for (u64, u64, u64) {
    fn slot(&self, len: usize) -> usize {
        (mix(self.0 ^ mix(self.1 ^ mix(self.2))) % len as u64) as usize
    }
}

/// Day/night tallies for a single planet.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub day_count: u16,
    pub night_count: u16,
}

impl TimeStats {
    /// Count one observed outcome. The tallies saturate instead of
    /// wrapping, so a long-lived record keeps its majority direction.
    pub fn record(&mut self, outcome: bool) {
        if outcome {
            self.day_count = self.day_count.saturating_add(1);
        } else {
            self.night_count = self.night_count.saturating_add(1);
        }
    }

    /// Strict day majority. Ties count as night.
    #[must_use]
    pub fn majority(&self) -> bool {
        self.day_count > self.night_count
    }
}

#[derive(Copy, Clone)]
struct StatsSlot {
    key: u64,
    stats: TimeStats,
    used: bool,
}

/// Used to initialize empty tables.
const EMPTY_SLOT: StatsSlot = StatsSlot {
    key: 0,
    stats: TimeStats {
        day_count: 0,
        night_count: 0,
    },
    used: false,
};

/// A direct-mapped table of per-planet tallies. 'N' is the slot count.
pub struct StatsTable<const N: usize> {
    slots: [StatsSlot; N],
}

impl<const N: usize> StatsTable<N> {
    pub fn new() -> Self {
        Self {
            slots: [EMPTY_SLOT; N],
        }
    }

    /// Return the tallies recorded for 'key', if any.
    #[must_use]
    pub fn get(&self, key: u64) -> Option<TimeStats> {
        let slot = &self.slots[key.slot(N)];
        if slot.used && slot.key == key {
            Some(slot.stats)
        } else {
            None
        }
    }

    /// Count 'outcome' for 'key'. A key that lands on a slot holding a
    /// different planet starts a fresh tally there.
    pub fn record(&mut self, key: u64, outcome: bool) {
        let slot = &mut self.slots[key.slot(N)];
        if !slot.used || slot.key != key {
            *slot = StatsSlot {
                key,
                stats: TimeStats::default(),
                used: true,
            };
        }
        slot.stats.record(outcome);
    }
}

impl<const N: usize> Default for StatsTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone)]
struct OutcomeSlot<K> {
    key: K,
    outcome: bool,
    used: bool,
}

/// A direct-mapped table holding the last observed outcome per key.
/// Writes overwrite: only the most recent outcome for a key survives.
pub struct OutcomeTable<K: TableKey + Default, const N: usize> {
    slots: [OutcomeSlot<K>; N],
}

impl<K: TableKey + Default, const N: usize> OutcomeTable<K, N> {
    pub fn new() -> Self {
        Self {
            slots: [OutcomeSlot {
                key: K::default(),
                outcome: false,
                used: false,
            }; N],
        }
    }

    /// Return the last outcome recorded for 'key', if any.
    #[must_use]
    pub fn get(&self, key: K) -> Option<bool> {
        let slot = &self.slots[key.slot(N)];
        if slot.used && slot.key == key {
            Some(slot.outcome)
        } else {
            None
        }
    }

    pub fn put(&mut self, key: K, outcome: bool) {
        self.slots[key.slot(N)] = OutcomeSlot {
            key,
            outcome,
            used: true,
        };
    }
}

impl<K: TableKey + Default, const N: usize> Default for OutcomeTable<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_stats_tally() {
    let mut table = StatsTable::<64>::new();
    assert_eq!(table.get(17), None);

    table.record(17, true);
    table.record(17, true);
    table.record(17, false);

    let stats = table.get(17).unwrap();
    assert_eq!(stats.day_count, 2);
    assert_eq!(stats.night_count, 1);
    assert!(stats.majority());
}

#[test]
fn test_stats_tie_is_night() {
    let mut table = StatsTable::<64>::new();
    table.record(5, true);
    table.record(5, false);
    assert!(!table.get(5).unwrap().majority());
}

#[test]
fn test_stats_eviction() {
    // A single-slot table forces every key onto the same slot.
    let mut table = StatsTable::<1>::new();
    table.record(1, true);
    table.record(1, true);
    assert_eq!(table.get(1).unwrap().day_count, 2);

    // A different key evicts the resident tally and starts fresh.
    table.record(2, false);
    assert_eq!(table.get(1), None);
    assert_eq!(table.get(2).unwrap().night_count, 1);
}

#[test]
fn test_outcome_overwrite() {
    let mut table = OutcomeTable::<(u64, u64), 64>::new();
    assert_eq!(table.get((1, 2)), None);

    table.put((1, 2), true);
    assert_eq!(table.get((1, 2)), Some(true));

    // Last write wins. No tally is kept for transitions.
    table.put((1, 2), false);
    assert_eq!(table.get((1, 2)), Some(false));
}

#[test]
fn test_outcome_exact_match() {
    // Collisions in a single-slot table must not produce false hits.
    let mut table = OutcomeTable::<(u64, u64, u64), 1>::new();
    table.put((1, 2, 3), true);
    assert_eq!(table.get((3, 2, 1)), None);
    assert_eq!(table.get((1, 2, 3)), Some(true));

    table.put((3, 2, 1), false);
    assert_eq!(table.get((1, 2, 3)), None);
    assert_eq!(table.get((3, 2, 1)), Some(false));
}
