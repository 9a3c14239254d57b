#![no_main]

use libfuzzer_sys::fuzz_target;
use robopredict::models::model::Predictor;
use robopredict::models::robo::RoboPredictor;

// Drive an arbitrary voyage over a tiny id space so the table slots
// collide often, and check the streak cap along the way.
fuzz_target!(|data: &[u8]| {
    let mut robo = RoboPredictor::new();
    let mut prev_outcome = false;
    let mut prev_prev_outcome = false;

    for chunk in data.chunks_exact(2) {
        let id = (chunk[0] % 16) as u64;
        let hint = chunk[1] & 1 != 0;
        let outcome = chunk[1] & 2 != 0;

        let guess = robo.predict(id, hint);
        if prev_outcome && prev_prev_outcome {
            assert!(!guess, "Streak cap violated");
        }

        robo.observe(id, outcome);
        prev_prev_outcome = prev_outcome;
        prev_outcome = outcome;
    }
});
