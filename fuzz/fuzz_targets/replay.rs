#![no_main]

use libfuzzer_sys::fuzz_target;
use robopredict::models::model::Predictor;
use robopredict::models::robo::RoboPredictor;

// Replaying the same stream into two fresh predictors must produce
// identical predictions at every step.
fuzz_target!(|data: &[u8]| {
    let mut first = RoboPredictor::new();
    let mut second = RoboPredictor::new();

    for chunk in data.chunks_exact(9) {
        let id = u64::from_le_bytes(chunk[..8].try_into().unwrap());
        let hint = chunk[8] & 1 != 0;
        let outcome = chunk[8] & 2 != 0;

        assert_eq!(first.predict(id, hint), second.predict(id, hint));
        first.observe(id, outcome);
        second.observe(id, outcome);
    }
});
