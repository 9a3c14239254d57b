//! This is the command line tool that simulates a voyage through a toy
//! galaxy and reports how the Robo predictor does against the spaceship
//! computer it is given as a hint source.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, Command};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Zipf};
use robopredict::models::majority::MajorityModel;
use robopredict::models::model::Predictor;
use robopredict::models::robo::RoboPredictor;

use std::time::Instant;

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Simulation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

/// Spread a small planet index over the 64-bit identifier space.
fn planet_id(index: u64) -> u64 {
    index.wrapping_mul(0x517c_c1b7_2722_0a95)
}

/// The deterministic part of the galaxy: whether a hop from 'prev' to
/// 'cur' lands in daylight.
fn transition_day(prev: u64, cur: u64) -> bool {
    let word = prev.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ cur;
    word.count_ones() % 2 == 0
}

/// A toy galaxy. Each planet has an intrinsic day bias; consecutive hops
/// follow a fixed transition pattern that the predictor can learn.
struct Galaxy {
    day_bias: Vec<f64>,
    noise: f64,
}

impl Galaxy {
    fn new(planets: usize, noise: f64, rng: &mut StdRng) -> Self {
        let day_bias = (0..planets).map(|_| rng.gen_range(0.1..0.9)).collect();
        Self { day_bias, noise }
    }

    fn time_of_day(
        &self,
        prev: Option<u64>,
        cur_index: usize,
        rng: &mut StdRng,
    ) -> bool {
        if rng.gen_bool(self.noise) {
            return rng.gen_bool(0.5);
        }
        match prev {
            Some(prev) => transition_day(prev, planet_id(cur_index as u64)),
            None => rng.gen_bool(self.day_bias[cur_index]),
        }
    }
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("planets")
                .long("planets")
                .help("Number of distinct planets in the galaxy")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("512"),
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .help("Number of planets to visit")
                .value_parser(value_parser!(usize))
                .default_value("100000"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the itinerary and the galaxy")
                .value_parser(value_parser!(u64))
                .default_value("42"),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .help("Fraction of outcomes replaced by a coin flip")
                .value_parser(value_parser!(f64))
                .default_value("0.1"),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let planets = *matches.get_one::<u64>("planets").unwrap();
    let steps = *matches.get_one::<usize>("steps").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let noise = *matches.get_one::<f64>("noise").unwrap();

    let mut rng = StdRng::seed_from_u64(seed);
    let galaxy = Galaxy::new(planets as usize, noise, &mut rng);
    let zipf = Zipf::new(planets, 1.1).expect("Bad Zipf parameters");

    let mut robo = RoboPredictor::new();
    let mut spaceship = MajorityModel::new();

    let mut prev: Option<u64> = None;
    let mut robo_correct = 0usize;
    let mut spaceship_correct = 0usize;
    let timer = Timer::new();

    for _ in 0..steps {
        // Popular planets come up often; the tail is rarely revisited.
        let index = zipf.sample(&mut rng) as usize - 1;
        let id = planet_id(index as u64);

        let hint = spaceship.predict(id, false);
        let guess = robo.predict(id, hint);
        let outcome = galaxy.time_of_day(prev, index, &mut rng);

        robo_correct += (guess == outcome) as usize;
        spaceship_correct += (hint == outcome) as usize;

        robo.observe(id, outcome);
        spaceship.observe(id, outcome);
        prev = Some(id);
    }

    log::info!("Visited {} planets out of a galaxy of {}.", steps, planets);
    log::info!(
        "Robo:      {} correct ({:.2}%).",
        robo_correct,
        100.0 * robo_correct as f64 / steps as f64
    );
    log::info!(
        "Spaceship: {} correct ({:.2}%).",
        spaceship_correct,
        100.0 * spaceship_correct as f64 / steps as f64
    );
    drop(timer);
}
