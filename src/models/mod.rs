//! This module contains models that predict the time of day on the next
//! planet in an itinerary.

pub mod majority;
pub mod model;
pub mod robo;
