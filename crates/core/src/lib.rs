#![forbid(unsafe_code)]

pub mod band;
pub mod config;
pub mod error;
pub mod model;
pub mod time;

pub use band::{accuracy, band_score, part_score};
pub use config::{LISTENING_TYPES, READING_TYPES, TrackerConfig, question_types};
pub use error::Error;
pub use time::Clock;
