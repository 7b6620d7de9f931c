#![forbid(unsafe_code)]

pub mod aggregate;
pub mod attempts;
pub mod error;
pub mod parts;
pub mod stats;
pub mod trend;

#[cfg(test)]
pub(crate) mod testing;

pub use tracker_core::Clock;

pub use aggregate::{PartAggregate, TestAggregate, by_test, by_test_part};
pub use attempts::AttemptService;
pub use error::AttemptServiceError;
pub use parts::{PartSeries, PartSeriesSet, build_part_series};
pub use stats::{StatsRow, question_type_stats};
pub use trend::{TrendPoint, TrendSeries, build_trend};
