//! Growth criteria based on earnings per share.

mod earnings;

pub use earnings::{EarningsGrowth, EarningsGrowthConfig};
