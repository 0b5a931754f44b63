//! Balance sheet criteria.

mod leverage;

pub use leverage::{Leverage, LeverageConfig};
