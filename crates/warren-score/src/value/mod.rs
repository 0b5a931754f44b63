//! Valuation criteria comparing price to earnings.
//!
//! Buffett's rule of thumb: a wonderful business at a fair price beats a fair
//! business at a wonderful price, but the price still has to be sane.

mod valuation;

pub use valuation::{Valuation, ValuationConfig};
