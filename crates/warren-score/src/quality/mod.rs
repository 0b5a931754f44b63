//! Quality criteria based on profitability and operational efficiency.
//!
//! This module provides criteria that measure the fundamental quality of businesses:
//! - Return on equity (ROE): Net income relative to shareholder equity
//! - Profit margin: Net income relative to revenue, a proxy for a moat

mod margins;
mod roe;

pub use margins::{ProfitMargin, ProfitMarginConfig};
pub use roe::{ReturnOnEquity, ReturnOnEquityConfig};
