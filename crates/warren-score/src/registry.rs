//! Criterion registry for discovering and categorizing scoring criteria.
//!
//! This module provides metadata and discovery functionality for all criteria
//! in the warren-score library.

use crate::{
    balance::Leverage,
    growth::EarningsGrowth,
    quality::{ProfitMargin, ReturnOnEquity},
    value::Valuation,
};
use serde::{Deserialize, Serialize};
use warren_traits::Criterion;

/// Criterion category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionCategory {
    /// Price relative to earnings
    Valuation,
    /// Earnings growth
    Growth,
    /// Return on capital
    Efficiency,
    /// Balance sheet strength
    Leverage,
    /// Durable competitive advantage
    Moat,
}

impl CriterionCategory {
    /// Every category, in scoring order.
    pub const ALL: [Self; 5] = [
        Self::Valuation,
        Self::Growth,
        Self::Efficiency,
        Self::Leverage,
        Self::Moat,
    ];

    /// Display name of the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Valuation => "Valuation",
            Self::Growth => "Growth",
            Self::Efficiency => "Efficiency",
            Self::Leverage => "Leverage",
            Self::Moat => "Moat",
        }
    }

    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Valuation => "Reasonable price relative to earnings",
            Self::Growth => "Growing earnings power",
            Self::Efficiency => "Efficient allocation of shareholder capital",
            Self::Leverage => "Conservative use of debt",
            Self::Moat => "Pricing power approximated by profit margin",
        }
    }
}

/// Metadata about a criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionInfo {
    /// Unique identifier, matching [`Criterion::name`]
    pub name: &'static str,

    /// Category classification
    pub category: CriterionCategory,

    /// Metric field the criterion reads
    pub metric: &'static str,

    /// Human-readable rule
    pub rule: &'static str,
}

/// Get information about all available criteria, in scoring order.
#[must_use]
pub fn available_criteria() -> Vec<CriterionInfo> {
    vec![
        CriterionInfo {
            name: "valuation",
            category: CriterionCategory::Valuation,
            metric: "pe_ratio",
            rule: "P/E < 35, lower is better (max at 0, nothing at 35 or without earnings)",
        },
        CriterionInfo {
            name: "earnings_growth",
            category: CriterionCategory::Growth,
            metric: "eps_growth_pct",
            rule: "EPS growth > 10% for full credit, partial between 0% and 10%",
        },
        CriterionInfo {
            name: "return_on_equity",
            category: CriterionCategory::Efficiency,
            metric: "roe_pct",
            rule: "ROE > 15% for full credit, partial below",
        },
        CriterionInfo {
            name: "leverage",
            category: CriterionCategory::Leverage,
            metric: "debt_to_equity",
            rule: "D/E <= 0.5 for full credit, nothing from 2.0",
        },
        CriterionInfo {
            name: "profit_margin",
            category: CriterionCategory::Moat,
            metric: "profit_margin_pct",
            rule: "Credit proportional to margin, full from 20%",
        },
    ]
}

/// Get all criteria in a specific category.
#[must_use]
pub fn criteria_by_category(category: &CriterionCategory) -> Vec<CriterionInfo> {
    available_criteria()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific criterion by name.
#[must_use]
pub fn get_criterion_info(name: &str) -> Option<CriterionInfo> {
    available_criteria()
        .into_iter()
        .find(|info| info.name == name)
}

/// Create a criterion with its default configuration by name or alias.
#[must_use]
pub fn create_criterion(name: &str) -> Option<Box<dyn Criterion>> {
    match name {
        "valuation" | "pe" | "pe_ratio" => Some(Box::new(Valuation::default())),
        "earnings_growth" | "eps" | "eps_growth" => Some(Box::new(EarningsGrowth::default())),
        "return_on_equity" | "roe" => Some(Box::new(ReturnOnEquity::default())),
        "leverage" | "debt_to_equity" | "de" => Some(Box::new(Leverage::default())),
        "profit_margin" | "margin" | "moat" => Some(Box::new(ProfitMargin::default())),
        _ => None,
    }
}
