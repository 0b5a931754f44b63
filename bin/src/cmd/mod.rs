//! CLI subcommand modules.
//!
//! This module contains the implementations for all uncle-warren CLI subcommands.

pub(crate) mod criteria;
pub(crate) mod score;
pub(crate) mod screen;
pub(crate) mod serve;
