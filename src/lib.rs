//! Global Food Waste Analytics
//!
//! Loads a food waste CSV once, filters it by country, year and food category,
//! and computes the summary metrics and grouped series behind the dashboard.

pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod gui;
pub mod logging;
pub mod stats;
