//! Data models for parsed inspections, form pre-fill and configuration.

pub mod config;
pub mod inspection;
pub mod prefill;
