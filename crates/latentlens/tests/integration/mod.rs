//! Integration tests for latentlens.
//!
//! These tests load datasets from JSON files on disk through the TOML config
//! and exercise the explorer end to end.

pub mod concurrency;
pub mod explorer;
pub mod loading;
pub mod scenarios;
