//! # CacheSweep
//!
//! A progress-reporting cache, log, and trash cleaner for macOS.
//!
//! CacheSweep measures and removes categories of disk-resident junk —
//! user and system caches, browser caches, logs, trash, and Xcode
//! DerivedData. It features:
//!
//! - **Category-Based Analysis**: size every cache category up front, clean later
//! - **Bounded Traversal**: a hard entry cap keeps pathological trees from stalling a scan
//! - **Live Progress**: engines publish state snapshots any front end can poll
//! - **Failure Absorption**: unreadable or locked items are skipped, never fatal
//! - **CLI as Unix Citizen**: JSON output, pipe-friendly, cron-schedulable
//! - **100% Offline**: zero telemetry, no accounts, no cloud

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod engine;
pub mod scanner;
