//! Beacon Convert Library
//!
//! Turns a classified beacon log (one free-text reading per line) into a JSON
//! array of beacons, each holding the positions reported under one ICCID.
//!
//! ## Input
//!
//! Each non-blank line may carry any subset of these markers, in any order:
//!
//! ```text
//! point: 2024-01-01 12:00:00 Mode: GPS ICCID: 123456789012345 Latitude: 45.123 Longitude: 5.456
//! ```
//!
//! Lines without markers still produce a position; lines without an ICCID are
//! grouped under `"unknown"`.
//!
//! ## Architecture Overview
//!
//! - [`models`] - [`Position`] and [`Beacon`], the output shapes
//! - [`parser`] - Per-line field extraction and the whole-file line driver
//! - [`grouper`] - Accumulates positions into beacons in first-seen order
//! - [`converter`] - Read, group, encode and write in one pass
//! - [`error`] - Conversion failures
//! - [`config`] - Logging configuration from file and environment
//! - [`logging`] - `tracing` subscriber setup
//! - [`display`] - Console confirmation
//!
//! ## Main Entry Point
//!
//! ```rust,no_run
//! use beacon_convert::{display, BeaconConverter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let summary = BeaconConverter::default().convert()?;
//! display::print_confirmation(&summary);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod converter;
pub mod display;
pub mod error;
pub mod grouper;
pub mod logging;
pub mod models;
pub mod parser;

pub use converter::{BeaconConverter, ConversionSummary};
pub use error::ConvertError;
pub use models::*;
