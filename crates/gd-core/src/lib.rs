//! # gd-core
//!
//! Core types, taxonomy tables, and error types for Good Dates.
//!
//! This crate provides the foundational types shared across all Good Dates crates:
//! - Closed key enums (`Element`, `Category`, `TimeOfDay`) with string conversions
//! - Static taxonomy tables (element colors, category colors, time-of-day slots)
//! - The upstream "good dates" response shape, read but never mutated here
//! - Calendar entry and power period descriptors handed to the UI layer
//! - Date-like string parsing shared by the resolver and calendar crates
//! - Cross-cutting error types

pub mod dates;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod taxonomy;

pub use dates::parse_calendar_date;
pub use enums::{Category, Element, TimeOfDay};
pub use errors::CoreError;
