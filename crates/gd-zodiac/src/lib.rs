//! # gd-zodiac
//!
//! Zodiac sign records and birth-date resolution.
//!
//! The twelve [`ZodiacSign`] records are `static` data. [`resolve`] maps any
//! calendar date onto exactly one of them using inclusive (month, day)
//! windows; Capricorn is the single window that wraps the year end and Pisces
//! is the final default arm.
//!
//! ```
//! use chrono::NaiveDate;
//! use gd_zodiac::{resolve, resolve_str, SignKind};
//!
//! let date = NaiveDate::from_ymd_opt(1990, 4, 20).unwrap();
//! assert_eq!(resolve(date).kind, SignKind::Taurus);
//! assert_eq!(resolve_str("1990-12-31").unwrap().name, "Capricorn");
//! ```

mod resolve;
mod signs;

pub use resolve::{resolve, resolve_month_day, resolve_str, sign_kind_for};
pub use signs::{SignKind, ZodiacSign, all, by_key, sign};
