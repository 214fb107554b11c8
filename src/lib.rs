//! Classic cron expression parser and fields expander.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse classic five-fields cron expressions;
//! - expand each field into the explicit list of values it denotes.
//!
//! _This is not a cron jobs scheduler or runner._ It doesn't calculate time of upcoming events,
//! it only shows what each field of an expression means.
//!
//! ## Cron expression format
//!
//! Expression consists of exactly five whitespace-separated fields: minutes, hours, days of month, months
//! and days of week. Named schedules (like `@daily`), seconds, years and timezones aren't supported.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Report name    | Allowed values | Allowed special characters |
//! |--------------|----------------|----------------|----------------------------|
//! | Minutes      | `minute`       | 0-59           | * , - /                    |
//! | Hours        | `hour`         | 0-23           | * , - /                    |
//! | Day of Month | `day_of_month` | 1-31           | * , - /                    |
//! | Month        | `month`        | 1-12           | * , - /                    |
//! | Day of Week  | `day_of_week`  | 1-7            | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0 1 2 ... 59` for minutes;
//! - `*/N` - each N-th value starting from the field's minimum, i.e. `*/15` is `0 15 30 45` for minutes;
//! - `A-B` - range of values, both ends included, i.e. `1-5`;
//! - `A,B,C` - list of plain values, kept in the same order, i.e. `5,1,3`;
//! - `N` - single plain value.
//!
//! Each field is a single pattern: lists can't contain ranges and steps are applicable to `*` only.
//!
//! ## How to use
//!
//! The simplest way is [`expand_schedule()`], which returns the text report:
//! ```rust
//! use cron_expander::{expand_schedule, Result};
//!
//! fn report() -> Result<()> {
//!     let report = expand_schedule("*/15 0 1,15 * 1-5")?;
//!
//!     assert_eq!(
//!         report,
//!         "minute        0 15 30 45\n\
//!          hour          0\n\
//!          day_of_month  1 15\n\
//!          month         1 2 3 4 5 6 7 8 9 10 11 12\n\
//!          day_of_week   1 2 3 4 5"
//!     );
//!
//!     Ok(())
//! }
//! # report().unwrap();
//! ```
//!
//! [`Schedule`] gives access to the values of each field:
//! ```rust
//! use cron_expander::{FieldKind, Result, Schedule};
//!
//! fn values() -> Result<()> {
//!     let schedule = Schedule::new("*/10 * 10-20 2,5,12 4-7")?;
//!
//!     assert_eq!(schedule.field(FieldKind::Month).values(), &[2, 5, 12]);
//!     assert_eq!(schedule.field(FieldKind::DayOfWeek).values(), &[4, 5, 6, 7]);
//!
//!     Ok(())
//! }
//! # values().unwrap();
//! ```
//!
//! # Feature flags
//! * `cli` (default): builds `cron-expander` command line tool.
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) trait implementation
//!   for [`Schedule`] and [`ExpandedField`].

/// Crate specific Error implementation.
pub mod error;
/// Kinds of the expression fields and their bounds.
pub mod field;
/// Detection of the field's pattern.
pub mod operation;
mod pattern;
/// Cron expression parser and expander.
pub mod schedule;
mod utils;
/// Bounds validation of classified fields.
pub mod validate;

// Re-export of public entities.
pub use error::CronError;
pub use field::FieldKind;
pub use operation::Operation;
pub use pattern::{ExpandedField, Field};
pub use schedule::Schedule;
pub use validate::validate;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;

/// Type of the field's values.
pub type FieldValue = u8;

/// Parses and expands provided cron `expression` into the multi-line text report.
///
/// Each line of the report contains name of the field, padded to 14 characters, and the field's values.
/// Returns [`CronError`] of the first invalid field.
pub fn expand_schedule(expression: &str) -> Result<String> {
    Schedule::new(expression).map(|schedule| schedule.to_string())
}
