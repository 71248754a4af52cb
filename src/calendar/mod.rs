//! Calendar arithmetic and statutory holiday computation.
//!
//! Leaves first: pure date math, then the per-region holiday rules built on
//! it, then the caching [`HolidayCalendar`] that optionally merges a remote
//! holiday source.

pub mod date_math;
mod holiday_calendar;
mod remote;
pub mod rules;

pub use holiday_calendar::HolidayCalendar;
pub use remote::{RemoteHoliday, RemoteHolidaySource};
