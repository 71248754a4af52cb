//! Application state for the categorization engine API.

use std::sync::Arc;

use crate::calendar::HolidayCalendar;
use crate::config::EngineConfig;

/// Shared application state.
///
/// Carries the validated configuration and the holiday calendar shared by
/// every request handler; the calendar owns the only cross-request cache.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: EngineConfig, calendar: HolidayCalendar) -> Self {
        Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the shared holiday calendar.
    pub fn calendar(&self) -> Arc<HolidayCalendar> {
        self.calendar.clone()
    }
}
