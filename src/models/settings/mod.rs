// Settings module
// Client-side configuration for the calendar subsystem

use serde::{Deserialize, Serialize};

use crate::models::view::ViewMode;

/// Calendar configuration loaded from the platform config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the Workdesk data service.
    pub service_url: String,
    /// View mode shown on a fresh load.
    pub default_view: ViewMode,
    /// Prefill for a new event's start time, "HH:MM".
    pub default_event_start_time: String,
    /// Prefill for a new event's duration, in minutes.
    pub default_event_duration: i64,
    /// Whether deletes go through an explicit confirmation step.
    pub confirm_delete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "https://api.workdesk.app".to_string(),
            default_view: ViewMode::Month,
            default_event_start_time: "09:00".to_string(),
            default_event_duration: 60,
            confirm_delete: true,
        }
    }
}

impl Settings {
    /// Parse `default_event_start_time`, falling back to 09:00 when the
    /// stored string is malformed.
    pub fn default_start_time(&self) -> chrono::NaiveTime {
        self.default_event_start_time
            .split_once(':')
            .and_then(|(h, m)| {
                let hour = h.parse::<u32>().ok()?;
                let minute = m.parse::<u32>().ok()?;
                chrono::NaiveTime::from_hms_opt(hour, minute, 0)
            })
            .unwrap_or_else(|| chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }
}
