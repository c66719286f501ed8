//! Calendar event types.
//!
//! Events come from the school's content API and are immutable once fetched.
//! Dates are zone-less calendar dates: an event belongs to whatever day the
//! API says it does, with no timezone conversion anywhere in the portal.
//! Start and end times are display strings ("9:00 AM"), never parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A school calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    /// Display string, e.g. "9:00 AM" or "All Day"
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
}

/// Closed set of event kinds used for badge colors in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Academic,
    Festival,
    Meeting,
    Holiday,
    Other,
}
