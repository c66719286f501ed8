//! Core types and view logic for the school parent portal.
//!
//! This crate holds everything that does not touch the network:
//! - `event` and `calendar` for the month grid and upcoming-events list
//! - `files` for download records and the filter engine
//! - `gallery` for photo albums
//! - `fetch` for the per-section load/fallback state machine
//! - `auth` for the pluggable login check
//! - `view` for explicit portal view state

pub mod auth;
pub mod calendar;
pub mod error;
pub mod event;
pub mod fetch;
pub mod files;
pub mod gallery;
pub mod sample;
pub mod view;

pub use auth::{Authenticator, Credentials};
pub use calendar::{CalendarDay, MonthCursor, month_grid, upcoming_events};
pub use error::{FetchError, FetchResult};
pub use event::{CalendarEvent, EventType};
pub use fetch::{DataSource, FetchTicket, Section, SectionPhase};
pub use files::{CategoryFilter, DownloadFile, FileCategory, FileFilter, FileType, TypeFilter};
pub use gallery::{Photo, PhotoAlbum};
pub use view::{CalendarViewMode, ParentProfile, PortalSection, PortalShell, PortalView};
