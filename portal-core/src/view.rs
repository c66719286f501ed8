//! Explicit view-state structs for the portal shell.
//!
//! Section selection, the profile dropdown and the calendar's view mode are
//! single-owner, short-lived state. They are modeled as plain structs with
//! transition methods instead of ambient globals, so a renderer owns exactly
//! one `PortalView` and threads it through.

use serde::{Deserialize, Serialize};

/// Tabs of the dashboard. Profile is reachable from the dropdown only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalSection {
    Gallery,
    Calendar,
    Downloads,
    Profile,
}

/// Month grid or a flat chronological list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarViewMode {
    #[default]
    Month,
    List,
}

/// The outermost state: either the login gate or the dashboard.
///
/// Signing out discards the whole dashboard state, so the next sign-in
/// starts from a fresh [`PortalView`] (the original reloaded the page to
/// the same effect).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PortalShell {
    #[default]
    LoginGate,
    Dashboard(PortalView),
}

impl PortalShell {
    /// Called once the authenticator accepts the submitted credentials
    pub fn sign_in(&mut self) {
        *self = PortalShell::Dashboard(PortalView::default());
    }

    /// The Sign Out menu item: back to the login gate
    pub fn sign_out(&mut self) {
        *self = PortalShell::LoginGate;
    }

    pub fn dashboard(&self) -> Option<&PortalView> {
        match self {
            PortalShell::Dashboard(view) => Some(view),
            PortalShell::LoginGate => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut PortalView> {
        match self {
            PortalShell::Dashboard(view) => Some(view),
            PortalShell::LoginGate => None,
        }
    }
}

/// State of the dashboard shell for one signed-in viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalView {
    pub section: PortalSection,
    pub profile_menu_open: bool,
    pub calendar_mode: CalendarViewMode,
}

impl Default for PortalView {
    /// A fresh login lands on the gallery
    fn default() -> Self {
        PortalView {
            section: PortalSection::Gallery,
            profile_menu_open: false,
            calendar_mode: CalendarViewMode::default(),
        }
    }
}

impl PortalView {
    pub fn open_section(&mut self, section: PortalSection) {
        self.section = section;
        self.profile_menu_open = false;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    pub fn set_calendar_mode(&mut self, mode: CalendarViewMode) {
        self.calendar_mode = mode;
    }
}

/// The editable profile form. Nothing here is persisted anywhere; it lives
/// and dies with the view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub relationship: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_starts_at_the_login_gate() {
        let shell = PortalShell::default();
        assert_eq!(shell, PortalShell::LoginGate);
        assert!(shell.dashboard().is_none());
    }

    #[test]
    fn test_sign_out_discards_dashboard_state() {
        let mut shell = PortalShell::default();
        shell.sign_in();

        let view = shell.dashboard_mut().expect("signed in");
        view.open_section(PortalSection::Downloads);
        view.set_calendar_mode(CalendarViewMode::List);

        shell.sign_out();
        assert_eq!(shell, PortalShell::LoginGate);

        // Signing back in starts from a fresh view, not the old one
        shell.sign_in();
        let view = shell.dashboard().expect("signed in again");
        assert_eq!(view.section, PortalSection::Gallery);
        assert_eq!(view.calendar_mode, CalendarViewMode::Month);
    }

    #[test]
    fn test_fresh_view_shows_gallery_with_closed_menu() {
        let view = PortalView::default();
        assert_eq!(view.section, PortalSection::Gallery);
        assert!(!view.profile_menu_open);
        assert_eq!(view.calendar_mode, CalendarViewMode::Month);
    }

    #[test]
    fn test_opening_a_section_closes_the_profile_menu() {
        let mut view = PortalView::default();
        view.toggle_profile_menu();
        assert!(view.profile_menu_open);

        view.open_section(PortalSection::Profile);
        assert_eq!(view.section, PortalSection::Profile);
        assert!(!view.profile_menu_open);
    }

    #[test]
    fn test_calendar_mode_switches_independently_of_section() {
        let mut view = PortalView::default();
        view.set_calendar_mode(CalendarViewMode::List);
        view.open_section(PortalSection::Calendar);
        assert_eq!(view.calendar_mode, CalendarViewMode::List);
    }
}
