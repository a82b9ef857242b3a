use tracing::debug;

/// Viewport width at which the sidebar becomes permanently visible.
///
/// Matches the Tailwind `lg` breakpoint; the markup applies the desktop case
/// through `lg:` classes, and these rules describe what those classes produce.
pub const DESKTOP_MIN_WIDTH_PX: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width_px: u32) -> Self {
        if width_px >= DESKTOP_MIN_WIDTH_PX {
            Breakpoint::Desktop
        } else {
            Breakpoint::Compact
        }
    }
}

/// User interactions that change the shell's local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Chevron in the sidebar header
    ToggleSidebar,
    /// Menu button in the compact header
    ToggleMobileMenu,
    /// Tap on the dismiss overlay
    DismissOverlay,
    /// Any menu entry was chosen
    SelectEntry,
}

/// View-local toggle pair owned by one mounted shell.
///
/// The two flags are independent: no action changes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationUiState {
    pub sidebar_expanded: bool,
    pub mobile_menu_open: bool,
}

impl Default for NavigationUiState {
    fn default() -> Self {
        Self {
            sidebar_expanded: true,
            mobile_menu_open: false,
        }
    }
}

impl NavigationUiState {
    pub fn apply(self, action: NavAction) -> Self {
        let next = match action {
            NavAction::ToggleSidebar => Self {
                sidebar_expanded: !self.sidebar_expanded,
                ..self
            },
            NavAction::ToggleMobileMenu => Self {
                mobile_menu_open: !self.mobile_menu_open,
                ..self
            },
            NavAction::DismissOverlay | NavAction::SelectEntry => Self {
                mobile_menu_open: false,
                ..self
            },
        };
        debug!(?action, ?next, "Navigation state transition");
        next
    }

    /// Whether the sidebar panel is on screen. On desktop the mobile flag is
    /// ignored but left untouched.
    pub fn sidebar_visible(&self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Desktop => true,
            Breakpoint::Compact => self.mobile_menu_open,
        }
    }

    /// The dismiss overlay only exists below the desktop breakpoint.
    pub fn overlay_visible(&self, breakpoint: Breakpoint) -> bool {
        breakpoint == Breakpoint::Compact && self.mobile_menu_open
    }

    /// Labels, subtitle and logout button are shown only when expanded.
    pub fn shows_labels(&self) -> bool {
        self.sidebar_expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states() -> Vec<NavigationUiState> {
        let mut states = Vec::new();
        for sidebar_expanded in [true, false] {
            for mobile_menu_open in [true, false] {
                states.push(NavigationUiState {
                    sidebar_expanded,
                    mobile_menu_open,
                });
            }
        }
        states
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationUiState::default();
        assert!(state.sidebar_expanded);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_toggle_sidebar_only_flips_sidebar() {
        for state in all_states() {
            let next = state.apply(NavAction::ToggleSidebar);
            assert_eq!(next.sidebar_expanded, !state.sidebar_expanded);
            assert_eq!(next.mobile_menu_open, state.mobile_menu_open);
        }
    }

    #[test]
    fn test_toggle_mobile_only_flips_mobile() {
        for state in all_states() {
            let next = state.apply(NavAction::ToggleMobileMenu);
            assert_eq!(next.mobile_menu_open, !state.mobile_menu_open);
            assert_eq!(next.sidebar_expanded, state.sidebar_expanded);
        }
    }

    #[test]
    fn test_select_entry_closes_mobile_menu() {
        for state in all_states() {
            let next = state.apply(NavAction::SelectEntry);
            assert!(!next.mobile_menu_open);
            assert_eq!(next.sidebar_expanded, state.sidebar_expanded);
        }
    }

    #[test]
    fn test_overlay_dismiss_closes_mobile_menu() {
        let open = NavigationUiState::default().apply(NavAction::ToggleMobileMenu);
        assert!(open.overlay_visible(Breakpoint::Compact));

        let closed = open.apply(NavAction::DismissOverlay);
        assert!(!closed.mobile_menu_open);
        assert!(!closed.overlay_visible(Breakpoint::Compact));
    }

    #[test]
    fn test_desktop_suppresses_mobile_flag() {
        let closed = NavigationUiState::default();
        let open = closed.apply(NavAction::ToggleMobileMenu);

        assert!(closed.sidebar_visible(Breakpoint::Desktop));
        assert!(open.sidebar_visible(Breakpoint::Desktop));
        assert!(!open.overlay_visible(Breakpoint::Desktop));
        assert!(open.mobile_menu_open);

        assert!(!closed.sidebar_visible(Breakpoint::Compact));
        assert!(open.sidebar_visible(Breakpoint::Compact));
    }

    #[test]
    fn test_compact_overlay_tracks_mobile_flag() {
        for state in all_states() {
            assert_eq!(state.overlay_visible(Breakpoint::Compact), state.mobile_menu_open);
            assert_eq!(state.sidebar_visible(Breakpoint::Compact), state.mobile_menu_open);
            assert!(state.sidebar_visible(Breakpoint::Desktop));
            assert!(!state.overlay_visible(Breakpoint::Desktop));
        }
    }

    #[test]
    fn test_breakpoint_from_width() {
        assert_eq!(Breakpoint::from_width(375), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(1023), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(1024), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(1920), Breakpoint::Desktop);
    }
}
