use tracing::trace;

use crate::menu::{MenuEntry, PendingCounts, badge_label, is_active, menu_entries};
use crate::page::PageKey;
use crate::state::NavigationUiState;
use crate::style::{self, ClassList};

/// Everything the sidebar needs to draw one menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub page_key: PageKey,
    pub label: &'static str,
    pub active: bool,
    pub show_label: bool,
    pub badge: Option<String>,
    pub link_classes: ClassList,
    pub icon_classes: ClassList,
}

impl NavItemView {
    fn build(
        entry: &MenuEntry,
        state: &NavigationUiState,
        current_page: &str,
        counts: &PendingCounts,
    ) -> Self {
        let active = is_active(entry, current_page);
        Self {
            page_key: entry.page_key,
            label: entry.label,
            active,
            show_label: state.shows_labels(),
            badge: badge_label(entry, counts),
            link_classes: style::nav_link_classes(active),
            icon_classes: style::nav_icon_classes(entry, active),
        }
    }
}

/// Sidebar links for the given state, in menu order.
///
/// Every entry is always produced; the toggles only change how each is drawn.
pub fn nav_items(
    state: &NavigationUiState,
    current_page: &str,
    counts: &PendingCounts,
) -> Vec<NavItemView> {
    trace!(current_page, ?state, "Building sidebar items");
    menu_entries()
        .iter()
        .map(|entry| NavItemView::build(entry, state, current_page, counts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NavAction;

    fn all_states() -> Vec<NavigationUiState> {
        let base = NavigationUiState::default();
        vec![
            base,
            base.apply(NavAction::ToggleSidebar),
            base.apply(NavAction::ToggleMobileMenu),
            base.apply(NavAction::ToggleSidebar).apply(NavAction::ToggleMobileMenu),
        ]
    }

    #[test]
    fn test_rendered_keys_match_menu_for_every_state() {
        let expected: Vec<PageKey> = menu_entries().iter().map(|e| e.page_key).collect();
        for state in all_states() {
            let keys: Vec<PageKey> = nav_items(&state, "Orders", &PendingCounts::new())
                .iter()
                .map(|item| item.page_key)
                .collect();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_single_active_item() {
        let items = nav_items(&NavigationUiState::default(), "Customers", &PendingCounts::new());
        let active: Vec<&NavItemView> = items.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].page_key, PageKey::Customers);
        assert!(active[0].link_classes.contains("bg-blue-50"));
    }

    #[test]
    fn test_no_active_item_for_unknown_page() {
        let items = nav_items(&NavigationUiState::default(), "customers", &PendingCounts::new());
        assert!(items.iter().all(|item| !item.active));
    }

    #[test]
    fn test_labels_hidden_when_collapsed() {
        let collapsed = NavigationUiState::default().apply(NavAction::ToggleSidebar);
        let items = nav_items(&collapsed, "Dashboard", &PendingCounts::new());
        assert!(items.iter().all(|item| !item.show_label));

        let items = nav_items(&NavigationUiState::default(), "Dashboard", &PendingCounts::new());
        assert!(items.iter().all(|item| item.show_label));
    }

    #[test]
    fn test_badge_only_on_orders() {
        let counts: PendingCounts = [(PageKey::Orders, 12), (PageKey::Messages, 5)]
            .into_iter()
            .collect();
        let items = nav_items(&NavigationUiState::default(), "Dashboard", &counts);

        let badged: Vec<(PageKey, String)> = items
            .into_iter()
            .filter_map(|item| item.badge.map(|b| (item.page_key, b)))
            .collect();
        assert_eq!(badged, vec![(PageKey::Orders, "12".to_string())]);
    }
}
