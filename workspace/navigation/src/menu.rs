use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::icon::Icon;
use crate::page::PageKey;

/// One navigable destination in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: Icon,
    pub page_key: PageKey,
    /// Text colour token applied to the icon while the entry is inactive
    pub accent: &'static str,
    pub has_badge: bool,
}

impl MenuEntry {
    const fn new(label: &'static str, icon: Icon, page_key: PageKey, accent: &'static str) -> Self {
        Self {
            label,
            icon,
            page_key,
            accent,
            has_badge: false,
        }
    }

    const fn with_badge(mut self) -> Self {
        self.has_badge = true;
        self
    }
}

static MENU_ENTRIES: [MenuEntry; 15] = [
    MenuEntry::new("لوحة التحكم", Icon::Dashboard, PageKey::Dashboard, "text-blue-500"),
    MenuEntry::new("الطلبات", Icon::Cart, PageKey::Orders, "text-emerald-500").with_badge(),
    MenuEntry::new("المنتجات", Icon::Package, PageKey::Products, "text-purple-500"),
    MenuEntry::new("الفئات", Icon::Tag, PageKey::Categories, "text-orange-500"),
    MenuEntry::new("العروض", Icon::Tag, PageKey::Offers, "text-pink-500"),
    MenuEntry::new("القائمة اليومية", Icon::Utensils, PageKey::DailyMenu, "text-amber-500"),
    MenuEntry::new("السائقين", Icon::Truck, PageKey::Drivers, "text-cyan-500"),
    MenuEntry::new("الخريطة الحية", Icon::MapPin, PageKey::LiveMap, "text-red-500"),
    MenuEntry::new("الخدمات", Icon::Wrench, PageKey::Services, "text-indigo-500"),
    MenuEntry::new("العملاء", Icon::Users, PageKey::Customers, "text-teal-500"),
    MenuEntry::new("العمال", Icon::Users, PageKey::Workers, "text-lime-500"),
    MenuEntry::new("الفروع", Icon::Building, PageKey::Branches, "text-violet-500"),
    MenuEntry::new("الإشعارات", Icon::Bell, PageKey::Notifications, "text-yellow-500"),
    MenuEntry::new("الرسائل", Icon::Message, PageKey::Messages, "text-rose-500"),
    MenuEntry::new("الإعدادات", Icon::Settings, PageKey::Settings, "text-slate-500"),
];

/// The sidebar menu in rendering order.
pub fn menu_entries() -> &'static [MenuEntry] {
    &MENU_ENTRIES
}

/// Exact string comparison against the entry's page key.
pub fn is_active(entry: &MenuEntry, current_page: &str) -> bool {
    entry.page_key.as_str() == current_page
}

pub fn active_entry(current_page: &str) -> Option<&'static MenuEntry> {
    let found = MENU_ENTRIES.iter().find(|entry| is_active(entry, current_page));
    trace!(current_page, active = ?found.map(|e| e.page_key), "Resolved active menu entry");
    found
}

/// Pending-item counts supplied by the host for badge-capable entries.
///
/// The shell has no data source of its own; an empty map draws no badges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingCounts(BTreeMap<PageKey, u32>);

impl PendingCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, page: PageKey, count: u32) {
        self.0.insert(page, count);
    }

    pub fn get(&self, page: PageKey) -> u32 {
        self.0.get(&page).copied().unwrap_or(0)
    }
}

impl FromIterator<(PageKey, u32)> for PendingCounts {
    fn from_iter<I: IntoIterator<Item = (PageKey, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Text for the entry's badge, if one should be drawn.
pub fn badge_label(entry: &MenuEntry, counts: &PendingCounts) -> Option<String> {
    if !entry.has_badge {
        return None;
    }
    match counts.get(entry.page_key) {
        0 => None,
        n if n > 99 => Some("99+".to_string()),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_keys_are_unique() {
        let keys: HashSet<PageKey> = menu_entries().iter().map(|e| e.page_key).collect();
        assert_eq!(keys.len(), menu_entries().len());
    }

    #[test]
    fn test_menu_order() {
        let keys: Vec<PageKey> = menu_entries().iter().map(|e| e.page_key).collect();
        assert_eq!(keys, PageKey::ALL.to_vec());
        assert_eq!(menu_entries()[0].page_key, PageKey::Dashboard);
        assert_eq!(menu_entries()[14].page_key, PageKey::Settings);
    }

    #[test]
    fn test_only_orders_has_badge() {
        let badged: Vec<PageKey> = menu_entries()
            .iter()
            .filter(|e| e.has_badge)
            .map(|e| e.page_key)
            .collect();
        assert_eq!(badged, vec![PageKey::Orders]);
    }

    #[test]
    fn test_exactly_one_active_for_known_key() {
        for key in PageKey::ALL {
            let active: Vec<&MenuEntry> = menu_entries()
                .iter()
                .filter(|e| is_active(e, key.as_str()))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page_key, key);
        }
    }

    #[test]
    fn test_no_active_for_unknown_key() {
        for current in ["", "Home", "orders", "Orders/42", "Order"] {
            assert_eq!(menu_entries().iter().filter(|e| is_active(e, current)).count(), 0);
            assert!(active_entry(current).is_none());
        }
    }

    #[test]
    fn test_active_entry() {
        let entry = active_entry("LiveMap").expect("LiveMap is in the menu");
        assert_eq!(entry.label, "الخريطة الحية");
        assert_eq!(entry.icon, Icon::MapPin);
    }

    #[test]
    fn test_badge_label() {
        let orders = active_entry("Orders").unwrap();
        let products = active_entry("Products").unwrap();

        let mut counts = PendingCounts::new();
        assert_eq!(badge_label(orders, &counts), None);

        counts.set(PageKey::Orders, 7);
        counts.set(PageKey::Products, 3);
        assert_eq!(badge_label(orders, &counts), Some("7".to_string()));
        assert_eq!(badge_label(products, &counts), None);

        counts.set(PageKey::Orders, 100);
        assert_eq!(badge_label(orders, &counts), Some("99+".to_string()));
    }

    #[test]
    fn test_pending_counts_from_json() {
        let counts: PendingCounts = serde_json::from_str(r#"{"Orders": 4}"#).unwrap();
        assert_eq!(counts.get(PageKey::Orders), 4);
        assert_eq!(counts.get(PageKey::Drivers), 0);

        let collected: PendingCounts = [(PageKey::Orders, 4)].into_iter().collect();
        assert_eq!(collected, counts);
    }
}
