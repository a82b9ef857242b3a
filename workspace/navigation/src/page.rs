use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NavigationError;

/// Logical identifier of a dashboard page.
///
/// The string form (`as_str`) is what the host passes as the current page and
/// what active-entry matching compares against, so it is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PageKey {
    Dashboard,
    Orders,
    Products,
    Categories,
    Offers,
    DailyMenu,
    Drivers,
    LiveMap,
    Services,
    Customers,
    Workers,
    Branches,
    Notifications,
    Messages,
    Settings,
}

impl PageKey {
    pub const ALL: [PageKey; 15] = [
        PageKey::Dashboard,
        PageKey::Orders,
        PageKey::Products,
        PageKey::Categories,
        PageKey::Offers,
        PageKey::DailyMenu,
        PageKey::Drivers,
        PageKey::LiveMap,
        PageKey::Services,
        PageKey::Customers,
        PageKey::Workers,
        PageKey::Branches,
        PageKey::Notifications,
        PageKey::Messages,
        PageKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::Orders => "Orders",
            PageKey::Products => "Products",
            PageKey::Categories => "Categories",
            PageKey::Offers => "Offers",
            PageKey::DailyMenu => "DailyMenu",
            PageKey::Drivers => "Drivers",
            PageKey::LiveMap => "LiveMap",
            PageKey::Services => "Services",
            PageKey::Customers => "Customers",
            PageKey::Workers => "Workers",
            PageKey::Branches => "Branches",
            PageKey::Notifications => "Notifications",
            PageKey::Messages => "Messages",
            PageKey::Settings => "Settings",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                debug!(page = s, "No page key matches");
                NavigationError::UnknownPage(s.to_string())
            })
    }
}
