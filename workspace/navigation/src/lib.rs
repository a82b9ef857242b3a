//! Target-independent model of the admin dashboard navigation shell.
//! Everything here is plain data and pure functions so the frontend only has
//! to wire it into components, and the behaviour can be tested natively.

mod error;
mod icon;
mod menu;
mod page;
mod session;
mod state;
pub mod style;
mod view;

pub use error::NavigationError;
pub use icon::Icon;
pub use menu::{MenuEntry, PendingCounts, active_entry, badge_label, is_active, menu_entries};
pub use page::PageKey;
pub use session::{SessionClient, request_logout};
pub use state::{Breakpoint, DESKTOP_MIN_WIDTH_PX, NavAction, NavigationUiState};
pub use view::{NavItemView, nav_items};
