pub mod layout;
pub mod mobile_header;
pub mod sidebar;
pub mod user_section;

pub use layout::Layout;

pub const BRAND_NAME: &str = "Alma";
pub const BRAND_INITIAL: &str = "A";
pub const BRAND_SUBTITLE: &str = "لوحة التحكم";
