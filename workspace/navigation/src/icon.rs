/// Symbolic icons used by the shell, rendered as Font Awesome classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Cart,
    Package,
    Tag,
    Utensils,
    Truck,
    MapPin,
    Wrench,
    Users,
    Building,
    Bell,
    Message,
    Settings,
    ChevronRight,
    Menu,
    Close,
    Logout,
}

impl Icon {
    pub fn css_class(&self) -> &'static str {
        match self {
            Icon::Dashboard => "fas fa-table-columns",
            Icon::Cart => "fas fa-cart-shopping",
            Icon::Package => "fas fa-box",
            Icon::Tag => "fas fa-tag",
            Icon::Utensils => "fas fa-utensils",
            Icon::Truck => "fas fa-truck",
            Icon::MapPin => "fas fa-location-dot",
            Icon::Wrench => "fas fa-wrench",
            Icon::Users => "fas fa-users",
            Icon::Building => "fas fa-building",
            Icon::Bell => "fas fa-bell",
            Icon::Message => "fas fa-message",
            Icon::Settings => "fas fa-gear",
            Icon::ChevronRight => "fas fa-chevron-right",
            Icon::Menu => "fas fa-bars",
            Icon::Close => "fas fa-xmark",
            Icon::Logout => "fas fa-right-from-bracket",
        }
    }
}
