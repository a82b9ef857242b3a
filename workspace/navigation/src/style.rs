//! Class composition for the shell, as pure functions of the UI flags.
//!
//! The layout is right-to-left: the sidebar is pinned to the right edge and the
//! content region is inset from the right.

use std::fmt;

use crate::icon::Icon;
use crate::menu::MenuEntry;
use crate::state::NavigationUiState;

/// Ordered list of static utility classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: &'static str) -> Self {
        self.0.push(class);
        self
    }

    pub fn with_if(self, condition: bool, class: &'static str) -> Self {
        if condition { self.with(class) } else { self }
    }

    /// True when `token` is one of the whitespace-separated classes.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied().flat_map(str::split_whitespace)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.tokens() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

const ACTIVE_ICON: &str = "text-blue-600";

pub fn sidebar_classes(state: &NavigationUiState) -> ClassList {
    ClassList::new()
        .with("fixed top-0 right-0 h-full bg-white border-l border-slate-200 z-50 transition-all duration-300")
        .with("lg:translate-x-0")
        .with(if state.mobile_menu_open {
            "translate-x-0"
        } else {
            "translate-x-full lg:translate-x-0"
        })
        .with(if state.sidebar_expanded { "w-64" } else { "w-20" })
}

/// The inset always matches the sidebar width so content is never covered.
pub fn content_classes(state: &NavigationUiState) -> ClassList {
    ClassList::new()
        .with("transition-all duration-300 min-h-screen")
        .with("pt-16 lg:pt-0")
        .with(if state.sidebar_expanded { "lg:mr-64" } else { "lg:mr-20" })
}

pub fn nav_link_classes(active: bool) -> ClassList {
    ClassList::new()
        .with("flex items-center gap-3 px-3 py-2.5 rounded-xl transition-all duration-200")
        .with(if active {
            "bg-blue-50 text-blue-600"
        } else {
            "text-slate-600 hover:bg-slate-50 hover:text-slate-900"
        })
}

pub fn nav_icon_classes(entry: &MenuEntry, active: bool) -> ClassList {
    ClassList::new()
        .with(entry.icon.css_class())
        .with("w-5 flex-shrink-0")
        .with(if active { ACTIVE_ICON } else { entry.accent })
}

pub fn collapse_chevron_classes(state: &NavigationUiState) -> ClassList {
    ClassList::new()
        .with(Icon::ChevronRight.css_class())
        .with("text-sm transition-transform")
        .with_if(!state.sidebar_expanded, "rotate-180")
}

pub fn user_section_classes(state: &NavigationUiState) -> ClassList {
    ClassList::new()
        .with("flex items-center gap-3")
        .with_if(!state.sidebar_expanded, "justify-center")
}

pub fn mobile_toggle_icon(state: &NavigationUiState) -> Icon {
    if state.mobile_menu_open {
        Icon::Close
    } else {
        Icon::Menu
    }
}
