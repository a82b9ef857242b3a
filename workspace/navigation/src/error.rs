use thiserror::Error;

/// Error types for the navigation model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A page identifier that is not part of the menu
    #[error("Unknown page key: {0}")]
    UnknownPage(String),
}
