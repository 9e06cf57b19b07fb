pub(crate) mod auth_guard;
pub(crate) mod form_field;
pub(crate) mod nav_item;
pub(crate) mod navigation_bridge;
pub(crate) mod user_badge;

pub use auth_guard::AuthGuard;
pub use navigation_bridge::NavigationBridge;
