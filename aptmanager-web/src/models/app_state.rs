use shared::models::UserProfile;
use yewdux::Store;

/// Display state shared across the layout and the auth pages.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Profile of the signed-in user, loaded from the session at start-up.
    pub user: Option<UserProfile>,
}
