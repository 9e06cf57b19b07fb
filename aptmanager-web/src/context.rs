//! Session context injected at the root of the component tree.

use crate::models::app_state::AppState;
use crate::routes::Route;
use crate::storage::{Backend, session_backend};
use gloo_timers::future::TimeoutFuture;
use shared::auth::{self, MOCK_SIGN_IN_DELAY_MS};
use shared::config::AccessPolicy;
use shared::models::UserProfile;
use shared::navigation::NavigationSignal;
use shared::session::SessionStore;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, hook, use_context, use_effect_with, use_state};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_dispatch;

/// Session store over the backend picked at start-up.
pub type Session = SessionStore<Backend>;

/// Everything the guard and the pages share: the session, the access policy
/// and the navigation channel.
///
/// Created once when the application starts and handed down through a
/// `ContextProvider`. Clones share the same state.
#[derive(Clone)]
pub struct SessionContext {
    session: Rc<Session>,
    policy: Rc<AccessPolicy>,
    navigation: NavigationSignal,
}

impl SessionContext {
    /// Build a context over an explicit backend.
    pub fn new(backend: Backend, policy: AccessPolicy) -> Self {
        Self {
            session: Rc::new(SessionStore::new(backend)),
            policy: Rc::new(policy),
            navigation: NavigationSignal::new(),
        }
    }

    /// Build a context over local storage, or a detached backend when the
    /// page has none.
    pub fn from_environment() -> Self {
        Self::new(session_backend(), AccessPolicy::default())
    }

    pub fn session(&self) -> Rc<Session> {
        Rc::clone(&self.session)
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    pub fn navigation(&self) -> &NavigationSignal {
        &self.navigation
    }

    /// Page anonymous visitors are sent to.
    pub fn login_route(&self) -> Route {
        Route::for_path(self.policy.login_path(), Route::Login)
    }

    /// Page shown after sign-in.
    pub fn home_route(&self) -> Route {
        Route::for_path(self.policy.home_path(), Route::Dashboard)
    }

    /// Where the sign-in pages send a visitor who already has a session.
    pub fn signed_in_redirect(&self) -> Option<Route> {
        self.is_authenticated().then(|| self.home_route())
    }

    /// Whether a session token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Start a mock session for `profile`.
    pub fn sign_in(&self, profile: &UserProfile) {
        auth::sign_in(&self.session, profile);
    }

    /// Tear the session down.
    pub fn sign_out(&self) {
        auth::sign_out(&self.session);
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.policy, &other.policy)
            && self.navigation == other.navigation
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .field("policy", &self.policy)
            .field("navigation", &self.navigation)
            .finish()
    }
}

/// The session context provided at the root.
///
/// Falls back to a fresh context when rendered outside the provider, which
/// only happens in isolated component tests.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::from_environment)
}

/// Sends visitors who already have a session to the home page on mount.
#[hook]
pub fn use_signed_in_redirect() {
    let context = use_session();
    let navigator = use_navigator();
    use_effect_with((), move |()| {
        if let (Some(route), Some(navigator)) = (context.signed_in_redirect(), &navigator) {
            navigator.push(&route);
        }
        || ()
    });
}

/// Handle returned by [`use_mock_sign_in`].
pub struct MockSignIn {
    /// Whether a sign-in is waiting on the simulated delay.
    pub pending: bool,
    /// Starts a sign-in for the given profile.
    pub start: Callback<UserProfile>,
}

/// Mock sign-in shared by the login and registration forms.
///
/// After the simulated delay the session and the app state are updated and
/// the visitor is sent to the home page.
#[hook]
pub fn use_mock_sign_in() -> MockSignIn {
    let context = use_session();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let pending = use_state(|| false);

    let start = {
        let pending = pending.clone();
        Callback::from(move |profile: UserProfile| {
            pending.set(true);
            let context = context.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let pending = pending.clone();
            spawn_local(async move {
                TimeoutFuture::new(MOCK_SIGN_IN_DELAY_MS).await;
                context.sign_in(&profile);
                dispatch.set(AppState {
                    user: Some(profile),
                });
                pending.set(false);
                if let Some(navigator) = navigator {
                    navigator.push(&context.home_route());
                }
            });
        })
    };

    MockSignIn {
        pending: *pending,
        start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::storage::MemoryStore;

    fn context() -> SessionContext {
        SessionContext::new(Rc::new(MemoryStore::new()), AccessPolicy::default())
    }

    #[test]
    fn test_sign_in_and_out() {
        let context = context();
        assert!(!context.is_authenticated());

        context.sign_in(&UserProfile::from_email("ada@example.com"));
        assert!(context.is_authenticated());
        assert_eq!(
            context.session().user(),
            Some(UserProfile::from_email("ada@example.com"))
        );

        context.sign_out();
        assert!(!context.is_authenticated());
        assert_eq!(context.session().user(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let context = context();
        let clone = context.clone();
        assert_eq!(context, clone);

        clone.sign_in(&UserProfile::default());
        assert!(context.is_authenticated());
    }

    #[test]
    fn test_policy_routes() {
        let context = context();
        assert_eq!(context.login_route(), Route::Login);
        assert_eq!(context.home_route(), Route::Dashboard);

        let custom = SessionContext::new(
            Rc::new(MemoryStore::new()),
            AccessPolicy {
                home_path: "/reports".to_string(),
                login_path: "/unknown".to_string(),
                ..AccessPolicy::default()
            },
        );
        assert_eq!(custom.home_route(), Route::Reports);
        assert_eq!(custom.login_route(), Route::Login);
    }

    #[test]
    fn test_signed_in_redirect() {
        let context = context();
        assert_eq!(context.signed_in_redirect(), None);

        context.sign_in(&UserProfile::from_email("ada@example.com"));
        assert_eq!(context.signed_in_redirect(), Some(Route::Dashboard));

        context.sign_out();
        assert_eq!(context.signed_in_redirect(), None);
    }

    #[test]
    fn test_signed_in_redirect_follows_home_path() {
        let context = SessionContext::new(
            Rc::new(MemoryStore::new()),
            AccessPolicy {
                home_path: "/tenants".to_string(),
                ..AccessPolicy::default()
            },
        );
        context.sign_in(&UserProfile::default());
        assert_eq!(context.signed_in_redirect(), Some(Route::Tenants));
    }

    #[test]
    fn test_separate_contexts_differ() {
        assert_ne!(context(), context());
    }
}
