//! # Route guard
//!
//! Decides whether the current path may render. The decision is a pure
//! function of the path and token presence; [`RouteGuard`] wraps it with the
//! injected session and re-runs it on every navigation event.

use crate::config::AccessPolicy;
use crate::navigation::{NavigationSignal, Subscription};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Whether guarded content may render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GuardState {
    /// Render nothing. Also the state before the first evaluation.
    #[default]
    Unauthorized,
    /// Render the guarded children.
    Authorized,
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unauthorized => "unauthorized",
            Self::Authorized => "authorized",
        })
    }
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardDecision {
    /// Resulting state.
    pub state: GuardState,
    /// Path to navigate to, set only when an anonymous visitor hits a
    /// protected path.
    pub redirect: Option<String>,
}

impl GuardDecision {
    /// Render without redirecting.
    #[must_use]
    pub fn authorized() -> Self {
        Self {
            state: GuardState::Authorized,
            redirect: None,
        }
    }

    /// Render nothing and send the visitor to `target`.
    #[must_use]
    pub fn redirect_to(target: impl Into<String>) -> Self {
        Self {
            state: GuardState::Unauthorized,
            redirect: Some(target.into()),
        }
    }

    /// Shorthand for `state == Authorized`.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.state == GuardState::Authorized
    }
}

/// Pure guard rule.
///
/// Protected paths need a token; anonymous visitors are redirected to the
/// policy's login path. Every other path is authorized regardless of the
/// token.
#[must_use]
pub fn decide(policy: &AccessPolicy, path: &str, has_token: bool) -> GuardDecision {
    if policy.is_protected(path) && !has_token {
        GuardDecision::redirect_to(policy.login_path())
    } else {
        GuardDecision::authorized()
    }
}

/// Stateful guard bound to a session.
///
/// Starts [`GuardState::Unauthorized`] so protected content never flashes
/// before the first evaluation.
pub struct RouteGuard<S> {
    policy: AccessPolicy,
    session: Rc<SessionStore<S>>,
    state: Cell<GuardState>,
    last: RefCell<Option<(String, GuardDecision)>>,
}

impl<S: KeyValueStore + 'static> RouteGuard<S> {
    /// Create a guard that has not evaluated anything yet.
    #[must_use]
    pub fn new(policy: AccessPolicy, session: Rc<SessionStore<S>>) -> Self {
        Self {
            policy,
            session,
            state: Cell::new(GuardState::default()),
            last: RefCell::new(None),
        }
    }

    /// State after the most recent evaluation.
    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state.get()
    }

    /// The policy this guard enforces.
    #[must_use]
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Evaluate `path` against the current session and record the result.
    #[must_use]
    pub fn evaluate(&self, path: &str) -> GuardDecision {
        let decision = decide(&self.policy, path, self.session.is_authenticated());
        self.state.set(decision.state);
        *self.last.borrow_mut() = Some((path.to_string(), decision.clone()));
        match &decision.redirect {
            Some(target) => log::info!("no session for protected path {path}, redirecting to {target}"),
            None => log::debug!("guard {} for {path}", decision.state),
        }
        decision
    }

    /// Like [`evaluate`](Self::evaluate), but returns `None` when `path` is
    /// the path evaluated last and the outcome has not changed.
    ///
    /// A stale re-emission of the current path then cannot trigger a second
    /// redirect.
    #[must_use]
    pub fn evaluate_changed(&self, path: &str) -> Option<GuardDecision> {
        let previous = self.last.borrow_mut().take();
        let decision = self.evaluate(path);
        match previous {
            Some((last_path, last_decision)) if last_path == path && last_decision == decision => {
                None
            }
            _ => Some(decision),
        }
    }

    /// Re-evaluate on every path `signal` emits and report each changed
    /// decision to `on_decision`.
    ///
    /// The subscription holds the guard weakly: once every other handle is
    /// dropped, events are ignored.
    #[must_use = "dropping the subscription detaches the guard"]
    pub fn attach(
        self: &Rc<Self>,
        signal: &NavigationSignal,
        on_decision: impl Fn(&GuardDecision) + 'static,
    ) -> Subscription {
        let guard = Rc::downgrade(self);
        signal.subscribe(move |path| {
            if let Some(guard) = guard.upgrade() {
                if let Some(decision) = guard.evaluate_changed(path) {
                    on_decision(&decision);
                }
            }
        })
    }
}

impl<S> fmt::Debug for RouteGuard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGuard")
            .field("policy", &self.policy)
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PROTECTED_PREFIXES;
    use crate::models::SessionToken;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;

    fn guard() -> (Rc<SessionStore<MemoryStore>>, Rc<RouteGuard<MemoryStore>>) {
        let session = Rc::new(SessionStore::new(MemoryStore::new()));
        let guard = Rc::new(RouteGuard::new(AccessPolicy::default(), Rc::clone(&session)));
        (session, guard)
    }

    #[test]
    fn test_protected_paths_without_token_redirect_to_login() {
        let policy = AccessPolicy::default();
        for prefix in DEFAULT_PROTECTED_PREFIXES {
            for path in [prefix.to_string(), format!("{prefix}/42"), format!("{prefix}?q=1")] {
                let decision = decide(&policy, &path, false);
                assert_eq!(decision.state, GuardState::Unauthorized, "{path}");
                assert_eq!(decision.redirect.as_deref(), Some("/login"), "{path}");
            }
        }
    }

    #[test]
    fn test_public_paths_are_authorized_regardless_of_token() {
        let policy = AccessPolicy::default();
        for path in ["/", "/login", "/register", "/404", "/about", ""] {
            for has_token in [false, true] {
                assert_eq!(decide(&policy, path, has_token), GuardDecision::authorized());
            }
        }
    }

    #[test]
    fn test_protected_path_with_token_is_authorized() {
        let decision = decide(&AccessPolicy::default(), "/dashboard", true);
        assert!(decision.is_authorized());
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn test_guard_starts_unauthorized() {
        let (_session, guard) = guard();
        assert_eq!(guard.state(), GuardState::Unauthorized);
    }

    #[test]
    fn test_dashboard_without_token() {
        let (_session, guard) = guard();
        let decision = guard.evaluate("/dashboard");
        assert_eq!(decision.state, GuardState::Unauthorized);
        assert_eq!(decision.redirect.as_deref(), Some("/login"));
        assert_eq!(guard.state(), GuardState::Unauthorized);
    }

    #[test]
    fn test_dashboard_with_token() {
        let (session, guard) = guard();
        session.set_token(&SessionToken::from("abc"));
        let decision = guard.evaluate("/dashboard");
        assert_eq!(decision, GuardDecision::authorized());
        assert_eq!(guard.state(), GuardState::Authorized);
    }

    #[test]
    fn test_login_without_token() {
        let (_session, guard) = guard();
        let decision = guard.evaluate("/login");
        assert_eq!(decision.state, GuardState::Authorized);
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn test_attached_guard_follows_navigation() {
        let (session, guard) = guard();
        let signal = NavigationSignal::new();
        let decisions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&decisions);
        let subscription = guard.attach(&signal, move |decision| {
            sink.borrow_mut().push(decision.clone());
        });

        signal.emit("/login");
        assert_eq!(guard.state(), GuardState::Authorized);

        signal.emit("/tenants");
        assert_eq!(guard.state(), GuardState::Unauthorized);

        session.set_token(&SessionToken::from("abc"));
        signal.emit("/tenants");
        assert_eq!(guard.state(), GuardState::Authorized);

        session.clear();
        signal.emit("/billing");
        assert_eq!(guard.state(), GuardState::Unauthorized);

        assert_eq!(
            *decisions.borrow(),
            vec![
                GuardDecision::authorized(),
                GuardDecision::redirect_to("/login"),
                GuardDecision::authorized(),
                GuardDecision::redirect_to("/login"),
            ]
        );

        drop(subscription);
        signal.emit("/login");
        assert_eq!(decisions.borrow().len(), 4);
        assert_eq!(guard.state(), GuardState::Unauthorized);
    }

    #[test]
    fn test_repeated_path_reports_once() {
        let (_session, guard) = guard();
        let signal = NavigationSignal::new();
        let redirects = Rc::new(Cell::new(0));
        let counter = Rc::clone(&redirects);
        let _subscription = guard.attach(&signal, move |decision| {
            if decision.redirect.is_some() {
                counter.set(counter.get() + 1);
            }
        });

        // Mount-time evaluation followed by the router echoing the same path.
        assert!(guard.evaluate_changed("/dashboard").is_some());
        signal.emit("/dashboard");
        assert_eq!(redirects.get(), 0);
        assert_eq!(guard.state(), GuardState::Unauthorized);

        signal.emit("/login");
        signal.emit("/dashboard");
        assert_eq!(redirects.get(), 1);
    }

    #[test]
    fn test_repeated_path_with_new_outcome_is_reported() {
        let (session, guard) = guard();
        assert_eq!(
            guard.evaluate_changed("/reports"),
            Some(GuardDecision::redirect_to("/login"))
        );
        assert_eq!(guard.evaluate_changed("/reports"), None);

        session.set_token(&SessionToken::from("abc"));
        assert_eq!(
            guard.evaluate_changed("/reports"),
            Some(GuardDecision::authorized())
        );
        assert_eq!(guard.state(), GuardState::Authorized);
    }

    #[test]
    fn test_detached_guard_ignores_events() {
        let (_session, guard) = guard();
        let signal = NavigationSignal::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _subscription = guard.attach(&signal, move |_| counter.set(counter.get() + 1));

        drop(guard);
        signal.emit("/dashboard");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_custom_login_path() {
        let policy = AccessPolicy {
            login_path: "/sign-in".to_string(),
            ..AccessPolicy::default()
        };
        let decision = decide(&policy, "/reports", false);
        assert_eq!(decision.redirect.as_deref(), Some("/sign-in"));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(GuardState::Authorized.to_string(), "authorized");
        assert_eq!(GuardState::Unauthorized.to_string(), "unauthorized");
    }
}
