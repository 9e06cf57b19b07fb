//! Tests for the routing system
//!
//! Validates route paths, the feature page list, sidebar highlighting, and
//! that the route table lines up with the guard's protected prefixes.

#[cfg(test)]
mod tests {
    use crate::routes::{Route, is_nav_active};
    use shared::config::AccessPolicy;
    use shared::guard::{GuardState, decide};
    use yew_router::Routable;

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::Billing.to_path(), "/billing");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    /// Tests sidebar order of the feature pages
    #[test]
    fn test_feature_routes_in_sidebar_order() {
        let features: Vec<Route> = Route::features().collect();
        assert_eq!(
            features,
            vec![
                Route::Dashboard,
                Route::Properties,
                Route::Tenants,
                Route::Billing,
                Route::Reports,
                Route::Notifications,
                Route::Maintenance,
                Route::Settings,
            ]
        );
        assert_eq!(Route::Billing.label(), "Billing & Invoicing");
    }

    /// Every feature page is guarded, every other page is public
    #[test]
    fn test_route_table_matches_access_policy() {
        let policy = AccessPolicy::default();
        for route in Route::features() {
            let decision = decide(&policy, &route.to_path(), false);
            assert_eq!(decision.state, GuardState::Unauthorized, "{route:?}");
        }
        for route in [Route::Home, Route::Login, Route::Register, Route::NotFound] {
            let decision = decide(&policy, &route.to_path(), false);
            assert_eq!(decision.state, GuardState::Authorized, "{route:?}");
        }
    }

    /// Tests resolving configured paths
    #[test]
    fn test_for_path() {
        assert_eq!(Route::for_path("/dashboard", Route::Home), Route::Dashboard);
        assert_eq!(Route::for_path("/login", Route::Home), Route::Login);
        assert_eq!(Route::for_path("/nowhere", Route::Login), Route::Login);
    }

    /// Tests sidebar highlighting
    #[test]
    fn test_nav_active() {
        assert!(is_nav_active("/billing", "/billing"));
        assert!(is_nav_active("/billing/invoices", "/billing"));
        assert!(!is_nav_active("/billing-archive", "/billing"));
        assert!(!is_nav_active("/tenants", "/billing"));
        assert!(!is_nav_active("/", "/billing"));
    }
}
