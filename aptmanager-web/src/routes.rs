use crate::{containers::layout::Layout, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

/// The application routes.
///
/// Feature pages are declared in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/properties")]
    Properties,
    #[at("/tenants")]
    Tenants,
    #[at("/billing")]
    Billing,
    #[at("/reports")]
    Reports,
    #[at("/notifications")]
    Notifications,
    #[at("/maintenance")]
    Maintenance,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether this is one of the dashboard's feature pages.
    pub fn is_feature(self) -> bool {
        !matches!(
            self,
            Self::Home | Self::Login | Self::Register | Self::NotFound
        )
    }

    /// Feature pages in sidebar order.
    pub fn features() -> impl Iterator<Item = Self> {
        Self::iter().filter(|route| route.is_feature())
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::Dashboard => "Dashboard",
            Self::Properties => "Properties",
            Self::Tenants => "Tenants",
            Self::Billing => "Billing & Invoicing",
            Self::Reports => "Reports",
            Self::Notifications => "Notifications",
            Self::Maintenance => "Maintenance",
            Self::Settings => "Settings",
            Self::NotFound => "Not Found",
        }
    }

    /// Font Awesome icon name for the sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "gauge",
            Self::Properties => "building",
            Self::Tenants => "users",
            Self::Billing => "wallet",
            Self::Reports => "chart-column",
            Self::Notifications => "bell",
            Self::Maintenance => "wrench",
            Self::Settings => "gear",
            Self::Home | Self::Login | Self::Register | Self::NotFound => "circle",
        }
    }

    /// Route for a configured path such as the login or landing path, or
    /// `fallback` when the path is not a known page.
    pub fn for_path(path: &str, fallback: Self) -> Self {
        Self::recognize(path)
            .filter(|route| *route != Self::NotFound)
            .unwrap_or(fallback)
    }
}

/// Whether a sidebar entry for `href` is highlighted while `current` is shown.
///
/// Matches the path itself and anything nested under it, but not siblings
/// sharing a prefix (`/billing-archive` does not light up `/billing`).
pub fn is_nav_active(current: &str, href: &str) -> bool {
    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Switch function for the application routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route: {route:?}");
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! { <ErrorPage /> },
        feature => html! {
            <Layout current_route={feature}>
                <FeaturePage route={feature} />
            </Layout>
        },
    }
}
