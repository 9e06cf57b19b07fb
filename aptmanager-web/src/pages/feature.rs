use crate::routes::Route;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Eq)]
pub struct FeaturePageProps {
    pub route: Route,
}

fn description(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "Occupancy, revenue and open requests at a glance.",
        Route::Properties => "Buildings and the units in each of them.",
        Route::Tenants => "Current tenants, leases and contact details.",
        Route::Billing => "Invoices, payments and outstanding balances.",
        Route::Reports => "Financial and occupancy reports.",
        Route::Notifications => "Messages and reminders for you and your tenants.",
        Route::Maintenance => "Repair requests and their progress.",
        Route::Settings => "Account and application preferences.",
        Route::Home | Route::Login | Route::Register | Route::NotFound => "",
    }
}

/// Placeholder body of a dashboard feature page.
#[function_component(FeaturePage)]
pub fn feature_page(props: &FeaturePageProps) -> Html {
    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{ props.route.label() }</h1>
            <p>{ description(props.route) }</p>
        </div>
    }
}
