use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Public start page.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-lg space-y-6">
                    <h1 class="text-5xl font-bold">{ "AptManager" }</h1>
                    <p>
                        { "Properties, tenants, billing and maintenance in one dashboard." }
                    </p>
                    <div class="flex justify-center gap-4">
                        <Link<Route> to={Route::Login} classes="btn btn-primary">{ "Sign In" }</Link<Route>>
                        <Link<Route> to={Route::Register} classes="btn btn-ghost">{ "Create Account" }</Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
