use crate::components::nav_item::NavItem;
use crate::components::user_badge::UserBadge;
use crate::context::use_session;
use crate::models::app_state::AppState;
use crate::routes::Route;
use web_sys::window;
use yew::{
    Callback, Children, Html, MouseEvent, Properties, classes, function_component, html,
    use_effect_with, use_state,
};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: Route,
}

/// Shell around every feature page: sidebar navigation, user badge, and the
/// page content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let context = use_session();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let sidebar_open = use_state(|| false);

    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "dark")
                .unwrap_or_default();
        }
        || {}
    });

    let on_logout = Callback::from(move |()| {
        context.sign_out();
        dispatch.set(AppState::default());
        if let Some(navigator) = &navigator {
            navigator.push(&context.login_route());
        }
    });

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    html! {
        <div class="drawer lg:drawer-open h-screen bg-base-100">
            <input id="sidebar" type="checkbox" class="drawer-toggle" checked={*sidebar_open} />
            <div class="drawer-content flex flex-col">
                <header class="navbar bg-base-200 border-b border-base-300 px-6">
                    <button class="btn btn-ghost lg:hidden" onclick={toggle_sidebar.clone()}>
                        <i class="fa-solid fa-bars text-lg"></i>
                    </button>
                    <h1 class="text-lg font-semibold">{ props.current_route.label() }</h1>
                    <div class="ml-auto">
                        <button class="btn btn-ghost btn-circle">
                            <i class="fa-solid fa-bell"></i>
                        </button>
                    </div>
                </header>
                <main class={classes!("flex-1", "overflow-y-auto", "p-6", "md:p-8")}>
                    {props.children.clone()}
                </main>
            </div>
            <div class="drawer-side z-40">
                <label for="sidebar" class="drawer-overlay" onclick={toggle_sidebar}></label>
                <aside class="flex h-full w-64 flex-col bg-base-200 border-r border-base-300">
                    <div class="flex h-16 items-center gap-2 px-6 border-b border-base-300">
                        <i class="fa-solid fa-building text-primary"></i>
                        <span class="text-lg font-bold tracking-tight">{"AptManager"}</span>
                    </div>
                    <ul class="menu flex-1 w-full px-3 py-4 gap-1">
                        { for Route::features().map(|route| html! { <NavItem {route} /> }) }
                    </ul>
                    <UserBadge {on_logout} />
                </aside>
            </div>
        </div>
    }
}
