use crate::components::{AuthGuard, NavigationBridge};
use crate::context::SessionContext;
use crate::models::app_state::AppState;
use crate::routes::{Route, switch};
use yew::{ContextProvider, Html, Properties, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Session context created at start-up.
    pub context: SessionContext,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let dispatch = use_dispatch::<AppState>();

    // Profile of a session that survived a reload.
    use_effect_with(props.context.clone(), move |context| {
        dispatch.set(AppState {
            user: context.session().user(),
        });
        || ()
    });

    html! {
        <ContextProvider<SessionContext> context={props.context.clone()}>
            <BrowserRouter>
                <NavigationBridge>
                    <AuthGuard>
                        <Switch<Route> render={switch} />
                    </AuthGuard>
                </NavigationBridge>
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}
