use crate::context::use_session;
use yew::prelude::*;
use yew_router::prelude::use_location;

#[derive(Properties, PartialEq)]
pub struct NavigationBridgeProps {
    pub children: Html,
}

/// Publishes every router location change on the session's navigation signal.
#[function_component(NavigationBridge)]
pub fn navigation_bridge(props: &NavigationBridgeProps) -> Html {
    let context = use_session();
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with(path, move |path| {
        if let Some(path) = path {
            context.navigation().emit(path);
        }
        || ()
    });

    props.children.clone()
}
