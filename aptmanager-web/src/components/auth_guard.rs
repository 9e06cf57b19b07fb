use crate::context::use_session;
use shared::guard::{GuardDecision, GuardState, RouteGuard};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Html,
}

/// Renders its children only while the route guard authorizes the current
/// path.
///
/// The guard subscribes to the session's navigation signal when mounted and
/// is dropped with the component. Anonymous visitors of protected paths are
/// sent to the policy's login page.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let context = use_session();
    let navigator = use_navigator();
    let current_path = use_location().map(|location| location.path().to_string());
    let state = use_state(GuardState::default);

    {
        let state = state.clone();
        use_effect_with(context, move |context| {
            let guard = Rc::new(RouteGuard::new(context.policy().clone(), context.session()));
            let login = context.login_route();
            let apply = Rc::new(move |decision: &GuardDecision| {
                state.set(decision.state);
                if decision.redirect.is_some() {
                    if let Some(navigator) = &navigator {
                        navigator.push(&login);
                    }
                }
            });

            let subscription = {
                let apply = Rc::clone(&apply);
                guard.attach(context.navigation(), move |decision| apply(decision))
            };

            // The navigation bridge may have emitted before this subscription
            // existed, so evaluate the path we mounted on. Its later echo of
            // the same path is then ignored by the guard.
            if let Some(decision) = current_path.and_then(|path| guard.evaluate_changed(&path)) {
                apply(&decision);
            }

            move || drop((subscription, guard))
        });
    }

    html! {
        <GuardOutlet state={*state}>
            {props.children.clone()}
        </GuardOutlet>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GuardOutletProps {
    pub state: GuardState,
    pub children: Html,
}

/// Shows `children` only in the authorized state.
#[function_component(GuardOutlet)]
pub(crate) fn guard_outlet(props: &GuardOutletProps) -> Html {
    match props.state {
        GuardState::Authorized => props.children.clone(),
        GuardState::Unauthorized => html! {},
    }
}
