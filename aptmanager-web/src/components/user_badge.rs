use crate::models::app_state::AppState;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(yew::Properties, PartialEq)]
pub struct UserBadgeProps {
    pub on_logout: Callback<()>,
}

/// Avatar, name and email of the signed-in user, with the sign-out button.
#[function_component(UserBadge)]
pub fn user_badge(props: &UserBadgeProps) -> Html {
    let user_state = use_selector(|state: &AppState| state.user.clone());
    let user = (*user_state).clone().unwrap_or_default();

    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_logout.emit(());
        })
    };

    html! {
        <div class="border-t border-base-300 p-4">
            <div class="flex items-center gap-3 mb-4 px-2">
                <div class="avatar placeholder">
                    <div class="bg-primary text-primary-content w-8 rounded-full text-xs font-bold">
                        <span>{ user.initial() }</span>
                    </div>
                </div>
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium truncate">{ user.display_name() }</p>
                    <p class="text-xs text-base-content/70 truncate">{ user.display_email() }</p>
                </div>
            </div>
            <button class="btn btn-ghost btn-sm w-full justify-start text-error" {onclick}>
                <i class="fa-solid fa-right-from-bracket"></i>
                {"Sign Out"}
            </button>
        </div>
    }
}
