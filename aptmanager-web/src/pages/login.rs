use crate::components::form_field::FormField;
use crate::context::{use_mock_sign_in, use_signed_in_redirect};
use crate::routes::Route;
use shared::validation::{Field, FormErrors, LoginForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginForm::default);
    let errors = use_state(FormErrors::default);
    let sign_in = use_mock_sign_in();

    // Signed-in visitors skip the form.
    use_signed_in_redirect();

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let start = sign_in.start.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.validate() {
                Ok(()) => {
                    errors.set(FormErrors::default());
                    start.emit(form.profile());
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    let on_email_change = {
        let form = form.clone();
        Callback::from(move |email: String| {
            form.set(LoginForm {
                email,
                ..(*form).clone()
            });
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(LoginForm {
                password,
                ..(*form).clone()
            });
        })
    };

    let on_remember_change = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(LoginForm {
                    remember_me: input.checked(),
                    ..(*form).clone()
                });
            }
        })
    };

    let is_busy = sign_in.pending;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{"Welcome Back"}</h2>
                    <p class="text-sm text-base-content/70">{"Sign in to manage your apartment"}</p>
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value={form.email.clone()}
                        error={errors.get(Field::Email)}
                        oninput={on_email_change}
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value={form.password.clone()}
                        error={errors.get(Field::Password)}
                        oninput={on_password_change}
                    />
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            checked={form.remember_me}
                            onchange={on_remember_change}
                        />
                        <span class="label-text">{"Remember me"}</span>
                    </label>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Signing in..." } else { "Sign In" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Register} classes="link link-primary">{"Create one"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
