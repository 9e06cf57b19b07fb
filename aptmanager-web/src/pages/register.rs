use crate::components::form_field::FormField;
use crate::context::{use_mock_sign_in, use_signed_in_redirect};
use crate::routes::Route;
use shared::validation::{Field, FormErrors, RegisterForm};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Builds a callback that stores one input's value into the form.
fn field_setter(
    form: &UseStateHandle<RegisterForm>,
    update: fn(&mut RegisterForm, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        update(&mut next, value);
        form.set(next);
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form = use_state(RegisterForm::default);
    let errors = use_state(FormErrors::default);
    let sign_in = use_mock_sign_in();
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

    let is_busy = sign_in.pending;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{"Create Account"}</h2>
                    <p class="text-sm text-base-content/70">{"Start managing your properties"}</p>
                    <FormField
                        id="name"
                        label="Full Name"
                        placeholder="Jane Doe"
                        value={form.name.clone()}
                        error={errors.get(Field::Name)}
                        oninput={field_setter(&form, |form, value| form.name = value)}
                    />
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value={form.email.clone()}
                        error={errors.get(Field::Email)}
                        oninput={field_setter(&form, |form, value| form.email = value)}
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value={form.password.clone()}
                        error={errors.get(Field::Password)}
                        oninput={field_setter(&form, |form, value| form.password = value)}
                    />
                    <FormField
                        id="confirm-password"
                        label="Confirm Password"
                        input_type="password"
                        value={form.confirm_password.clone()}
                        error={errors.get(Field::ConfirmPassword)}
                        oninput={field_setter(&form, |form, value| form.confirm_password = value)}
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Create Account" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="link link-primary">{"Sign in"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
