use crate::{
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
    },
    pages::login::view_model::LoginViewModel,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6 bg-surface-elevated rounded-lg shadow p-8">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-fg">"Salon Desk"</h2>
                    <p class="mt-1 text-sm text-fg-muted">"Sign in to manage bookings"</p>
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <TextField
                        label="Email"
                        value=vm.email
                        on_input=move |v| vm.email.set(v)
                        input_type="email"
                        required=true
                    />
                    <TextField
                        label="Password"
                        value=vm.password
                        on_input=move |v| vm.password.set(v)
                        input_type="password"
                        required=true
                    />
                    <InlineErrorMessage error=vm.error />
                    <Button class="w-full" loading=pending attr:type="submit">
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
                <p class="text-center text-sm">
                    <a href="/" class="text-link hover:underline">"Back to the salon"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use crate::{pages::login::LoginPage, test_support::ssr::render_to_string};
    use leptos::*;

    #[test]
    fn login_page_renders_fields() {
        let html = render_to_string(|| view! { <LoginPage/> });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Sign in"));
    }
}
