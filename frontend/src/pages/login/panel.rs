use crate::{
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    router::landing_route,
    state::auth::use_auth,
    utils::storage::navigate_to,
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        if let Some(role) = auth.get().role() {
            navigate_to(landing_route(role).path());
        }
    });

    let vm = use_login_view_model();
    view! { <LoginForm vm=vm /> }
}
