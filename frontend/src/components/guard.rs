use crate::{
    router::{check_access, Access, AppRoute},
    state::auth::use_auth,
    utils::storage::navigate_to,
};
use leptos::*;

/// Renders `children` only when the signed-in role may open `route`;
/// otherwise sends the browser to the login screen.
#[component]
pub fn RequireRole(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let access = create_memo(move |_| check_access(route, auth.get().session.as_ref()));
    create_effect(move |_| {
        if let Access::Redirect(target) = access.get() {
            navigate_to(target);
        }
    });
    view! {
        <Show when=move || should_render_children(access.get()) fallback=|| ()>
            {children()}
        </Show>
    }
}

fn should_render_children(access: Access) -> bool {
    access == Access::Granted
}

#[cfg(test)]
mod tests {
    use super::should_render_children;
    use crate::router::{Access, LOGIN_PATH};

    #[test]
    fn guard_renders_only_when_granted() {
        assert!(should_render_children(Access::Granted));
        assert!(!should_render_children(Access::Redirect(LOGIN_PATH)));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::Role,
        state::session::Session,
        test_support::{helpers::provide_auth, ssr::render_to_string},
    };

    fn render_guarded(role: Option<Role>, route: AppRoute) -> String {
        render_to_string(move || {
            provide_auth(role.map(|role| Session {
                token: "tok".into(),
                role,
            }));
            view! { <RequireRole route=route><p>"secret area"</p></RequireRole> }
        })
    }

    #[test]
    fn admin_sees_dashboard() {
        assert!(render_guarded(Some(Role::Admin), AppRoute::Dashboard).contains("secret area"));
    }

    #[test]
    fn receptionist_and_anonymous_are_kept_out_of_dashboard() {
        assert!(!render_guarded(Some(Role::Receptionist), AppRoute::Dashboard).contains("secret area"));
        assert!(!render_guarded(None, AppRoute::Dashboard).contains("secret area"));
    }

    #[test]
    fn receptionist_sees_bookings() {
        assert!(render_guarded(Some(Role::Receptionist), AppRoute::Bookings).contains("secret area"));
    }
}
