use crate::{
    api::Role,
    router::{routes_for, AppRoute, LOGIN_PATH},
    state::auth::{self, use_auth},
    utils::storage::navigate_to,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub fn menu_for(role: Role) -> Vec<MenuItem> {
    routes_for(role)
        .iter()
        .map(|route: &AppRoute| MenuItem {
            href: route.path(),
            label: route.label(),
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigate_to(LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    let items = move || auth.get().role().map(menu_for).unwrap_or_default();
    let role_label = move || auth.get().role().map(|role| role.label()).unwrap_or("");

    view! {
        <aside class="w-full md:w-60 bg-surface-elevated border-r border-border flex flex-col">
            <div class="px-6 py-5 border-b border-border">
                <h1 class="text-xl font-semibold text-fg">"Salon Desk"</h1>
                <p class="text-xs text-fg-muted">{role_label}</p>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                <For
                    each=items
                    key=|item| item.href
                    children=move |item| view! {
                        <a
                            href=item.href
                            class="block px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        >
                            {item.label}
                        </a>
                    }
                />
            </nav>
            <div class="px-3 py-4 border-t border-border">
                <button
                    on:click=on_logout
                    class="w-full px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || logout_pending.get()
                >
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface md:flex">
            <Sidebar/>
            <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_menu_starts_with_dashboard() {
        let menu = menu_for(Role::Admin);
        assert_eq!(menu.len(), 4);
        assert_eq!(menu[0].href, "/dashboard");
    }

    #[test]
    fn receptionist_menu_hides_dashboard() {
        let menu = menu_for(Role::Receptionist);
        assert!(menu.iter().all(|item| item.href != "/dashboard"));
        assert_eq!(
            menu.iter().map(|item| item.label).collect::<Vec<_>>(),
            vec!["Bookings", "Attendance", "Employees"]
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        state::session::Session,
        test_support::{helpers::provide_auth, ssr::render_to_string},
    };

    #[test]
    fn layout_renders_menu_for_role() {
        let html = render_to_string(|| {
            provide_auth(Some(Session {
                token: "tok".into(),
                role: Role::Receptionist,
            }));
            view! { <Layout><p>"content"</p></Layout> }
        });
        assert!(html.contains("/bookings"));
        assert!(!html.contains("/dashboard"));
        assert!(html.contains("content"));
        assert!(html.contains("Logout"));
    }
}
