use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::{guard::RequireRole, layout::Layout, notification::NotificationToasts},
    pages::{
        attendance::AttendancePage, bookings::BookingsPage, dashboard::DashboardPage,
        employees::EmployeesPage, home::HomePage, login::LoginPage,
    },
    state::{auth::AuthProvider, notifications::provide_notifications, session::Session},
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const BOOKINGS_PATH: &str = "/bookings";
pub const ATTENDANCE_PATH: &str = "/attendance";
pub const EMPLOYEES_PATH: &str = "/employees";

pub const ROUTE_PATHS: &[&str] = &[
    HOME_PATH,
    LOGIN_PATH,
    DASHBOARD_PATH,
    BOOKINGS_PATH,
    ATTENDANCE_PATH,
    EMPLOYEES_PATH,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Dashboard,
    Bookings,
    Attendance,
    Employees,
}

impl AppRoute {
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Bookings,
        AppRoute::Attendance,
        AppRoute::Employees,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => HOME_PATH,
            AppRoute::Login => LOGIN_PATH,
            AppRoute::Dashboard => DASHBOARD_PATH,
            AppRoute::Bookings => BOOKINGS_PATH,
            AppRoute::Attendance => ATTENDANCE_PATH,
            AppRoute::Employees => EMPLOYEES_PATH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Login => "Login",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Bookings => "Bookings",
            AppRoute::Attendance => "Attendance",
            AppRoute::Employees => "Employees",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, AppRoute::Home | AppRoute::Login)
    }
}

/// Dashboard routes each role may open, in menu order.
pub fn routes_for(role: Role) -> &'static [AppRoute] {
    match role {
        Role::Admin => &[
            AppRoute::Dashboard,
            AppRoute::Bookings,
            AppRoute::Attendance,
            AppRoute::Employees,
        ],
        Role::Receptionist => &[
            AppRoute::Bookings,
            AppRoute::Attendance,
            AppRoute::Employees,
        ],
    }
}

/// Where a user lands right after signing in.
pub fn landing_route(role: Role) -> AppRoute {
    match role {
        Role::Admin => AppRoute::Dashboard,
        Role::Receptionist => AppRoute::Bookings,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(&'static str),
}

pub fn check_access(route: AppRoute, session: Option<&Session>) -> Access {
    if route.is_public() {
        return Access::Granted;
    }
    match session {
        Some(session) if routes_for(session.role).contains(&route) => Access::Granted,
        _ => Access::Redirect(LOGIN_PATH),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_app() {
    log::warn!("mount_app is only available in the browser");
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_notifications();
    provide_meta_context();
    view! {
        <Title formatter=page_title/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=PublicHome/>
                    <Route path=LOGIN_PATH view=PublicLogin/>
                    <Route path=DASHBOARD_PATH view=ProtectedDashboard/>
                    <Route path=BOOKINGS_PATH view=ProtectedBookings/>
                    <Route path=ATTENDANCE_PATH view=ProtectedAttendance/>
                    <Route path=EMPLOYEES_PATH view=ProtectedEmployees/>
                </Routes>
            </Router>
            <NotificationToasts/>
        </AuthProvider>
    }
}

pub fn page_title(label: String) -> String {
    if label.is_empty() {
        "Salon".to_string()
    } else {
        format!("{} | Salon", label)
    }
}

#[component]
fn PublicHome() -> impl IntoView {
    view! { <Title text=AppRoute::Home.label()/><HomePage/> }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <Title text=AppRoute::Login.label()/><LoginPage/> }
}

#[component]
fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    view! {
        <Title text=route.label()/>
        <RequireRole route=route>
            {
                let children = children.clone();
                view! { <Layout>{children()}</Layout> }
            }
        </RequireRole>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <Protected route=AppRoute::Dashboard><DashboardPage/></Protected> }
}

#[component]
fn ProtectedBookings() -> impl IntoView {
    view! { <Protected route=AppRoute::Bookings><BookingsPage/></Protected> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <Protected route=AppRoute::Attendance><AttendancePage/></Protected> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <Protected route=AppRoute::Employees><EmployeesPage/></Protected> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".into(),
            role,
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
        for route in AppRoute::ALL {
            assert!(ROUTE_PATHS.contains(&route.path()));
        }
    }

    #[test]
    fn public_routes_never_redirect() {
        for route in [AppRoute::Home, AppRoute::Login] {
            assert_eq!(check_access(route, None), Access::Granted);
            assert_eq!(check_access(route, Some(&session(Role::Receptionist))), Access::Granted);
        }
    }

    #[test]
    fn protected_routes_redirect_without_session() {
        for route in AppRoute::ALL.into_iter().filter(|r| !r.is_public()) {
            assert_eq!(check_access(route, None), Access::Redirect(LOGIN_PATH));
        }
    }

    #[test]
    fn dashboard_is_admin_only() {
        assert_eq!(
            check_access(AppRoute::Dashboard, Some(&session(Role::Admin))),
            Access::Granted
        );
        assert_eq!(
            check_access(AppRoute::Dashboard, Some(&session(Role::Receptionist))),
            Access::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn staff_routes_allow_both_roles() {
        for route in [AppRoute::Bookings, AppRoute::Attendance, AppRoute::Employees] {
            for role in [Role::Admin, Role::Receptionist] {
                assert_eq!(check_access(route, Some(&session(role))), Access::Granted);
            }
        }
    }

    #[test]
    fn landing_route_is_first_menu_entry() {
        for role in [Role::Admin, Role::Receptionist] {
            assert_eq!(routes_for(role).first(), Some(&landing_route(role)));
        }
        assert_eq!(landing_route(Role::Admin).path(), "/dashboard");
        assert_eq!(landing_route(Role::Receptionist).path(), "/bookings");
    }

    #[test]
    fn page_title_appends_brand() {
        assert_eq!(page_title("Bookings".into()), "Bookings | Salon");
        assert_eq!(page_title(String::new()), "Salon");
    }
}
