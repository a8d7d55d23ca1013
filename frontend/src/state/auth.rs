use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role},
    pages::login::repository::LoginRepository,
    state::session::{Session, SessionStore},
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|session| session.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth state mirroring `store`; a 401 that clears the store signs the UI out too.
pub fn auth_context_for(store: &SessionStore) -> AuthContext {
    let (auth, set_auth) = create_signal(AuthState {
        session: store.current(),
        loading: false,
    });
    store.subscribe(move |session| {
        set_auth.try_update(|state| state.session = session.cloned());
    });
    (auth, set_auth)
}

fn create_auth_context() -> AuthContext {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    auth_context_for(api_client.session())
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(session) => {
            set_auth_state.update(|state| {
                state.session = Some(session.clone());
                state.loading = false;
            });
            Ok(session)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;

    set_auth_state.update(|state| {
        state.session = None;
        state.loading = false;
    });

    result
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}
