use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    api::Role,
    utils::storage::{self as storage_utils, StorageError},
};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Key/value persistence for the session; local storage in the browser.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

type Listener = Box<dyn Fn(Option<&Session>)>;

/// Token and role, hydrated once from storage and kept in memory afterwards.
/// Every clone shares the same session; `persist` and `clear` write through
/// to storage and notify listeners.
///
/// A stored role outside the known set reads as logged out.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionStorage>,
    current: Rc<RefCell<Option<Session>>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

thread_local! {
    static BROWSER_SESSION: SessionStore = SessionStore::init(Rc::new(BrowserStorage));
}

impl SessionStore {
    /// Reads `token` and `role` from `backend` once.
    pub fn init(backend: Rc<dyn SessionStorage>) -> Self {
        let hydrated = Self::read(backend.as_ref());
        Self {
            backend,
            current: Rc::new(RefCell::new(hydrated)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The app-wide store backed by local storage.
    pub fn browser() -> Self {
        BROWSER_SESSION.with(Clone::clone)
    }

    pub fn in_memory() -> Self {
        Self::init(Rc::new(MemoryStorage::default()))
    }

    fn read(backend: &dyn SessionStorage) -> Option<Session> {
        let token = backend.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let role = backend.get(ROLE_KEY).as_deref().and_then(Role::parse)?;
        Some(Session { token, role })
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|session| session.token.clone())
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current.borrow().as_ref().map(|session| session.role)
    }

    /// Called with the new session after every `persist` and `clear`.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let current = self.current();
        for listener in self.listeners.borrow().iter() {
            listener(current.as_ref());
        }
    }

    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.backend.set(TOKEN_KEY, &session.token)?;
        self.backend.set(ROLE_KEY, session.role.as_str())?;
        *self.current.borrow_mut() = Some(session.clone());
        log::debug!("session stored for role {}", session.role.as_str());
        self.notify();
        Ok(())
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ROLE_KEY);
        *self.current.borrow_mut() = None;
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_then_current_returns_session() {
        let store = SessionStore::in_memory();
        assert!(store.current().is_none());
        store
            .persist(&Session {
                token: "t1".into(),
                role: Role::Receptionist,
            })
            .unwrap();
        assert_eq!(store.token().as_deref(), Some("t1"));
        assert_eq!(store.current_role(), Some(Role::Receptionist));
    }

    #[test]
    fn unknown_role_reads_as_logged_out() {
        let backend = Rc::new(MemoryStorage::default());
        backend.set(TOKEN_KEY, "t1").unwrap();
        backend.set(ROLE_KEY, "employee").unwrap();
        let store = SessionStore::init(backend);
        assert!(store.current().is_none());
    }

    #[test]
    fn clear_removes_both_keys() {
        let backend = Rc::new(MemoryStorage::default());
        let store = SessionStore::init(backend.clone());
        store
            .persist(&Session {
                token: "t1".into(),
                role: Role::Admin,
            })
            .unwrap();
        store.clear();
        assert!(backend.get(TOKEN_KEY).is_none());
        assert!(backend.get(ROLE_KEY).is_none());
        assert!(store.current().is_none());
    }

    #[test]
    fn init_hydrates_once_from_storage() {
        let backend = Rc::new(MemoryStorage::default());
        backend.set(TOKEN_KEY, "t1").unwrap();
        backend.set(ROLE_KEY, "admin").unwrap();
        let store = SessionStore::init(backend.clone());

        backend.remove(TOKEN_KEY);

        assert_eq!(store.token().as_deref(), Some("t1"));
        assert_eq!(store.current_role(), Some(Role::Admin));
    }

    #[test]
    fn clones_share_state_and_listeners_see_changes() {
        let store = SessionStore::in_memory();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        store.subscribe(move |session| log.borrow_mut().push(session.map(|s| s.role)));
        let other = store.clone();

        other
            .persist(&Session {
                token: "t1".into(),
                role: Role::Receptionist,
            })
            .unwrap();
        assert_eq!(store.token().as_deref(), Some("t1"));
        other.clear();

        assert!(store.current().is_none());
        assert_eq!(*seen.borrow(), vec![Some(Role::Receptionist), None]);
    }
}
