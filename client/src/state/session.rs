//! Process-wide login session.
//!
//! DESIGN
//! ======
//! The logged-in user lives in exactly one [`SessionStore`]. Components never
//! read local storage themselves; they subscribe to the store and are told
//! synchronously, in subscription order, whenever the user logs in or out.
//! The store is the only writer of the persisted `user` key.
//!
//! The administrator role only decides which links are shown. Access control
//! for back-office writes belongs to the API.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::SessionUser;

/// Local-storage key holding the JSON-serialized [`SessionUser`].
pub const SESSION_STORAGE_KEY: &str = "user";

/// Persistence behind the session store.
pub trait SessionBackend {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// Browser `localStorage` backend. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionBackend for BrowserStorage {
    fn load(&self) -> Option<String> {
        crate::util::storage::read_item(SESSION_STORAGE_KEY)
    }

    fn save(&self, raw: &str) {
        crate::util::storage::write_item(SESSION_STORAGE_KEY, raw);
    }

    fn clear(&self) {
        crate::util::storage::remove_item(SESSION_STORAGE_KEY);
    }
}

/// Callback invoked with the current user after every change.
pub type Listener = Box<dyn Fn(Option<&SessionUser>) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single source of truth for the logged-in user.
pub struct SessionStore<B> {
    backend: B,
    user: Option<SessionUser>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<B: SessionBackend> SessionStore<B> {
    /// Create an empty store. Call [`restore`](Self::restore) to read the
    /// persisted user.
    pub fn new(backend: B) -> Self {
        Self { backend, user: None, listeners: Vec::new(), next_id: 0 }
    }

    /// Re-read the persisted user. A corrupt entry is removed.
    pub fn restore(&mut self) {
        let restored = self.backend.load().and_then(|raw| match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user),
            Err(_) => {
                self.backend.clear();
                None
            }
        });
        if restored != self.user {
            self.user = restored;
            self.notify();
        }
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }

    /// Persist `user` and notify subscribers.
    pub fn login(&mut self, user: SessionUser) {
        if let Ok(raw) = serde_json::to_string(&user) {
            self.backend.save(&raw);
        }
        self.user = Some(user);
        self.notify();
    }

    /// Forget the user and notify subscribers. No-op when already logged out.
    pub fn logout(&mut self) {
        self.backend.clear();
        if self.user.take().is_some() {
            self.notify();
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Option<&SessionUser>) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(self.user.as_ref());
        }
    }
}
