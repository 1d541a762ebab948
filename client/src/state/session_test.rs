use std::sync::{Arc, Mutex};

use super::*;

/// In-memory backend that exposes what was persisted.
#[derive(Clone, Default)]
struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    fn with(raw: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(raw.to_owned()))) }
    }

    fn stored(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, raw: &str) {
        *self.slot.lock().unwrap() = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

fn admin() -> SessionUser {
    SessionUser::new("admin@ashesi.edu.gh", "administrator")
}

// =============================================================
// Restore
// =============================================================

#[test]
fn new_store_is_logged_out() {
    let store = SessionStore::new(MemoryBackend::default());
    assert!(store.current().is_none());
    assert!(!store.is_admin());
}

#[test]
fn restore_reads_persisted_user() {
    let backend = MemoryBackend::with(r#"{"email":"a@ashesi.edu.gh","role":"administrator"}"#);
    let mut store = SessionStore::new(backend);
    store.restore();
    assert!(store.is_logged_in());
    assert!(store.is_admin());
}

#[test]
fn restore_discards_corrupt_entry() {
    let backend = MemoryBackend::with("{not json");
    let mut store = SessionStore::new(backend.clone());
    store.restore();
    assert!(store.current().is_none());
    assert_eq!(backend.stored(), None);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_persists_under_user_key_shape() {
    let backend = MemoryBackend::default();
    let mut store = SessionStore::new(backend.clone());
    store.login(admin());
    let raw = backend.stored().expect("persisted");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["email"], "admin@ashesi.edu.gh");
    assert_eq!(value["role"], "administrator");
}

#[test]
fn logout_clears_storage() {
    let backend = MemoryBackend::default();
    let mut store = SessionStore::new(backend.clone());
    store.login(admin());
    store.logout();
    assert!(store.current().is_none());
    assert_eq!(backend.stored(), None);
}

// =============================================================
// Subscribe / notify
// =============================================================

#[test]
fn subscribers_observe_login_and_logout_synchronously() {
    let seen = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
    let mut store = SessionStore::new(MemoryBackend::default());
    let sink = Arc::clone(&seen);
    store.subscribe(move |user| sink.lock().unwrap().push(user.map(|u| u.email.clone())));

    store.login(admin());
    assert_eq!(seen.lock().unwrap().as_slice(), &[Some("admin@ashesi.edu.gh".to_owned())]);

    store.logout();
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(seen.lock().unwrap()[1], None);
}

#[test]
fn every_subscriber_is_notified_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut store = SessionStore::new(MemoryBackend::default());
    for tag in ["header", "recruitment", "dashboard"] {
        let order = Arc::clone(&order);
        store.subscribe(move |_| order.lock().unwrap().push(tag));
    }
    store.login(admin());
    assert_eq!(order.lock().unwrap().as_slice(), &["header", "recruitment", "dashboard"]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let calls = Arc::new(Mutex::new(0_u32));
    let mut store = SessionStore::new(MemoryBackend::default());
    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.login(admin());
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn logout_when_logged_out_does_not_notify() {
    let calls = Arc::new(Mutex::new(0_u32));
    let mut store = SessionStore::new(MemoryBackend::default());
    let counter = Arc::clone(&calls);
    store.subscribe(move |_| *counter.lock().unwrap() += 1);
    store.logout();
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn restore_notifies_only_on_change() {
    let calls = Arc::new(Mutex::new(0_u32));
    let backend = MemoryBackend::with(r#"{"email":"s@ashesi.edu.gh","role":"student"}"#);
    let mut store = SessionStore::new(backend);
    let counter = Arc::clone(&calls);
    store.subscribe(move |_| *counter.lock().unwrap() += 1);
    store.restore();
    store.restore();
    assert_eq!(*calls.lock().unwrap(), 1);
}
