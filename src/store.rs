//! Theme selection and persistence.
//!
//! The store keeps the active light/dark mode behind an explicit
//! `{get, set, subscribe}` contract with an injectable key-value backend, so
//! the resolution and persistence rules are testable without a browser
//! storage API. The wasm frontend plugs in `BrowserStore` over LocalStorage.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory backend for tests and headless use.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// LocalStorage backend. Every operation is a no-op when storage is
/// unavailable (private browsing, storage disabled).
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

type Subscriber = Box<dyn Fn(ThemeMode)>;

pub struct ThemeStore {
    backend: Rc<dyn KeyValueStore>,
    mode: Cell<ThemeMode>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl ThemeStore {
    /// Resolve the initial mode: a stored value always wins over the OS
    /// color-scheme hint.
    pub fn load(backend: Rc<dyn KeyValueStore>, os_prefers_dark: bool) -> Self {
        let stored = backend.read(THEME_KEY).and_then(|v| ThemeMode::from_str(&v));
        let mode = stored.unwrap_or(if os_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        });

        Self {
            backend,
            mode: Cell::new(mode),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.backend.write(THEME_KEY, mode.as_str());
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(mode);
        }
    }

    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode.get().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self, subscriber: impl Fn(ThemeMode) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins_over_os_preference() {
        let backend = Rc::new(MemoryStore::default());
        backend.write(THEME_KEY, "light");

        let store = ThemeStore::load(backend, true);
        assert_eq!(store.get(), ThemeMode::Light);
    }

    #[test]
    fn missing_value_falls_back_to_os_preference() {
        let backend = Rc::new(MemoryStore::default());
        let store = ThemeStore::load(backend, true);
        assert_eq!(store.get(), ThemeMode::Dark);

        let backend = Rc::new(MemoryStore::default());
        let store = ThemeStore::load(backend, false);
        assert_eq!(store.get(), ThemeMode::Light);
    }

    #[test]
    fn unparseable_value_falls_back_to_os_preference() {
        let backend = Rc::new(MemoryStore::default());
        backend.write(THEME_KEY, "solarized");

        let store = ThemeStore::load(backend, false);
        assert_eq!(store.get(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_round_trips() {
        let backend = Rc::new(MemoryStore::default());
        let store = ThemeStore::load(backend.clone(), true);
        assert_eq!(store.get(), ThemeMode::Dark);

        store.toggle();
        assert_eq!(backend.read(THEME_KEY).as_deref(), Some("light"));

        // Reload with the same backend: the persisted value is restored
        // without consulting the (contradicting) OS preference.
        let reloaded = ThemeStore::load(backend, true);
        assert_eq!(reloaded.get(), ThemeMode::Light);
    }

    #[test]
    fn subscribers_observe_every_set() {
        let backend = Rc::new(MemoryStore::default());
        let store = ThemeStore::load(backend, false);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |mode| sink.borrow_mut().push(mode));

        store.set(ThemeMode::Dark);
        store.toggle();
        assert_eq!(&*seen.borrow(), &[ThemeMode::Dark, ThemeMode::Light]);
    }
}
