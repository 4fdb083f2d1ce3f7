//! Theme preference: stored choice first, then the system color scheme,
//! then dark.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use shared_types::ColorMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

pub const THEME_KEY: &str = "theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Key-value store for small string preferences.
pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

/// Session-only fallback when durable storage is missing or blocked.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct ThemeStore {
    storage: Box<dyn PreferenceStorage>,
    mode: ColorMode,
    explicit: bool,
}

impl ThemeStore {
    pub fn new(storage: Box<dyn PreferenceStorage>, system_prefers_dark: Option<bool>) -> Self {
        let stored = match storage.load(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse::<ColorMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    debug!("ignoring stored theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                debug!("could not read stored theme: {}", e);
                None
            }
        };

        let mode = match (stored, system_prefers_dark) {
            (Some(mode), _) => mode,
            (None, Some(false)) => ColorMode::Light,
            (None, _) => ColorMode::Dark,
        };

        Self {
            storage,
            mode,
            explicit: stored.is_some(),
        }
    }

    /// Store backed by `localStorage`, or by memory when that is unavailable.
    pub fn browser() -> Self {
        let storage: Box<dyn PreferenceStorage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                warn!("Theme preference will not persist: {}", e);
                Box::new(MemoryStorage::default())
            }
        };
        Self::new(storage, system_prefers_dark())
    }

    pub fn get(&self) -> ColorMode {
        self.mode
    }

    pub fn set(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.explicit = true;
        if let Err(e) = self.storage.save(THEME_KEY, mode.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
    }

    pub fn toggle(&mut self) -> ColorMode {
        let next = self.mode.toggled();
        self.set(next);
        next
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.explicit
    }

    /// Follow a system color-scheme change unless the user picked a mode.
    /// Returns true when the mode changed.
    pub fn apply_system_preference(&mut self, prefers_dark: bool) -> bool {
        if self.explicit {
            return false;
        }
        let next = if prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        };
        let changed = next != self.mode;
        self.mode = next;
        changed
    }
}

pub fn apply_theme_to_document(mode: ColorMode) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", mode.as_str());
        }
    }
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

pub fn system_prefers_dark() -> Option<bool> {
    dark_scheme_query().map(|query| query.matches())
}

/// Live subscription to system color-scheme changes. Unsubscribes on drop.
pub struct SystemThemeWatch {
    query: MediaQueryList,
    closure: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl SystemThemeWatch {
    pub fn subscribe<F>(mut on_change: F) -> Option<Self>
    where
        F: FnMut(bool) + 'static,
    {
        let query = dark_scheme_query()?;
        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, closure })
    }
}

impl Drop for SystemThemeWatch {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}

/// Current mode as a signal plus the store behind it.
#[derive(Clone)]
pub struct ThemeState {
    pub mode: Signal<ColorMode>,
    store: Rc<RefCell<ThemeStore>>,
}

impl ThemeState {
    pub fn toggle(&self) {
        let next = self.store.borrow_mut().toggle();
        apply_theme_to_document(next);
        let mut mode = self.mode;
        mode.set(next);
    }
}

pub fn use_theme() -> ThemeState {
    let store = use_hook(|| Rc::new(RefCell::new(ThemeStore::browser())));
    let mut mode = use_signal(|| store.borrow().get());
    let watch = use_hook(|| Rc::new(RefCell::new(None::<SystemThemeWatch>)));

    {
        let store = store.clone();
        use_effect(move || {
            let initial = store.borrow().get();
            apply_theme_to_document(initial);

            if store.borrow().has_explicit_preference() || watch.borrow().is_some() {
                return;
            }
            let store = store.clone();
            *watch.borrow_mut() = SystemThemeWatch::subscribe(move |prefers_dark| {
                let changed = store.borrow_mut().apply_system_preference(prefers_dark);
                if changed {
                    let next = store.borrow().get();
                    apply_theme_to_document(next);
                    mode.set(next);
                }
            });
        });
    }

    ThemeState { mode, store }
}
