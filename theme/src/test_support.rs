//! In-memory host used by the unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ThemeError;
use crate::host::{AmbientScheme, PreferenceStore, ThemeMarker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    Available,
    Unavailable,
    /// Reads succeed, writes fail.
    ReadOnly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Marker { class: String, present: bool },
    Write { key: String, value: String },
}

#[derive(Debug)]
struct Inner {
    storage: Storage,
    entries: HashMap<String, String>,
    classes: Vec<String>,
    ambient: Option<bool>,
    ambient_reads: usize,
    events: Vec<HostEvent>,
}

/// Shared handle: clones observe and mutate the same state.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                storage: Storage::Available,
                entries: HashMap::new(),
                classes: Vec::new(),
                ambient: None,
                ambient_reads: 0,
                events: Vec::new(),
            })),
        }
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.lock().entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn with_ambient(self, prefers_dark: Option<bool>) -> Self {
        self.lock().ambient = prefers_dark;
        self
    }

    pub fn with_storage(self, storage: Storage) -> Self {
        self.lock().storage = storage;
        self
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    pub fn class_count(&self, class: &str) -> usize {
        self.lock().classes.iter().filter(|c| *c == class).count()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_count(class) > 0
    }

    pub fn ambient_reads(&self) -> usize {
        self.lock().ambient_reads
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory host poisoned")
    }
}

impl PreferenceStore for MemoryHost {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let inner = self.lock();
        match inner.storage {
            Storage::Unavailable => Err(ThemeError::StorageUnavailable),
            Storage::Available | Storage::ReadOnly => Ok(inner.entries.get(key).cloned()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut inner = self.lock();
        match inner.storage {
            Storage::Unavailable => Err(ThemeError::StorageUnavailable),
            Storage::ReadOnly => Err(ThemeError::StorageWrite("quota exceeded".to_owned())),
            Storage::Available => {
                inner.entries.insert(key.to_owned(), value.to_owned());
                inner.events.push(HostEvent::Write {
                    key: key.to_owned(),
                    value: value.to_owned(),
                });
                Ok(())
            }
        }
    }
}

impl AmbientScheme for MemoryHost {
    fn prefers_dark(&self) -> Option<bool> {
        let mut inner = self.lock();
        inner.ambient_reads += 1;
        inner.ambient
    }
}

impl ThemeMarker for MemoryHost {
    fn set_marker(&self, class: &str, present: bool) {
        let mut inner = self.lock();
        // Class lists are sets.
        inner.classes.retain(|c| c != class);
        if present {
            inner.classes.push(class.to_owned());
        }
        inner.events.push(HostEvent::Marker {
            class: class.to_owned(),
            present,
        });
    }
}
