//! File-backed settings store
//!
//! Holds the selected display language, persisted as a small JSON document.
//! The preference is persisted before in-memory state changes, so a failed
//! write leaves both the file and the observed language untouched.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::translations::{self, Translations};
use super::Language;

/// Persisted settings document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct PersistedSettings {
    language: Language,
}

/// Callback invoked after each successful language change
type ChangeListener = Box<dyn Fn(Language) + Send>;

/// Settings service: load persisted preference, get/set, change notification
pub struct SettingsStore {
    path: PathBuf,
    settings: PersistedSettings,
    listeners: Vec<ChangeListener>,
}

impl SettingsStore {
    /// Open the store backed by the given file
    ///
    /// A missing file yields the English default. An unreadable or corrupt
    /// file logs a warning and also yields the default rather than failing.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let settings = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!(
                        "ignoring corrupt settings file {}: {}",
                        path.display(),
                        err
                    );
                    PersistedSettings::default()
                }
            },
            Err(_) => PersistedSettings::default(),
        };

        Self {
            path,
            settings,
            listeners: Vec::new(),
        }
    }

    /// Currently selected language
    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// Select a language, persisting it before updating observable state
    ///
    /// Subscribers are notified only after the write succeeds.
    pub fn set_language(&mut self, language: Language) -> Result<(), Box<dyn Error>> {
        let updated = PersistedSettings { language };
        let json = serde_json::to_string_pretty(&updated)?;
        fs::write(&self.path, json)?;

        self.settings = updated;
        log::info!("language preference set to {}", language.code());

        for listener in &self.listeners {
            listener(language);
        }
        Ok(())
    }

    /// Register a callback for language changes
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(Language) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Translation table for the current language
    pub fn translations(&self) -> &'static Translations {
        translations::for_language(self.settings.language)
    }
}
