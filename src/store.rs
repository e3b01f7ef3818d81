// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale store: the active language plus the lookup that renders text in it.
//!
//! A [`LocaleStore`] only exists once it has been loaded from storage, so
//! every value of the type is ready for lookups. Nothing here returns an
//! error: bad stored values fall back to the default language, failed
//! writes are logged, and missing keys render as the key itself.

use crate::i18n::{Catalog, Lang};
use crate::storage::{PreferenceStore, LANGUAGE_KEY};
use tracing::{debug, trace, warn};

pub struct LocaleStore<S: PreferenceStore> {
    catalog: Catalog,
    storage: S,
    active: Lang,
}

impl<S: PreferenceStore> LocaleStore<S> {
    /// Load the persisted selection, defaulting to [`Lang::default`].
    pub fn load(catalog: Catalog, storage: S) -> Self {
        Self::load_with_default(catalog, storage, Lang::default())
    }

    /// Load the persisted selection, using `default` when storage holds
    /// nothing usable.
    pub fn load_with_default(catalog: Catalog, storage: S, default: Lang) -> Self {
        let active = match storage.read(LANGUAGE_KEY) {
            Ok(Some(code)) => match Lang::from_code(&code) {
                Some(lang) => {
                    debug!(locale = %lang, "restored persisted locale");
                    lang
                }
                None => {
                    warn!(stored = %code, fallback = %default, "ignoring unsupported stored locale");
                    default
                }
            },
            Ok(None) => {
                debug!(locale = %default, "no persisted locale, using default");
                default
            }
            Err(err) => {
                warn!(error = %err, fallback = %default, "could not read persisted locale");
                default
            }
        };

        Self {
            catalog,
            storage,
            active,
        }
    }

    pub fn active_locale(&self) -> Lang {
        self.active
    }

    /// Switch to the language with code `tag` and persist it.
    ///
    /// Unsupported codes leave both the active language and storage
    /// untouched. Returns whether the switch was accepted.
    pub fn set_active_locale(&mut self, tag: &str) -> bool {
        match Lang::from_code(tag) {
            Some(lang) => {
                self.set_lang(lang);
                true
            }
            None => {
                debug!(tag = %tag, "ignoring unsupported locale");
                false
            }
        }
    }

    /// Switch to `lang` and persist it.
    ///
    /// The switch takes effect even when the write fails; the failure is
    /// only logged.
    pub fn set_lang(&mut self, lang: Lang) {
        debug!(from = %self.active, to = %lang, "switching locale");
        self.active = lang;
        if let Err(err) = self.storage.write(LANGUAGE_KEY, lang.code()) {
            warn!(error = %err, locale = %lang, "could not persist locale");
        }
    }

    /// Text for `key` in the active language, or `key` itself when the
    /// active table has no entry.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.catalog.get(self.active, key) {
            Some(text) => text,
            None => {
                trace!(key = %key, locale = %self.active, "missing translation");
                key
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Give the storage back, e.g. to reload it into a fresh store.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
