// SPDX-License-Identifier: PMPL-1.0-or-later

//! seahorse-locale — the locale core of the PT Sea Horse company profile site.
//!
//! The site is static markup; what it needs at runtime is a language
//! choice that survives reloads and a lookup that turns stable keys into
//! English or Indonesian text.
//!
//! PIECES:
//! 1. **i18n**: the [`Lang`](i18n::Lang) set and the translation
//!    [`Catalog`](i18n::Catalog) with the site's built-in tables.
//! 2. **store**: [`LocaleStore`](store::LocaleStore), the active language,
//!    its persistence and the fallback-to-key lookup.
//! 3. **storage**: the key-value preference seam (memory or JSON file).
//! 4. **nav** and **config**: nav bar routing, scroll-spy and the
//!    deployment sub-path, all rendered through the store.

pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod nav;
pub mod storage;
pub mod store;
