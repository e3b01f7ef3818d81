// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the PT Sea Horse company profile site.
//!
//! ## Supported languages
//!
//! | Code | Language   | Native name      |
//! |------|------------|------------------|
//! | en   | English    | English          |
//! | id   | Indonesian | Bahasa Indonesia |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.home"`, `"hero.title"`,
//! `"certifications.iso9001.cert"`. A key missing from the requested
//! language's table resolves to the key string itself. There is no
//! fallback to English: an untranslated Indonesian string should be
//! visibly wrong on the page, not silently English.

mod catalog;

pub use catalog::{Catalog, Lang};
