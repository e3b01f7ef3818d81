// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the company profile site.
//!
//! Holds every user-facing string of the site for the supported locales.
//! The built-in tables are compile-time static data; [`Catalog`] copies
//! them into owned maps once at startup so custom tables (tests, JSON
//! overrides) go through the same lookup path.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Indonesian entry to `ID` (missing keys render as the key
//!    itself, so gaps show up on the page)
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] and its arms in `code()`, `from_code()`,
//!    `all()` and the name helpers
//! 2. Create a `const XX: &[(&str, &str)]` table below
//! 3. Add `Lang::Xx => XX` to the match in `builtin_table()`

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Supported display languages of the site.
///
/// Each variant maps to an ISO 639-1 two-letter code. The code is what
/// gets persisted under the `language` preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Id,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Id => "id",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive: stored values
    /// are always written lowercase, so anything else is treated as foreign.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "id" => Some(Lang::Id),
            _ => None,
        }
    }

    /// All supported languages, in switcher order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Id]
    }

    /// Short label shown on the language switch buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Id => "ID",
        }
    }

    /// Name of the language written in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Id => "Bahasa Indonesia",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Lang::from_code(s) {
            Some(lang) => Ok(lang),
            None => bail!("unsupported language code: {:?}", s),
        }
    }
}

// ─── Catalog ────────────────────────────────────────────────────────

/// Per-locale key → text mapping.
///
/// Immutable once handed to a [`crate::store::LocaleStore`]; the builder
/// methods only exist for assembling a table up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tables: HashMap<Lang, HashMap<String, String>>,
}

impl Catalog {
    /// An empty catalog. Every lookup against it falls back to the key.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's built-in tables for every supported language.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for &lang in Lang::all() {
            for &(key, value) in builtin_table(lang) {
                catalog.insert(lang, key, value);
            }
        }
        catalog
    }

    /// Parse a catalog from JSON of the form `{"en": {"nav.home": "Home"}, ...}`.
    ///
    /// Unknown language codes are rejected: a table nobody can select is
    /// almost certainly a typo in the file.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(json).context("parsing catalog json")?;
        let mut catalog = Self::new();
        for (code, entries) in raw {
            let lang = match Lang::from_code(&code) {
                Some(lang) => lang,
                None => bail!("catalog contains unsupported language code {:?}", code),
            };
            for (key, value) in entries {
                catalog.insert(lang, key, value);
            }
        }
        Ok(catalog)
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, lang: Lang, key: impl Into<String>, value: impl Into<String>) {
        self.tables
            .entry(lang)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Chaining form of [`Catalog::insert`].
    pub fn with(mut self, lang: Lang, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(lang, key, value);
        self
    }

    /// Exact lookup in one language's table. No fallback of any kind.
    pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Look up `key` in `lang`, returning the key itself when missing.
    pub fn translate<'a>(&'a self, lang: Lang, key: &'a str) -> &'a str {
        self.get(lang, key).unwrap_or(key)
    }

    pub fn len(&self, lang: Lang) -> usize {
        self.tables.get(&lang).map_or(0, HashMap::len)
    }

    /// Keys defined for `lang`, sorted.
    pub fn keys(&self, lang: Lang) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&lang)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Keys defined for some other language but not for `lang`, sorted.
    pub fn missing_keys(&self, lang: Lang) -> Vec<&str> {
        let all: BTreeSet<&str> = self
            .tables
            .values()
            .flat_map(|table| table.keys().map(String::as_str))
            .collect();
        all.into_iter()
            .filter(|key| self.get(lang, key).is_none())
            .collect()
    }
}

fn builtin_table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Id => ID,
    }
}

// ─── English (source language — all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.contact", "Contact"),
    // Hero Section
    ("hero.title", "Leading Marine Services"),
    ("hero.subtitle", "Provider in Indonesia"),
    ("hero.description", "Established in 1972, PT Sea Horse is a major marine services provider for the Indonesian Oil & Gas exploration, production, mining, and transportation industries."),
    ("hero.stats.experience", "Years Experience"),
    ("hero.stats.locations", "Office Locations"),
    ("hero.stats.certified", "Certified"),
    ("hero.stats.operations", "Operations"),
    // About Section
    ("about.title", "About Us"),
    ("about.p1", "We are a major marine services provider for the Indonesian Oil & Gas exploration and production, Mining and Transportation Industries. Furthermore, we have represented some of the world's largest shipowners."),
    ("about.p2", "Hence, We have the ability to supply tugs and support vessels to work in deep water locations and the capacity to supply vessels in tight situations. This has enable us to work with confidence for our customer's needs. Some of our main activities include:"),
    ("about.activity1", "Ship Owning and Management"),
    ("about.activity2", "Vessel Chartering and Sale & Purchase"),
    ("about.activity3", "Operations for Tug Services (Harbour and Offshore)"),
    ("about.activity4", "Shipping Agency (Port, Vessel & Crew Clearance, etc)"),
    ("about.activity5", "General Agent for Coal Ship Operations and others"),
    // Expertise Section
    ("expertise.title", "Official Authorization & Business Credentials"),
    ("expertise.subtitle", "Recognized and trusted in the marine industry with verified partnerships and licenses."),
    ("expertise.doen.description", "We are the sole authorized service and spare parts agent for Doen Pacific Pty. Ltd. PT Sea Horse provides complete technical support for all Doen Waterjet models in Indonesia."),
    ("expertise.license1.title", "Shipping Business License"),
    ("expertise.license1.desc", "No: BXXXIV-422/AT.54"),
    ("expertise.license2.title", "Business Identification Number (NIB)"),
    ("expertise.license2.desc", "No: 9210101202577"),
    // Services Section
    ("services.title", "Our Services"),
    ("services.subtitle", "Comprehensive marine services tailored to meet your specific operational needs"),
    ("services.offshore.title", "Offshore Services"),
    ("services.offshore.desc", "Rig mobilisation / demobilisation and moves, anchor-handling, and towing"),
    ("services.vessels.title", "Vessels"),
    ("services.vessels.desc", "Anchor handling tugs supply (AHTS), tugs, hook-up and commissioning vessels, supply boats, accommodation and flat-top barges, crew boats and other specialised vessels"),
    ("services.brokerage.title", "Brokerage"),
    ("services.brokerage.desc", "PT Sea Horse is a trusted vessel broker for Sales & Purchase / Chartering inquiries. We can source for all types of vessels from all over the world for our clients"),
    ("services.shipping.title", "Shipping & Logistics"),
    ("services.shipping.desc", "PT Sea Horse specializes in cargo movement, expediting, and international freight forwarding. We handle coal, drilling pipes, containers, and general cargo. As shipping agents for major global shipowners, we serve ports across Indonesia"),
    // Certifications Section
    ("certifications.title", "Certifications and Memberships"),
    ("certifications.subtitle", "Maintaining the highest standards in quality and service"),
    ("certifications.insa", "INSA Member"),
    ("certifications.insa.desc", "Indonesian National Shipowners Association"),
    ("certifications.insa.reg", "Reg. No. 343/INSA/VIII/1998"),
    ("certifications.iso9001", "ISO 9001"),
    ("certifications.iso9001.desc", "Quality Management System"),
    ("certifications.iso9001.cert", "Cert. No. 55Q13036"),
    ("certifications.iso14001", "ISO 14001"),
    ("certifications.iso14001.desc", "Environmental Management"),
    ("certifications.iso14001.cert", "Cert. No. 32E13036"),
    ("certifications.iso45001", "ISO 45001"),
    ("certifications.iso45001.desc", "Occupational Health & Safety"),
    ("certifications.iso45001.cert", "Cert. No. 20O13036"),
    ("certifications.kadin", "KADIN Member"),
    ("certifications.kadin.desc", "Indonesian Chamber of Commerce"),
    ("certifications.kadin.reg", "Reg. No. 230331-030586"),
    // Contact Page
    ("contact.title", "Contact Us"),
    ("contact.locations.title", "Our Locations"),
    ("contact.jakarta.title", "PT SEA HORSE - Jakarta Office"),
    ("contact.balikpapan.title", "PT SEA HORSE - Balikpapan Branch"),
    ("contact.handil.title", "PT SEA HORSE - Handil Tiga Base"),
    ("contact.sangatta.title", "PT SEA HORSE - Sangatta Office"),
    ("contact.address", "Office Address"),
    ("contact.branch.address", "Branch Address"),
    ("contact.base.address", "Base Address"),
    ("contact.phone", "Phone"),
    ("contact.email", "Email Addresses"),
    ("contact.email.single", "Email Address"),
    ("contact.personnel", "Key Personnel"),
    ("contact.management", "Branch Management"),
    ("contact.base.management", "Base Management"),
    ("contact.operations.management", "Operations Management"),
    // Footer
    ("footer.contact", "Contact"),
    ("footer.quicklinks", "Quick Links"),
    ("footer.legal", "Legal Information"),
    ("footer.copyright", "© 2025 P.T. SEA HORSE. All rights reserved. | ISO 9001, ISO 14001, ISO 45001 Certified"),
];

// ─── Indonesian ─────────────────────────────────────────────────────

const ID: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Beranda"),
    ("nav.about", "Tentang"),
    ("nav.services", "Layanan"),
    ("nav.contact", "Kontak"),
    // Hero Section
    ("hero.title", "Penyedia Layanan Maritim"),
    ("hero.subtitle", "Terdepan di Indonesia"),
    ("hero.description", "Didirikan pada tahun 1972, PT Sea Horse adalah penyedia layanan maritim utama untuk industri eksplorasi, produksi, pertambangan, dan transportasi Minyak & Gas Indonesia."),
    ("hero.stats.experience", "Tahun Pengalaman"),
    ("hero.stats.locations", "Lokasi Kantor"),
    ("hero.stats.certified", "Bersertifikat"),
    ("hero.stats.operations", "Operasional"),
    // About Section
    ("about.title", "Tentang Kami"),
    ("about.p1", "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat."),
    ("about.p2", "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum:"),
    ("about.activity1", "Lorem ipsum dolor sit amet"),
    ("about.activity2", "Consectetur adipiscing elit"),
    ("about.activity3", "Sed do eiusmod tempor incididunt"),
    ("about.activity4", "Ut labore et dolore magna aliqua"),
    ("about.activity5", "Ut enim ad minim veniam"),
    // Expertise Section
    ("expertise.title", "Otorisasi Resmi & Kredensial Bisnis"),
    ("expertise.subtitle", "Diakui dan dipercaya dalam industri maritim dengan kemitraan dan lisensi yang terverifikasi."),
    ("expertise.doen.description", "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua."),
    ("expertise.license1.title", "Izin Usaha Pelayaran"),
    ("expertise.license1.desc", "No: BXXXIV-422/AT.54"),
    ("expertise.license2.title", "Nomor Induk Berusaha (NIB)"),
    ("expertise.license2.desc", "No: 9210101202577"),
    // Services Section
    ("services.title", "Layanan Kami"),
    ("services.subtitle", "Layanan maritim komprehensif yang disesuaikan untuk memenuhi kebutuhan operasional spesifik Anda"),
    ("services.offshore.title", "Layanan Lepas Pantai"),
    ("services.offshore.desc", "Lorem ipsum dolor sit amet, consectetur adipiscing elit"),
    ("services.vessels.title", "Kapal"),
    ("services.vessels.desc", "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore"),
    ("services.brokerage.title", "Pialang"),
    ("services.brokerage.desc", "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt"),
    ("services.shipping.title", "Pengiriman & Logistik"),
    ("services.shipping.desc", "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua"),
    // Certifications Section
    ("certifications.title", "Sertifikasi dan Keanggotaan"),
    ("certifications.subtitle", "Mempertahankan standar tertinggi dalam kualitas dan layanan"),
    ("certifications.insa", "Anggota INSA"),
    ("certifications.insa.desc", "Asosiasi Pemilik Kapal Nasional Indonesia"),
    ("certifications.insa.reg", "No. Reg. 343/INSA/VIII/1998"),
    ("certifications.iso9001", "ISO 9001"),
    ("certifications.iso9001.desc", "Sistem Manajemen Kualitas"),
    ("certifications.iso9001.cert", "No. Sert. 55Q13036"),
    ("certifications.iso14001", "ISO 14001"),
    ("certifications.iso14001.desc", "Manajemen Lingkungan"),
    ("certifications.iso14001.cert", "No. Sert. 32E13036"),
    ("certifications.iso45001", "ISO 45001"),
    ("certifications.iso45001.desc", "Kesehatan & Keselamatan Kerja"),
    ("certifications.iso45001.cert", "No. Sert. 20O13036"),
    ("certifications.kadin", "Anggota KADIN"),
    ("certifications.kadin.desc", "Kamar Dagang Indonesia"),
    ("certifications.kadin.reg", "No. Reg. 230331-030586"),
    // Contact Page
    ("contact.title", "Hubungi Kami"),
    ("contact.locations.title", "Lokasi Kami"),
    ("contact.jakarta.title", "PT SEA HORSE - Kantor Jakarta"),
    ("contact.balikpapan.title", "PT SEA HORSE - Cabang Balikpapan"),
    ("contact.handil.title", "PT SEA HORSE - Pangkalan Handil Tiga"),
    ("contact.sangatta.title", "PT SEA HORSE - Kantor Sangatta"),
    ("contact.address", "Alamat Kantor"),
    ("contact.branch.address", "Alamat Cabang"),
    ("contact.base.address", "Alamat Pangkalan"),
    ("contact.phone", "Telepon"),
    ("contact.email", "Alamat Email"),
    ("contact.email.single", "Alamat Email"),
    ("contact.personnel", "Personel Kunci"),
    ("contact.management", "Manajemen Cabang"),
    ("contact.base.management", "Manajemen Pangkalan"),
    ("contact.operations.management", "Manajemen Operasional"),
    // Footer
    ("footer.contact", "Kontak"),
    ("footer.quicklinks", "Tautan Cepat"),
    ("footer.legal", "Informasi Legal"),
    ("footer.copyright", "© 2025 P.T. SEA HORSE. Seluruh hak cipta dilindungi. | Bersertifikat ISO 9001, ISO 14001, ISO 45001"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        let catalog = Catalog::builtin();
        for &(key, value) in EN {
            assert_eq!(catalog.get(Lang::En, key), Some(value), "EN key '{}'", key);
        }
    }

    #[test]
    fn indonesian_entries_resolve() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate(Lang::Id, "nav.home"), "Beranda");
        assert_eq!(
            catalog.translate(Lang::Id, "certifications.kadin.desc"),
            "Kamar Dagang Indonesia"
        );
    }

    #[test]
    fn no_cross_language_fallback() {
        let catalog = Catalog::new().with(Lang::En, "hero.title", "Leading Marine Services");
        assert_eq!(catalog.get(Lang::Id, "hero.title"), None);
        assert_eq!(catalog.translate(Lang::Id, "hero.title"), "hero.title");
    }

    #[test]
    fn unknown_key_returns_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate(Lang::En, "nonexistent.key"), "nonexistent.key");
        assert_eq!(catalog.translate(Lang::Id, ""), "");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code("fr"), None);
        assert!("de".parse::<Lang>().is_err());
    }

    #[test]
    fn builtin_tables_cover_same_keys() {
        let catalog = Catalog::builtin();
        assert_eq!(EN.len(), ID.len(), "ID catalog key count mismatch");
        for &lang in Lang::all() {
            assert!(
                catalog.missing_keys(lang).is_empty(),
                "{} is missing {:?}",
                lang,
                catalog.missing_keys(lang)
            );
        }
    }

    #[test]
    fn missing_keys_lists_gaps_sorted() {
        let catalog = Catalog::new()
            .with(Lang::En, "b.key", "B")
            .with(Lang::En, "a.key", "A")
            .with(Lang::Id, "a.key", "A-id")
            .with(Lang::Id, "c.key", "C-id");
        assert_eq!(catalog.missing_keys(Lang::Id), vec!["b.key"]);
        assert_eq!(catalog.missing_keys(Lang::En), vec!["c.key"]);
        assert_eq!(catalog.keys(Lang::En), vec!["a.key", "b.key"]);
    }

    #[test]
    fn from_json_parses_tables() {
        let catalog = Catalog::from_json(
            r#"{"en": {"nav.home": "Home"}, "id": {"nav.home": "Beranda"}}"#,
        )
        .expect("valid catalog");
        assert_eq!(catalog.get(Lang::En, "nav.home"), Some("Home"));
        assert_eq!(catalog.get(Lang::Id, "nav.home"), Some("Beranda"));
    }

    #[test]
    fn from_json_rejects_unknown_language() {
        let err = Catalog::from_json(r#"{"fr": {"nav.home": "Accueil"}}"#).unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn values_keep_punctuation_and_newlines() {
        let catalog = Catalog::new().with(Lang::En, "footer.note", "Line one,\nline two & more!");
        assert_eq!(catalog.translate(Lang::En, "footer.note"), "Line one,\nline two & more!");
    }
}
