// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation bar model
//!
//! The home page is one long document with anchored sections; the
//! contact page is separate. Nav buttons either scroll within the home
//! page or navigate, and the highlighted entry on the home page follows
//! the scroll position (scroll-spy).

use crate::config::SiteConfig;
use crate::i18n::Lang;
use crate::storage::PreferenceStore;
use crate::store::LocaleStore;
use serde::Serialize;

/// Distance from the top of the viewport at which the scroll-spy probes.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Field names posted to the external form endpoint.
pub const CONTACT_FORM_FIELDS: [&str; 4] = ["name", "email", "phone", "message"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    /// Sections in home-page document order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Services,
            Section::Contact,
        ]
    }

    /// DOM anchor id.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::all().iter().copied().find(|s| s.id() == id)
    }

    /// Translation key of the nav label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::About => "nav.about",
            Section::Services => "nav.services",
            Section::Contact => "nav.contact",
        }
    }
}

/// Vertical extent of a section relative to the viewport top, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Tracks which home-page section is under the probe line.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    active: Section,
    offset: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            active: Section::Home,
            offset: SCROLL_SPY_OFFSET,
        }
    }
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Feed the current section positions after a scroll event.
    ///
    /// The first section in document order that straddles the probe line
    /// becomes active. Sections absent from `bounds` (not rendered) are
    /// skipped; when nothing matches, the previous section stays active.
    pub fn update(&mut self, bounds: &[(Section, SectionBounds)]) -> Section {
        let hit = Section::all().iter().copied().find(|section| {
            bounds
                .iter()
                .any(|(s, b)| s == section && b.contains(self.offset))
        });
        if let Some(section) = hit {
            self.active = section;
        }
        self.active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Contact,
}

impl Page {
    /// Nav entries in the order this page lists them.
    pub fn nav_sections(&self) -> &'static [Section] {
        match self {
            Page::Home => Section::all(),
            Page::Contact => &[
                Section::Home,
                Section::Services,
                Section::About,
                Section::Contact,
            ],
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Contact => "contact",
        }
    }
}

/// What clicking a nav entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavAction {
    /// Smooth-scroll to an anchor on the current page.
    Scroll { section: Section },
    /// Load another page, optionally jumping to an anchor on it.
    Navigate {
        page: Page,
        anchor: Option<Section>,
    },
}

impl NavAction {
    pub fn href(&self, config: &SiteConfig) -> String {
        match self {
            NavAction::Scroll { section } => format!("#{}", section.id()),
            NavAction::Navigate { page, anchor } => {
                let url = config.page_url(page.path());
                match anchor {
                    Some(section) => format!("{}#{}", url, section.id()),
                    None => url,
                }
            }
        }
    }
}

/// Resolve a nav click on `page` targeting `section`.
pub fn route(page: Page, section: Section) -> NavAction {
    match (page, section) {
        (Page::Home, Section::Contact) => NavAction::Navigate {
            page: Page::Contact,
            anchor: None,
        },
        (Page::Home, section) => NavAction::Scroll { section },
        (Page::Contact, Section::Home) => NavAction::Navigate {
            page: Page::Home,
            anchor: None,
        },
        (Page::Contact, Section::Contact) => NavAction::Navigate {
            page: Page::Contact,
            anchor: None,
        },
        (Page::Contact, section) => NavAction::Navigate {
            page: Page::Home,
            anchor: Some(section),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: String,
    pub action: NavAction,
    pub active: bool,
}

/// Localized nav entries for `page`. On the home page the scroll-spy
/// decides the highlighted entry; the contact page always highlights
/// Contact.
pub fn nav_items<S: PreferenceStore>(
    store: &LocaleStore<S>,
    page: Page,
    spy: &ScrollSpy,
) -> Vec<NavItem> {
    let active = match page {
        Page::Home => spy.active(),
        Page::Contact => Section::Contact,
    };
    page.nav_sections()
        .iter()
        .map(|&section| NavItem {
            section,
            label: store.translate(section.label_key()).to_string(),
            action: route(page, section),
            active: section == active,
        })
        .collect()
}

/// One button of the EN/ID language switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageButton {
    pub lang: Lang,
    pub label: &'static str,
    pub selected: bool,
}

pub fn language_switch<S: PreferenceStore>(store: &LocaleStore<S>) -> Vec<LanguageButton> {
    Lang::all()
        .iter()
        .map(|&lang| LanguageButton {
            lang,
            label: lang.label(),
            selected: lang == store.active_locale(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::storage::MemoryStore;

    fn layout(scroll: f64) -> Vec<(Section, SectionBounds)> {
        // 800px sections stacked from the top of the document.
        Section::all()
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let top = i as f64 * 800.0 - scroll;
                (s, SectionBounds::new(top, top + 800.0))
            })
            .collect()
    }

    #[test]
    fn spy_starts_at_home() {
        assert_eq!(ScrollSpy::new().active(), Section::Home);
    }

    #[test]
    fn spy_follows_scroll_position() {
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.update(&layout(0.0)), Section::Home);
        assert_eq!(spy.update(&layout(800.0)), Section::About);
        assert_eq!(spy.update(&layout(1700.0)), Section::Services);
        assert_eq!(spy.update(&layout(2500.0)), Section::Contact);
    }

    #[test]
    fn spy_prefers_earlier_section_on_shared_edge() {
        let mut spy = ScrollSpy::new();
        // About ends exactly where Services starts, both touch the probe line.
        let bounds = [
            (Section::About, SectionBounds::new(-700.0, 100.0)),
            (Section::Services, SectionBounds::new(100.0, 900.0)),
        ];
        assert_eq!(spy.update(&bounds), Section::About);
    }

    #[test]
    fn spy_keeps_previous_when_nothing_matches() {
        let mut spy = ScrollSpy::new();
        spy.update(&layout(800.0));
        let gap = [(Section::Services, SectionBounds::new(300.0, 900.0))];
        assert_eq!(spy.update(&gap), Section::About);
        assert_eq!(spy.update(&[]), Section::About);
    }

    #[test]
    fn spy_custom_offset() {
        let mut spy = ScrollSpy::with_offset(0.0);
        let bounds = [
            (Section::Home, SectionBounds::new(-500.0, 50.0)),
            (Section::About, SectionBounds::new(50.0, 850.0)),
        ];
        assert_eq!(spy.update(&bounds), Section::Home);
    }

    #[test]
    fn home_page_routes() {
        assert_eq!(
            route(Page::Home, Section::About),
            NavAction::Scroll {
                section: Section::About
            }
        );
        assert_eq!(
            route(Page::Home, Section::Contact),
            NavAction::Navigate {
                page: Page::Contact,
                anchor: None
            }
        );
    }

    #[test]
    fn contact_page_routes_back_to_home_anchors() {
        let config = SiteConfig::default();
        assert_eq!(route(Page::Contact, Section::Home).href(&config), "/");
        assert_eq!(route(Page::Contact, Section::Services).href(&config), "/#services");
        assert_eq!(route(Page::Contact, Section::Contact).href(&config), "/contact/");
        assert_eq!(route(Page::Home, Section::About).href(&config), "#about");
    }

    #[test]
    fn production_hrefs_use_sub_path() {
        let config = SiteConfig {
            production: true,
            ..SiteConfig::default()
        };
        assert_eq!(
            route(Page::Contact, Section::About).href(&config),
            "/seahorse-comprof-v1.2/#about"
        );
        assert_eq!(
            route(Page::Home, Section::Contact).href(&config),
            "/seahorse-comprof-v1.2/contact/"
        );
    }

    #[test]
    fn nav_items_are_localized() {
        let mut store = LocaleStore::load(Catalog::builtin(), MemoryStore::new());
        let spy = ScrollSpy::new();

        let labels: Vec<String> = nav_items(&store, Page::Home, &spy)
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, ["Home", "About", "Services", "Contact"]);

        store.set_lang(Lang::Id);
        let items = nav_items(&store, Page::Contact, &spy);
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["Beranda", "Layanan", "Tentang", "Kontak"]);
        let active: Vec<Section> = items.iter().filter(|i| i.active).map(|i| i.section).collect();
        assert_eq!(active, [Section::Contact]);
    }

    #[test]
    fn nav_items_fall_back_to_keys() {
        let store = LocaleStore::load(Catalog::new(), MemoryStore::new());
        let items = nav_items(&store, Page::Home, &ScrollSpy::new());
        assert_eq!(items[0].label, "nav.home");
        assert!(items[0].active);
    }

    #[test]
    fn language_switch_marks_active() {
        let mut store = LocaleStore::load(Catalog::builtin(), MemoryStore::new());
        store.set_active_locale("id");
        let buttons = language_switch(&store);
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "EN");
        assert!(!buttons[0].selected);
        assert!(buttons[1].selected);
    }

    #[test]
    fn section_ids_roundtrip() {
        for section in Section::all() {
            assert_eq!(Section::from_id(section.id()), Some(*section));
        }
        assert_eq!(Section::from_id("certifications"), None);
    }
}
