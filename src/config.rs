// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration
//!
//! The site is exported statically and served from a repository sub-path
//! in production (`/seahorse-comprof-v1.2/`), and from the root during
//! development. Everything that builds a URL goes through [`SiteConfig`]
//! so the two layouts never drift apart.

use crate::i18n::Lang;
use crate::storage::StorageMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "seahorse.yaml";

const DEFAULT_REPO: &str = "seahorse-comprof-v1.2";
const DEFAULT_STORAGE_PATH: &str = ".seahorse/preferences.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Repository name, used as the deployment sub-path in production.
    pub repo: String,
    pub production: bool,
    pub trailing_slash: bool,
    /// Language used when no valid selection has been persisted yet.
    pub default_locale: Lang,
    pub storage_mode: StorageMode,
    pub storage_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            production: false,
            trailing_slash: true,
            default_locale: Lang::default(),
            storage_mode: StorageMode::Filesystem,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] when
    /// it exists, then apply environment overrides.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// `SEAHORSE_ENV` wins over `NODE_ENV`; either set to `production`
    /// switches on the sub-path layout. Any other value leaves the
    /// configured layout alone. `SEAHORSE_LANG` overrides the default
    /// language when it names a supported one.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("SEAHORSE_ENV").or_else(|| lookup("NODE_ENV"));
        if env.is_some_and(|env| env.trim().eq_ignore_ascii_case("production")) {
            self.production = true;
        }
        if let Some(lang) = lookup("SEAHORSE_LANG").and_then(|code| Lang::from_code(code.trim())) {
            self.default_locale = lang;
        }
    }

    /// `/<repo>` in production, empty during development.
    pub fn base_path(&self) -> String {
        if self.production {
            format!("/{}", self.repo)
        } else {
            String::new()
        }
    }

    /// `/<repo>/` in production, empty during development.
    pub fn asset_prefix(&self) -> String {
        if self.production {
            format!("/{}/", self.repo)
        } else {
            String::new()
        }
    }

    /// Deployed URL of a static asset such as `/logo.jpg`.
    pub fn asset_path(&self, asset: &str) -> String {
        let asset = asset.trim_start_matches('/');
        format!("{}/{}", self.base_path(), asset)
    }

    /// Deployed URL of a page. The empty page is the home page.
    pub fn page_url(&self, page: &str) -> String {
        let page = page.trim_matches('/');
        if page.is_empty() {
            return format!("{}/", self.base_path());
        }
        let slash = if self.trailing_slash { "/" } else { "" };
        format!("{}/{}{}", self.base_path(), page, slash)
    }
}
