// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics: catalog coverage, preference storage and configuration.

use crate::config::SiteConfig;
use crate::i18n::{Catalog, Lang};
use crate::storage::{FileStore, PreferenceStore, StorageMode, LANGUAGE_KEY};
use anyhow::{anyhow, Result};
use colored::*;
use std::fmt;
use std::path::Path;

pub fn run_self_diagnostics(config: &SiteConfig, catalog: &Catalog) -> Result<()> {
    println!("{}", "seahorse-locale self-diagnostics".bold());
    println!();

    let findings = collect(config, catalog);
    for finding in &findings {
        println!("{}", finding);
    }

    let failed = findings
        .iter()
        .filter(|finding| finding.status == Status::Fail)
        .count();
    if failed > 0 {
        Err(anyhow!("{} self-diagnostic check(s) failed", failed))
    } else {
        Ok(())
    }
}

fn collect(config: &SiteConfig, catalog: &Catalog) -> Vec<Finding> {
    let mut findings = vec![Check::Version.pass(format!(
        "seahorse-locale {}",
        env!("CARGO_PKG_VERSION")
    ))];
    findings.extend(Lang::all().iter().map(|&lang| check_coverage(catalog, lang)));
    findings.push(Check::DefaultLocale.pass(format!(
        "{} ({})",
        config.default_locale,
        config.default_locale.native_name()
    )));
    findings.push(Check::Deployment.pass(if config.production {
        format!("production, served under {}", config.asset_prefix())
    } else {
        "development, served from /".to_string()
    }));
    findings.push(match config.storage_mode {
        StorageMode::Filesystem => check_storage(&config.storage_path),
        StorageMode::Memory => {
            Check::Storage.degraded("memory only, the language choice is lost on exit")
        }
    });
    findings
}

/// What a diagnostic line is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    Version,
    Catalog(Lang),
    DefaultLocale,
    Deployment,
    Storage,
}

impl Check {
    fn pass(self, detail: impl Into<String>) -> Finding {
        Finding::new(self, Status::Pass, detail)
    }

    fn degraded(self, detail: impl Into<String>) -> Finding {
        Finding::new(self, Status::Degraded, detail)
    }

    fn fail(self, detail: impl Into<String>) -> Finding {
        Finding::new(self, Status::Fail, detail)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Version => f.write_str("version"),
            Check::Catalog(lang) => write!(f, "catalog {}", lang.code()),
            Check::DefaultLocale => f.write_str("default locale"),
            Check::Deployment => f.write_str("deployment"),
            Check::Storage => f.write_str("preference storage"),
        }
    }
}

/// Only [`Status::Fail`] makes the run fail; a degraded site still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pass,
    Degraded,
    Fail,
}

#[derive(Debug)]
struct Finding {
    check: Check,
    status: Status,
    detail: String,
}

impl Finding {
    fn new(check: Check, status: Status, detail: impl Into<String>) -> Self {
        Self {
            check,
            status,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.status {
            Status::Pass => "ok  ".green(),
            Status::Degraded => "warn".yellow(),
            Status::Fail => "FAIL".red().bold(),
        };
        write!(f, "  {} {:<20} {}", mark, self.check.to_string(), self.detail)
    }
}

fn check_coverage(catalog: &Catalog, lang: Lang) -> Finding {
    let check = Check::Catalog(lang);
    let total = catalog.len(lang);
    if total == 0 {
        return check.fail("no entries");
    }
    match catalog.missing_keys(lang).as_slice() {
        [] => check.pass(format!("{} keys", total)),
        missing => check.degraded(format!(
            "{} keys, {} missing (first: {})",
            total,
            missing.len(),
            missing[0]
        )),
    }
}

fn check_storage(path: &Path) -> Finding {
    let check = Check::Storage;
    if path.exists() && !path.is_file() {
        return check.fail(format!("{} exists but is not a regular file", path.display()));
    }

    match FileStore::new(path).read(LANGUAGE_KEY) {
        Ok(None) => check.degraded(format!("{}: no language stored yet", path.display())),
        Ok(Some(code)) => match Lang::from_code(&code) {
            Some(lang) => check.pass(format!("{}: language = {}", path.display(), lang)),
            None => check.degraded(format!(
                "{}: unsupported language {:?} will be ignored",
                path.display(),
                code
            )),
        },
        Err(err) => check.fail(format!("{:#}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_storage(path: &Path) -> SiteConfig {
        SiteConfig {
            storage_path: path.to_path_buf(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn builtin_catalog_is_fully_covered() {
        let catalog = Catalog::builtin();
        for &lang in Lang::all() {
            assert_eq!(check_coverage(&catalog, lang).status, Status::Pass);
        }
    }

    #[test]
    fn coverage_gaps_warn_and_empty_tables_fail() {
        let catalog = Catalog::new().with(Lang::En, "nav.home", "Home");
        assert_eq!(check_coverage(&catalog, Lang::En).status, Status::Pass);
        assert_eq!(check_coverage(&catalog, Lang::Id).status, Status::Fail);

        let catalog = catalog
            .with(Lang::Id, "nav.home", "Beranda")
            .with(Lang::En, "nav.about", "About");
        let diag = check_coverage(&catalog, Lang::Id);
        assert_eq!(diag.status, Status::Degraded);
        assert!(diag.detail.contains("nav.about"));
    }

    #[test]
    fn storage_states() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        assert_eq!(check_storage(&path).status, Status::Degraded);

        fs::write(&path, r#"{"language": "id"}"#).unwrap();
        assert_eq!(check_storage(&path).status, Status::Pass);

        fs::write(&path, r#"{"language": "fr"}"#).unwrap();
        assert_eq!(check_storage(&path).status, Status::Degraded);

        fs::write(&path, "{{").unwrap();
        assert_eq!(check_storage(&path).status, Status::Fail);

        assert_eq!(check_storage(dir.path()).status, Status::Fail);
    }

    #[test]
    fn findings_name_their_check() {
        let catalog = Catalog::new().with(Lang::Id, "nav.home", "Beranda");
        let finding = check_coverage(&catalog, Lang::Id);
        assert_eq!(finding.check, Check::Catalog(Lang::Id));
        assert!(finding.to_string().contains("catalog id"));
        assert!(finding.to_string().contains("1 keys"));
    }

    #[test]
    fn memory_storage_is_degraded_not_failed() {
        let config = SiteConfig {
            storage_mode: StorageMode::Memory,
            ..SiteConfig::default()
        };
        let findings = collect(&config, &Catalog::builtin());
        let storage = findings
            .iter()
            .find(|finding| finding.check == Check::Storage)
            .unwrap();
        assert_eq!(storage.status, Status::Degraded);
        assert!(run_self_diagnostics(&config, &Catalog::builtin()).is_ok());
    }

    #[test]
    fn diagnostics_fail_on_corrupt_storage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let result = run_self_diagnostics(&config_with_storage(&path), &Catalog::builtin());
        assert!(result.is_err());
    }

    #[test]
    fn diagnostics_pass_on_fresh_install() {
        let dir = TempDir::new().unwrap();
        let config = config_with_storage(&dir.path().join("prefs.json"));
        assert!(run_self_diagnostics(&config, &Catalog::builtin()).is_ok());
    }
}
