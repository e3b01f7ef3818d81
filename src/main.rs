// SPDX-License-Identifier: PMPL-1.0-or-later

//! seahorse-locale: drive the site's locale store from the command line
//!
//! Stands in for the page components: it switches the language the way the
//! EN/ID buttons do, renders keys the way the sections do, and prints the
//! nav bar and asset URLs the deployed site would use.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use seahorse_locale::config::SiteConfig;
use seahorse_locale::diagnostics;
use seahorse_locale::i18n::{Catalog, Lang};
use seahorse_locale::nav::{self, Page, ScrollSpy};
use seahorse_locale::store::LocaleStore;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seahorse-locale")]
#[command(version)]
#[command(about = "Locale store and navigation model for the PT Sea Horse site")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration file (YAML, default: ./seahorse.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Preference file, overriding the configured storage path
    #[arg(short, long, global = true)]
    storage: Option<PathBuf>,

    /// Translation catalog (JSON) to use instead of the built-in tables
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active language
    Show,

    /// Switch the active language and persist the choice
    Set {
        /// Language code (en, id)
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Translate keys in the active language
    #[command(name = "t")]
    Translate {
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },

    /// List catalog keys
    Keys {
        /// Language to list (default: active language)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Only list keys other languages define but this one lacks
        #[arg(short, long)]
        missing: bool,
    },

    /// Print the localized nav bar of a page
    Nav {
        #[arg(short, long, value_enum, default_value = "home")]
        page: PageArg,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the deployed URL of a static asset
    Asset {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Check catalog coverage, storage and configuration
    Diagnose,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Id,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Id => Lang::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PageArg {
    Home,
    Contact,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::Contact => Page::Contact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }

    let catalog = match &cli.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&json)?
        }
        None => Catalog::builtin(),
    };

    if let Commands::Diagnose = cli.command {
        return diagnostics::run_self_diagnostics(&config, &catalog);
    }

    let storage = config.storage_mode.open(&config.storage_path);
    let mut store = LocaleStore::load_with_default(catalog, storage, config.default_locale);

    match cli.command {
        Commands::Show => {
            let lang = store.active_locale();
            println!("{} ({})", lang, lang.native_name());
        }

        Commands::Set { code } => {
            if store.set_active_locale(&code) {
                let lang = store.active_locale();
                println!("Language set to: {} ({})", lang, lang.native_name());
            } else {
                println!(
                    "{} unsupported language {:?}, keeping {}",
                    "warning:".yellow().bold(),
                    code,
                    store.active_locale()
                );
            }
        }

        Commands::Translate { keys } => {
            for key in &keys {
                println!("{}", store.translate(key));
            }
        }

        Commands::Keys { lang, missing } => {
            let lang = lang.map(Lang::from).unwrap_or_else(|| store.active_locale());
            let catalog = store.catalog();
            if missing {
                for key in catalog.missing_keys(lang) {
                    println!("{}", key);
                }
            } else {
                for key in catalog.keys(lang) {
                    println!("{:40} {}", key.cyan(), catalog.translate(lang, key));
                }
            }
        }

        Commands::Nav { page, json } => {
            let page = Page::from(page);
            let items = nav::nav_items(&store, page, &ScrollSpy::new());
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    let marker = if item.active { "*" } else { " " };
                    println!(
                        "  [{}] {:12} {}",
                        marker,
                        item.label,
                        item.action.href(&config)
                    );
                }
                let switch: Vec<String> = nav::language_switch(&store)
                    .into_iter()
                    .map(|button| {
                        if button.selected {
                            button.label.bold().to_string()
                        } else {
                            button.label.dimmed().to_string()
                        }
                    })
                    .collect();
                println!("  {}", switch.join(" | "));
            }
        }

        Commands::Asset { path } => {
            println!("{}", config.asset_path(&path));
        }

        // handled before the store is loaded
        Commands::Diagnose => {}
    }

    Ok(())
}
