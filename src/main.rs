//! Command-line front end for the site's language and theme preferences.
//!
//! Usage:
//!   portfolio-locale lang                 # Active language
//!   portfolio-locale set-lang es          # Persist preference and move to /es/<page>
//!   portfolio-locale url es /about        # Localized path for a page
//!   portfolio-locale t hero.title [es]    # Translate a key path
//!   portfolio-locale group nav [es]       # Translate every key under a path
//!   portfolio-locale theme                # Active theme
//!   portfolio-locale toggle-theme         # Flip and persist the theme
//!   portfolio-locale projects [es]        # List projects, featured first
//!   portfolio-locale validate             # Report missing translations
//!   portfolio-locale metrics              # Run lookups from stdin keys, print counters
//!
//! Environment (all optional):
//! - CONTENT_PATH (defaults to data/content.json)
//! - DEFAULT_LANGUAGE (defaults to en)
//! - PREFERENCES_PATH (defaults to .portfolio-preferences.json)
//! - SITE_PATH, BROWSER_LANGUAGE, PREFERS_DARK, NON_INTERACTIVE

use anyhow::{bail, Context, Result};
use portfolio_locale::config::Config;
use portfolio_locale::i18n::{ContentValidator, JsonFileSource, Language};
use portfolio_locale::site::Site;
use std::io::BufRead;
use tracing::info;

fn print_usage() {
    eprintln!(
        r#"Usage: portfolio-locale <command> [args]

Commands:
  lang                   Print the active language
  set-lang <code>        Persist a language preference and navigate to the localized page
  url <code> [path]      Print the localized path of a page
  t <key> [code]         Translate a dotted key path
  group <key> [code]     Translate every entry under a key path (JSON output)
  theme                  Print the active theme
  toggle-theme           Flip the theme and persist it
  projects [code]        List projects from the content file, featured first
  validate               Check the content file for missing translations
  metrics                Translate key paths read from stdin and print lookup metrics"#
    );
}

fn language_arg(args: &[String], index: usize, site: &Site<JsonFileSource>) -> Result<Language> {
    match args.get(index) {
        Some(code) => Ok(code.parse()?),
        None => Ok(site.language.resolve_active_language()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_locale=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    let config = Config::from_env()?;
    let site = Site::from_config(&config);

    match command.as_str() {
        "lang" => {
            let lang = site.language.resolve_active_language();
            println!("{} {} {}", lang.code(), lang.flag(), lang.native_name());
        }
        "set-lang" => {
            let code = args.get(2).context("set-lang requires a language code")?;
            let lang: Language = code.parse()?;
            match site.language.switch_language(lang) {
                Some(target) => println!("{}", target),
                None => info!("Non-interactive context, preference not stored"),
            }
        }
        "url" => {
            let code = args.get(2).context("url requires a language code")?;
            let lang: Language = code.parse()?;
            let path = args.get(3).map(String::as_str).unwrap_or("");
            println!("{}", site.language.localized_path(lang, path));
        }
        "t" => {
            let key = args.get(2).context("t requires a key path")?;
            let lang = language_arg(&args, 3, &site)?;
            println!("{}", site.translator.text(key, lang).await);
        }
        "group" => {
            let key = args.get(2).context("group requires a key path")?;
            let lang = language_arg(&args, 3, &site)?;
            let group = site.translator.resolve_text_group(key, lang.code()).await;
            println!("{}", serde_json::to_string_pretty(&group)?);
        }
        "theme" => {
            println!("{}", site.theme.resolve_active_theme());
        }
        "toggle-theme" => {
            println!("{}", site.theme.toggle_theme());
        }
        "projects" => {
            let lang = language_arg(&args, 2, &site)?;
            let default_language = site.translator.default_language();
            let portfolio = site
                .portfolio()
                .await
                .with_context(|| format!("Invalid portfolio data in {}", config.content_path))?;
            for project in portfolio.featured_projects() {
                let marker = if project.featured { "*" } else { " " };
                println!(
                    "{} {}\t{}",
                    marker,
                    project.title(lang, default_language),
                    project.description(lang, default_language)
                );
            }
        }
        "validate" => {
            let content = site.translator.cache().get_or_load().await;
            if !site.translator.cache().is_loaded() {
                bail!("Content could not be loaded from {}", config.content_path);
            }
            let report = ContentValidator::validate(&content);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        "metrics" => {
            let lang = site.language.resolve_active_language();
            for line in std::io::stdin().lock().lines() {
                let line = line.context("Failed to read key path from stdin")?;
                let key = line.trim();
                if !key.is_empty() {
                    println!("{}\t{}", key, site.translator.text(key, lang).await);
                }
            }
            let report = site.translator.cache().metrics().report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "--help" | "-h" | "help" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
