// SPDX-License-Identifier: PMPL-1.0-or-later

//! jsw-portal: render a localized link-portal page
//!
//! Reads a site description and a dictionary catalog, picks a language and
//! writes the static page (or every language at once with `build`).

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use jsw_portal::config::PortalConfig;
use jsw_portal::i18n::{self, Catalog, Lang};
use jsw_portal::render::{self, OutputFormat};
use jsw_portal::types::SiteDescription;
use jsw_portal::{build, diagnostics, loader, search};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsw-portal")]
#[command(version)]
#[command(about = "Render a localized link-portal page with client-side card search")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: portal.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page
    Render {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        language: LangArgs,

        /// Output format (default: from the output file extension, else html)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pre-render every supported language into a directory
    Build {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        language: LangArgs,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Show which language a preference list selects
    Detect {
        /// Locale preferences, most preferred first
        #[arg(long, value_delimiter = ',')]
        prefer: Vec<String>,

        /// HTTP Accept-Language header value
        #[arg(long, conflicts_with = "prefer")]
        accept_language: Option<String>,
    },

    /// List the cards a search query leaves visible
    Search {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        language: LangArgs,

        /// Search query
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },

    /// Check inputs for missing translations and broken items
    Check {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Site description (JSON, YAML or script assignment)
    #[arg(long, value_name = "FILE")]
    site: Option<PathBuf>,

    /// Dictionary catalog (JSON, YAML or script assignment)
    #[arg(long, value_name = "FILE")]
    i18n: Option<PathBuf>,
}

#[derive(Args)]
struct LangArgs {
    /// Pin the language (en, zh-Hans, zh-Hant)
    #[arg(long)]
    lang: Option<Lang>,

    /// Locale preferences for detection, most preferred first
    #[arg(long, value_delimiter = ',')]
    prefer: Vec<String>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PortalConfig::load(path)?,
        None => PortalConfig::load_default()?,
    };

    match cli.command {
        Commands::Render {
            inputs,
            language,
            format,
            output,
        } => {
            let (site, catalog) = load_inputs(&inputs, &config)?;
            let lang = select_lang(&language, &config);
            let model = render::build_model(&site, &catalog, lang);
            let format = format
                .or_else(|| output.as_deref().and_then(OutputFormat::for_path))
                .unwrap_or_default();
            let rendered = format.serialize(&model)?;

            if let Some(output_path) = output {
                fs::write(&output_path, rendered)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                log::info!("wrote {}", output_path.display());
                println!("Page ({}) saved to: {}", lang, output_path.display());
            } else {
                print!("{}", rendered);
            }
        }

        Commands::Build {
            inputs,
            language,
            out,
        } => {
            let (site, catalog) = load_inputs(&inputs, &config)?;
            let out_dir = out
                .or_else(|| config.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from("public"));

            let mut options = build::BuildOptions::new(out_dir);
            options.default_lang = Some(select_lang(&language, &config));
            options.preferences = preferences(&language, &config);

            let report = build::build_site(&site, &catalog, &options)?;

            println!("{}", "PORTAL BUILD".bold().yellow());
            println!("  Output: {}", options.out_dir.display());
            println!("  Default language: {}", report.default_lang);
            for page in &report.pages {
                println!(
                    "    {:8} {:22} {:>8} bytes  {}",
                    page.lang.to_string(),
                    page.path,
                    page.bytes,
                    page.sha256[..12].dimmed()
                );
            }
            println!(
                "  Manifest: {}",
                options.out_dir.join(build::MANIFEST_FILE).display()
            );
        }

        Commands::Detect {
            prefer,
            accept_language,
        } => {
            let prefs = if let Some(header) = accept_language {
                i18n::parse_accept_language(&header)
            } else if !prefer.is_empty() {
                prefer
            } else if !config.prefer.is_empty() {
                config.prefer.clone()
            } else {
                i18n::preferences_from_env()
            };
            log::debug!("preferences: {:?}", prefs);
            println!("{}", Lang::detect(&prefs));
        }

        Commands::Search {
            inputs,
            language,
            query,
        } => {
            let (site, catalog) = load_inputs(&inputs, &config)?;
            let lang = select_lang(&language, &config);
            let model = render::build_model(&site, &catalog, lang);

            let total = model.cards().count();
            let hits = search::visible(&query, model.cards());
            for card in &hits {
                println!("  {} {}  {}", card.icon, card.title.bold(), card.href.dimmed());
                if !card.desc.is_empty() {
                    println!("      {}", card.desc);
                }
            }
            println!("\n{} of {} cards visible ({})", hits.len(), total, lang);
        }

        Commands::Check { inputs } => {
            let (site, catalog) = load_inputs(&inputs, &config)?;
            let checks = diagnostics::check(&site, &catalog);
            diagnostics::print_report(&checks);

            if diagnostics::has_errors(&checks) {
                return Err(anyhow!("input check reported errors"));
            }
        }
    }

    Ok(())
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn load_inputs(inputs: &InputArgs, config: &PortalConfig) -> Result<(SiteDescription, Catalog)> {
    let Some(site_path) = inputs.site.as_ref().or(config.site.as_ref()) else {
        bail!("no site description given (use --site or set `site` in portal.yaml)");
    };
    let Some(i18n_path) = inputs.i18n.as_ref().or(config.i18n.as_ref()) else {
        bail!("no dictionary catalog given (use --i18n or set `i18n` in portal.yaml)");
    };
    let site = loader::load_site(site_path)?;
    let catalog = loader::load_catalog(i18n_path)?;
    Ok((site, catalog))
}

/// Flag, then config, then environment.
fn preferences(language: &LangArgs, config: &PortalConfig) -> Vec<String> {
    if !language.prefer.is_empty() {
        language.prefer.clone()
    } else if !config.prefer.is_empty() {
        config.prefer.clone()
    } else {
        i18n::preferences_from_env()
    }
}

/// `--lang`, then `--prefer`, then config `lang`, then config `prefer`,
/// then the environment.
fn select_lang(language: &LangArgs, config: &PortalConfig) -> Lang {
    if let Some(lang) = language.lang {
        return lang;
    }
    if !language.prefer.is_empty() {
        return Lang::detect(&language.prefer);
    }
    if let Some(lang) = config.lang {
        return lang;
    }
    Lang::detect(&preferences(language, config))
}
