//! Project configuration (renderkitdoc.toml) merged with command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use renderkitdoc_static::{BuildConfig, RunConfig};
use serde::Deserialize;

/// Environment variables consulted for the active locale, in order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Configuration file structure (renderkitdoc.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub generate: GenerateSettings,
}

#[derive(Debug, Deserialize)]
pub struct GenerateSettings {
    /// Configuration tree to document
    pub faces_config: Option<String>,
    #[serde(default = "default_render_kit_id")]
    pub render_kit_id: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Directory holding index.html and stylesheet.css overrides
    pub assets_dir: Option<String>,
    pub version: Option<String>,
    pub locale: Option<String>,
    pub footer: Option<String>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            faces_config: None,
            render_kit_id: default_render_kit_id(),
            output: default_output(),
            assets_dir: None,
            version: None,
            locale: None,
            footer: None,
        }
    }
}

fn default_render_kit_id() -> String {
    "HTML_BASIC".to_string()
}
fn default_output() -> String {
    "target".to_string()
}

/// Flags shared by `generate` and `watch`.
#[derive(Debug, Args, Default)]
pub struct GenerateArgs {
    /// Configuration tree to document (.yaml, .yml or .json)
    #[arg(short, long)]
    pub faces_config: Option<PathBuf>,

    /// Render-kit to document
    #[arg(short, long)]
    pub render_kit_id: Option<String>,

    /// Output root (documents go to <OUTPUT>/renderkitdoc)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read index.html and stylesheet.css from this directory
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Version shown next to the render-kit title
    #[arg(long, env = "RENDERKITDOC_VERSION")]
    pub impl_version: Option<String>,

    /// Active locale, e.g. en_US (defaults to LC_ALL / LC_MESSAGES / LANG)
    #[arg(long)]
    pub locale: Option<String>,
}

/// Fully resolved settings for one documentation run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub faces_config: PathBuf,
    pub assets_dir: Option<PathBuf>,
    pub build: BuildConfig,
}

/// Load configuration from the given file if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Merge command-line flags over file settings. Flags win.
pub fn resolve(args: GenerateArgs, file: ConfigFile) -> Result<Settings> {
    let settings = file.generate;

    let faces_config = args
        .faces_config
        .or_else(|| settings.faces_config.map(PathBuf::from))
        .context("No configuration tree given; pass --faces-config or set generate.faces_config")?;

    let locale = args
        .locale
        .or(settings.locale)
        .or_else(locale_from_env)
        .unwrap_or_default();

    Ok(Settings {
        faces_config,
        assets_dir: args.assets_dir.or_else(|| settings.assets_dir.map(PathBuf::from)),
        build: BuildConfig {
            output_dir: args.output.unwrap_or_else(|| PathBuf::from(&settings.output)),
            render_kit_id: args.render_kit_id.unwrap_or(settings.render_kit_id),
            run: RunConfig {
                country_code: country_code(&locale),
                version: args.impl_version.or(settings.version),
                footer: settings.footer,
            },
        },
    })
}

fn locale_from_env() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// Country part of a POSIX or BCP 47 style locale, lower-cased.
///
/// `en_US.UTF-8` and `en-US` give `us`; a bare country such as `US` is
/// returned as is; `en`, `C` and `POSIX` carry no country and give `""`.
pub fn country_code(locale: &str) -> String {
    let locale = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    let mut parts = locale.split(['_', '-']);
    let first = parts.next().unwrap_or_default();

    match parts.next() {
        Some(country) => country.to_lowercase(),
        None if first.len() == 2 && first.chars().all(|c| c.is_ascii_uppercase()) => {
            first.to_lowercase()
        }
        None => String::new(),
    }
}
