use crate::app::cli::Cli;
use crate::app::models::{RunConfig, DEFAULT_EXTENSIONS};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const EDITORCONFIG_FILE: &str = ".editorconfig";

/// `~/.config/reindent/settings.toml`: top-level defaults plus named profiles.
#[derive(Deserialize, Debug, Default)]
pub struct SettingsFile {
    #[serde(flatten)]
    defaults: SettingsProfile,
    #[serde(default)]
    profiles: HashMap<String, SettingsProfile>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SettingsProfile {
    extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    show_results: Option<bool>,
}

impl SettingsProfile {
    /// Fields set on `self` win over `fallback`.
    fn or(self, fallback: SettingsProfile) -> SettingsProfile {
        SettingsProfile {
            extensions: self.extensions.or(fallback.extensions),
            exclude: self.exclude.or(fallback.exclude),
            show_results: self.show_results.or(fallback.show_results),
        }
    }
}

fn settings_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("reindent").join("settings.toml"))
}

/// A missing file yields empty settings.
pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings at {:?}", path))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

fn merge_vecs(settings_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = settings_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Builds the run configuration from the CLI and the user's settings file.
pub fn resolve_config(cli: Cli, current_dir: &Path) -> Result<RunConfig> {
    let settings = load_settings_file(&settings_path()?)?;
    Ok(resolve_with_settings(cli, current_dir, settings))
}

pub fn resolve_with_settings(cli: Cli, current_dir: &Path, settings: SettingsFile) -> RunConfig {
    let root = match cli.root {
        Some(root) if root.is_absolute() => root,
        Some(root) => current_dir.join(root),
        None => current_dir.to_path_buf(),
    };

    // Profile: CLI flag > root directory name > none
    let project_name = root.file_name().and_then(|n| n.to_str());
    let profile_key = cli.settings.as_deref().or(project_name);
    let profile = match profile_key.and_then(|k| settings.profiles.get(k)) {
        Some(profile) => {
            log::debug!("Using settings profile {:?}", profile_key);
            profile.clone().or(settings.defaults)
        }
        None => settings.defaults,
    };

    let extensions = cli
        .extensions
        .or(profile.extensions)
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());

    let config_path = cli.config.unwrap_or_else(|| root.join(EDITORCONFIG_FILE));

    RunConfig {
        config_path,
        extensions,
        exclude: merge_vecs(profile.exclude, cli.exclude),
        single_file: cli.file,
        show_results: !cli.quiet && profile.show_results.unwrap_or(true),
        dry_run: cli.dry_run,
        root,
    }
}
