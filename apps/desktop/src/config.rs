use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{Route, DEFAULT_CONTENT_PREFIX};

pub const DEFAULT_CONFIG_PATH: &str = "desktop.toml";
pub const DEFAULT_CLICKS: usize = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub initial_route: Route,
    pub content_prefix: String,
    pub clicks: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_route: Route::First,
            content_prefix: DEFAULT_CONTENT_PREFIX.into(),
            clicks: DEFAULT_CLICKS,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    initial_route: Option<String>,
    content_prefix: Option<String>,
    clicks: Option<usize>,
    log_filter: Option<String>,
}

/// Defaults, then the TOML file at `path` (if present), then `APP__*` env vars.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    apply_file(&mut settings, path)?;
    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

/// CLI flags win over every other layer.
pub fn apply_args(settings: &mut Settings, initial_route: Option<Route>, clicks: Option<usize>) {
    if let Some(route) = initial_route {
        settings.initial_route = route;
    }
    if let Some(clicks) = clicks {
        settings.clicks = clicks;
    }
}

fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config '{}'", path.display()))
        }
    };
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config '{}'", path.display()))?;

    if let Some(v) = file_cfg.initial_route {
        settings.initial_route = v
            .parse::<Route>()
            .with_context(|| format!("invalid initial_route in '{}'", path.display()))?;
    }
    if let Some(v) = file_cfg.content_prefix {
        settings.content_prefix = v;
    }
    if let Some(v) = file_cfg.clicks {
        settings.clicks = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("APP__INITIAL_ROUTE") {
        settings.initial_route = v.parse::<Route>().context("invalid APP__INITIAL_ROUTE")?;
    }
    if let Some(v) = lookup("APP__CONTENT_PREFIX") {
        settings.content_prefix = v;
    }
    if let Some(v) = lookup("APP__CLICKS") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.clicks = parsed;
        }
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
