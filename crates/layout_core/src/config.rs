use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    compute::{LayoutPresets, OrientationPreset},
    domain::{SizePair, SplitDirection},
    error::LayoutError,
    resize::{DEFAULT_NOTIFIER_CAPACITY, MAX_NOTIFIER_CAPACITY},
};

pub const DEFAULT_SETTINGS_FILE: &str = "layout.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub landscape_header_percent: u8,
    pub landscape_body_percent: u8,
    pub landscape_left_percent: u8,
    pub landscape_right_percent: u8,
    pub portrait_header_percent: u8,
    pub portrait_body_percent: u8,
    pub portrait_left_percent: u8,
    pub portrait_right_percent: u8,
    pub split_disabled: bool,
    pub window_width: f32,
    pub window_height: f32,
    pub notifier_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            landscape_header_percent: 20,
            landscape_body_percent: 80,
            landscape_left_percent: 50,
            landscape_right_percent: 50,
            portrait_header_percent: 15,
            portrait_body_percent: 85,
            portrait_left_percent: 55,
            portrait_right_percent: 45,
            split_disabled: true,
            window_width: 1280.0,
            window_height: 800.0,
            notifier_capacity: DEFAULT_NOTIFIER_CAPACITY,
        }
    }
}

impl Settings {
    /// Checks every percentage pair and the notifier capacity.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.presets()?;
        if !(1..=MAX_NOTIFIER_CAPACITY).contains(&self.notifier_capacity) {
            return Err(LayoutError::InvalidNotifierCapacity {
                capacity: self.notifier_capacity,
                max: MAX_NOTIFIER_CAPACITY,
            });
        }
        Ok(())
    }

    pub fn presets(&self) -> Result<LayoutPresets, LayoutError> {
        Ok(LayoutPresets {
            landscape: OrientationPreset {
                content_split_direction: SplitDirection::Horizontal,
                header_body: SizePair::try_new(
                    self.landscape_header_percent,
                    self.landscape_body_percent,
                )?,
                left_right: SizePair::try_new(
                    self.landscape_left_percent,
                    self.landscape_right_percent,
                )?,
            },
            portrait: OrientationPreset {
                content_split_direction: SplitDirection::Vertical,
                header_body: SizePair::try_new(
                    self.portrait_header_percent,
                    self.portrait_body_percent,
                )?,
                left_right: SizePair::try_new(
                    self.portrait_left_percent,
                    self.portrait_right_percent,
                )?,
            },
            split_disabled: self.split_disabled,
        })
    }
}

/// Loads `layout.toml` from the working directory, then applies `APP__*`
/// environment overrides.
pub fn load_settings() -> Result<Settings, LayoutError> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> Result<Settings, LayoutError> {
    let mut settings = read_settings_file(path)?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok())?;
    settings.validate()?;
    tracing::debug!(path = %path.display(), ?settings, "layout settings loaded");
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings, LayoutError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no layout settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(LayoutError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_settings(&raw, path)
}

fn parse_settings(raw: &str, path: &Path) -> Result<Settings, LayoutError> {
    toml::from_str(raw).map_err(|source| LayoutError::ConfigParse {
        path: PathBuf::from(path),
        source,
    })
}

fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), LayoutError> {
    if let Some(v) = env_value(&lookup, "APP__SPLIT_DISABLED")? {
        settings.split_disabled = v;
    }
    if let Some(v) = env_value(&lookup, "APP__WINDOW_WIDTH")? {
        settings.window_width = v;
    }
    if let Some(v) = env_value(&lookup, "APP__WINDOW_HEIGHT")? {
        settings.window_height = v;
    }
    if let Some(v) = env_value(&lookup, "APP__NOTIFIER_CAPACITY")? {
        settings.notifier_capacity = v;
    }
    Ok(())
}

fn env_value<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, LayoutError> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| LayoutError::InvalidEnvOverride {
            name: name.to_string(),
            value,
        })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
