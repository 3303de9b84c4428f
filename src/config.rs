use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{DEFAULT_SLIDE_INTERVAL_MS, REDUCED_MOTION_THRESHOLD_MS};
use crate::slide::SlideSet;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("slide interval must be greater than zero")]
    ZeroInterval,
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
}

/// What the hero region shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroMode {
    /// Rotating background images.
    #[default]
    ImageSlider,
    /// A looping background video; the image slider stays idle.
    Video,
}

/// Motion settings fixed at page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub reduced_motion: bool,
    pub base_interval_ms: u64,
}

impl DisplayPreferences {
    pub fn new(reduced_motion: bool, base_interval_ms: u64) -> Self {
        Self { reduced_motion, base_interval_ms }
    }

    /// Rotation period actually used: reduced motion doubles short intervals.
    pub fn effective_interval_ms(&self) -> u64 {
        if self.reduced_motion && self.base_interval_ms < REDUCED_MOTION_THRESHOLD_MS {
            self.base_interval_ms * 2
        } else {
            self.base_interval_ms
        }
    }

    pub fn effective_interval(&self) -> Duration {
        Duration::from_millis(self.effective_interval_ms())
    }
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self::new(false, DEFAULT_SLIDE_INTERVAL_MS)
    }
}

/// Page-level hero settings, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub mode: HeroMode,
    pub interval_ms: u64,
    /// Overrides the environment's reduced-motion preference when set.
    pub reduced_motion: Option<bool>,
    pub slides: Vec<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            mode: HeroMode::ImageSlider,
            interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            reduced_motion: None,
            slides: Vec::new(),
        }
    }
}

impl HeroConfig {
    /// Loads a TOML config. Relative slide paths are resolved against the
    /// config file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: HeroConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.slides = config
                .slides
                .into_iter()
                .map(|slide| resolve_slide(base, slide))
                .collect();
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), slides = config.slides.len(), "loaded hero config");
        Ok(config)
    }

    /// Builds a config whose slides are the images of `dir`, sorted by file name.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let slides = load_sorted_image_paths(dir)?
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        Ok(Self { slides, ..Self::default() })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.mode == HeroMode::ImageSlider && self.slides.is_empty() {
            tracing::warn!("image slider configured without slides; hero will stay blank");
        }
        Ok(())
    }

    pub fn slide_set(&self) -> SlideSet {
        SlideSet::new(self.slides.iter().cloned())
    }

    /// Resolves the motion preference, falling back to what the environment reports.
    pub fn preferences(&self, environment_reduced_motion: bool) -> DisplayPreferences {
        DisplayPreferences::new(
            self.reduced_motion.unwrap_or(environment_reduced_motion),
            self.interval_ms,
        )
    }
}

fn resolve_slide(base: &Path, slide: String) -> String {
    if slide.contains("://") || Path::new(&slide).is_absolute() {
        slide
    } else {
        base.join(&slide).to_string_lossy().into_owned()
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let read_dir_error = |source: std::io::Error| ConfigError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
            .unwrap_or(false);
        if is_image {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(ConfigError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}
