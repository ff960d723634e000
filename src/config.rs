use crate::error::*;

use cli_log::debug;
use serde::Deserialize;
use std::env::var;
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config.toml";

/// Character palette used for rails, corners and junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Vertical tick marks between signal blocks and through quiet columns.
    pub show_grid: bool,

    /// Header rows with time-step indices.
    pub show_time_axis: bool,

    pub glyphs: GlyphKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_time_axis: true,
            glyphs: GlyphKind::Unicode,
        }
    }
}


/// Contents of `config.toml`. Absent keys keep the built-in default.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileDefaults {
    pub grid: Option<bool>,
    pub time: Option<bool>,
    pub glyphs: Option<GlyphKind>,
}

impl FileDefaults {
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(grid) = self.grid {
            config.show_grid = grid;
        }
        if let Some(time) = self.time {
            config.show_time_axis = time;
        }
        if let Some(glyphs) = self.glyphs {
            config.glyphs = glyphs;
        }

        config
    }
}


#[derive(Debug)]
pub struct Config {
    config_dir: Option<PathBuf>,
    defaults: FileDefaults,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = Self::find_config_dir();
        Self::load_from(config_dir)
    }

    pub fn test_config() -> Self {
        Self {
            config_dir: None,
            defaults: FileDefaults::default(),
        }
    }

    fn load_from(config_dir: Option<PathBuf>) -> Result<Self> {
        let defaults = match &config_dir {
            Some(dir) => Self::read_defaults(dir.join(CONFIG_FILE))?,
            None => FileDefaults::default(),
        };

        Ok(Self {
            config_dir,
            defaults,
        })
    }

    fn find_config_dir() -> Option<PathBuf> {
        let mut path = PathBuf::new();

        let non_empty = |name: &str| var(name).ok().filter(|v| !v.is_empty());

        if let Some(config_home) = non_empty("WAVETEXT_CONFIG_HOME") {
            path.push(config_home);
        } else if let Some(xdg_config_home) = non_empty("XDG_CONFIG_HOME") {
            path.push(xdg_config_home);
            path.push("wavetext");
        } else if let Some(home) = non_empty("HOME") {
            path.push(home);
            path.push(".config");
            path.push("wavetext");
        }

        if !path.as_os_str().is_empty() && path.exists() {
            Some(path)
        } else {
            None
        }
    }

    fn read_defaults(path: PathBuf) -> Result<FileDefaults> {
        if !path.exists() {
            return Ok(FileDefaults::default());
        }

        debug!("reading defaults from {}", path.display());

        let text = fs::read_to_string(&path)?;
        toml::from_str(&text)
            .map_err(|e| Error::InvalidConfig(path.display().to_string(), e.to_string()))
    }

    pub fn get_config_dir(&self) -> Option<&PathBuf> {
        self.config_dir.as_ref()
    }

    /// Built-in defaults overlaid with the config file.
    pub fn render_config(&self) -> RenderConfig {
        self.defaults.apply(RenderConfig::default())
    }
}
