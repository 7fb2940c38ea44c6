use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::highlight::HighlightBackground;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// The highlight background this mode selects; `Auto` reads `COLORFGBG`.
    pub fn background(self) -> HighlightBackground {
        match self {
            Self::Light => HighlightBackground::Light,
            Self::Dark => HighlightBackground::Dark,
            Self::Auto => {
                background_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
            }
        }
    }
}

/// Where the toolbar row sits relative to the editing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_toolbar: bool,
    pub toolbar_bottom: bool,
    pub no_highlight: bool,
    pub theme: Option<ThemeMode>,
    pub link_pattern: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_toolbar: self.no_toolbar || other.no_toolbar,
            toolbar_bottom: self.toolbar_bottom || other.toolbar_bottom,
            no_highlight: self.no_highlight || other.no_highlight,
            theme: other.theme.or(self.theme),
            link_pattern: other
                .link_pattern
                .clone()
                .or_else(|| self.link_pattern.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    pub const fn toolbar_position(&self) -> ToolbarPosition {
        if self.toolbar_bottom {
            ToolbarPosition::Bottom
        } else {
            ToolbarPosition::Top
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mdbar").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mdbar")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdbar").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("mdbar").join("config");
        }
    }

    PathBuf::from(".mdbarrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".mdbarrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# mdbar defaults (saved with --save)".to_string());
    if flags.no_toolbar {
        lines.push("--no-toolbar".to_string());
    }
    if flags.toolbar_bottom {
        lines.push("--toolbar-bottom".to_string());
    }
    if flags.no_highlight {
        lines.push("--no-highlight".to_string());
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {theme_str}"));
    }
    if let Some(pattern) = &flags.link_pattern {
        lines.push(format!("--link-pattern {pattern}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-toolbar" {
            flags.no_toolbar = true;
        } else if token == "--toolbar-bottom" {
            flags.toolbar_bottom = true;
        } else if token == "--no-highlight" {
            flags.no_highlight = true;
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value);
        } else if token == "--link-pattern" {
            if let Some(next) = tokens.get(i + 1) {
                flags.link_pattern = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--link-pattern=") {
            flags.link_pattern = Some(value.to_string());
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// Guess the background from `COLORFGBG` (`"fg;bg"`); dark when unknown.
pub fn background_from_colorfgbg(value: Option<&str>) -> HighlightBackground {
    let bg = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match bg {
        Some(7 | 15) => HighlightBackground::Light,
        _ => HighlightBackground::Dark,
    }
}
