use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub vocabulary: Option<VocabularyConfig>,
    pub parsing: Option<ParsingFileConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Path to a CSV skills table; its header row replaces the built-in terms.
    pub skills_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingFileConfig {
    /// Section names appended to the built-in set.
    pub extra_sections: Option<Vec<String>>,
    /// Custom date-range regex for the experience calculator.
    pub date_range_pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color: Option<bool>,
}

/// Platform config directory path: `<config_dir>/cvparse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cvparse").join("config.toml"))
}

/// Load config by cascading CWD `.cvparse.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".cvparse.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        vocabulary: Some(VocabularyConfig {
            skills_path: overlay
                .vocabulary
                .as_ref()
                .and_then(|v| v.skills_path.clone())
                .or_else(|| base.vocabulary.as_ref().and_then(|v| v.skills_path.clone())),
        }),
        parsing: Some(ParsingFileConfig {
            extra_sections: overlay
                .parsing
                .as_ref()
                .and_then(|p| p.extra_sections.clone())
                .or_else(|| base.parsing.as_ref().and_then(|p| p.extra_sections.clone())),
            date_range_pattern: overlay
                .parsing
                .as_ref()
                .and_then(|p| p.date_range_pattern.clone())
                .or_else(|| {
                    base.parsing
                        .as_ref()
                        .and_then(|p| p.date_range_pattern.clone())
                }),
        }),
        display: Some(DisplayConfig {
            color: overlay
                .display
                .as_ref()
                .and_then(|d| d.color)
                .or_else(|| base.display.as_ref().and_then(|d| d.color)),
        }),
    }
}
