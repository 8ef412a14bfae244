use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) no_seed: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Config {
    /// Load the first readable config file; warnings go to stderr when
    /// `verbose` is set.
    pub(crate) fn load(verbose: bool) -> Self {
        Self::load_from(&Self::get_config_paths(), verbose)
    }

    fn load_from(paths: &[PathBuf], verbose: bool) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::read(path) {
                Ok(config) => {
                    if verbose {
                        eprintln!("[debug] loaded config from {}", path.display());
                    }
                    return config;
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    fn read(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        toml::from_str::<Config>(&content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/medtimeline/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("medtimeline").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("medtimeline").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.medtimeline.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".medtimeline.toml"));
        }

        paths
    }
}
