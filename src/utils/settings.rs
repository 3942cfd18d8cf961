use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::constants::*;
use crate::core::biome::Biome;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Plugin configuration, stored as TOML with kebab-case keys.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RigConfig {
    /// Seconds between two productions of the same rig.
    #[serde(default = "default_generation_delay")]
    pub generation_delay: u64,
    /// Biome identifiers a rig's hopper may stand in.
    #[serde(default)]
    pub allowed_biomes: Vec<String>,
}

fn default_generation_delay() -> u64 {
    DEFAULT_GENERATION_DELAY
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            generation_delay: DEFAULT_GENERATION_DELAY,
            allowed_biomes: Biome::ALL
                .iter()
                .filter(|b| b.is_ocean())
                .map(|b| b.name().to_string())
                .collect(),
        }
    }
}

impl RigConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: RigConfig = toml::from_str(content)?;
        for name in &config.allowed_biomes {
            if Biome::from_name(name).is_none() {
                tracing::warn!("Unknown biome in allowed-biomes: {}", name);
            }
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Writes the default config unless a file already exists at `path`.
    pub fn save_default(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Ok(());
        }
        let write_err = |source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string(&RigConfig::default())?;
        fs::write(path, content).map_err(write_err)?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }

    pub fn is_biome_allowed(&self, biome: Biome) -> bool {
        self.allowed_biomes.iter().any(|b| b == biome.name())
    }

    /// Interval in scheduler ticks; never shorter than one tick.
    pub fn period_ticks(&self) -> u64 {
        self.generation_delay.saturating_mul(TICKS_PER_SECOND).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("oilrigs-{}-{}", std::process::id(), name))
            .join("config.toml")
    }

    #[test]
    fn test_parse_kebab_keys() {
        let config = RigConfig::from_toml(
            r#"
generation-delay = 5
allowed-biomes = ["OCEAN", "RIVER"]
"#,
        )
        .unwrap();
        assert_eq!(config.generation_delay, 5);
        assert_eq!(config.period_ticks(), 100);
        assert!(config.is_biome_allowed(Biome::River));
        assert!(!config.is_biome_allowed(Biome::DeepOcean));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = RigConfig::from_toml("").unwrap();
        assert_eq!(config.generation_delay, DEFAULT_GENERATION_DELAY);
        assert!(config.allowed_biomes.is_empty());
    }

    #[test]
    fn test_zero_delay_still_ticks() {
        let config = RigConfig {
            generation_delay: 0,
            allowed_biomes: Vec::new(),
        };
        assert_eq!(config.period_ticks(), 1);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let config = RigConfig::from_toml("generation-delay = 9223372036854775807").unwrap();
        assert_eq!(config.period_ticks(), u64::MAX);
    }

    #[test]
    fn test_malformed_toml() {
        let err = RigConfig::from_toml("generation-delay = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_default_then_load() {
        let path = temp_path("defaults");
        let _ = fs::remove_file(&path);
        RigConfig::save_default(&path).unwrap();
        let loaded = RigConfig::load(&path).unwrap();
        assert_eq!(loaded, RigConfig::default());
        assert!(loaded.is_biome_allowed(Biome::Ocean));
        assert!(!loaded.is_biome_allowed(Biome::Beach));

        // An existing file is left untouched
        fs::write(&path, "generation-delay = 7\n").unwrap();
        RigConfig::save_default(&path).unwrap();
        assert_eq!(RigConfig::load(&path).unwrap().generation_delay, 7);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RigConfig::load(Path::new("/nonexistent/oilrigs/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
