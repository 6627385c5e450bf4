use datespan_extract::{
    DatePeriodExtractor, EnglishDatePeriodConfiguration, ExtractorSettings, PatternTable,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR_NAME: &str = "datespan";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Year range and relative-to-now markers.
    #[serde(flatten)]
    pub settings: ExtractorSettings,
    /// Pattern overrides; missing entries keep the English defaults.
    #[serde(default)]
    pub patterns: PatternTable,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    /// `~/datespan`.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load `~/datespan/config.json`, or the defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            debug!(
                "No config file at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load a config file from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'datespan init' to create config.",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        Self::create_config_at(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - extractor.min_year / max_year: accepted range for bare years");
        println!("   - extractor.relative_markers: words anchoring 'within ... from today'");
        println!("   - extractor.patterns: regex overrides, see 'datespan patterns'");
        println!("   - logging.level: default log filter when RUST_LOG is unset");
        println!();
        Ok(())
    }

    /// Write the default config to `path`, refusing to overwrite.
    pub fn create_config_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)?;
        info!("Wrote default config to {}", path.display());

        Ok(())
    }

    /// Build an English extractor from this config.
    pub fn build_extractor(
        &self,
    ) -> anyhow::Result<DatePeriodExtractor<EnglishDatePeriodConfiguration>> {
        let configuration = EnglishDatePeriodConfiguration::new(
            &self.extractor.patterns,
            self.extractor.settings.clone(),
        )?;
        Ok(DatePeriodExtractor::new(configuration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("datespan_cfg_{}", uuid::Uuid::now_v7()))
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty object should deserialize");
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.extractor.settings.min_year, datespan_core::MIN_YEAR);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_settings_are_flattened() {
        let config: Config = serde_json::from_str(
            r#"{"extractor": {"min_year": 1900, "max_year": 2000, "patterns": {"century_suffix": "^siecle\\b"}}}"#,
        )
        .expect("partial config should deserialize");

        assert_eq!(config.extractor.settings.min_year, 1900);
        assert_eq!(config.extractor.settings.max_year, 2000);
        assert_eq!(
            config.extractor.settings.relative_markers,
            vec!["today", "now"]
        );
        assert_eq!(config.extractor.patterns.century_suffix, r"^siecle\b");
        assert_eq!(config.extractor.patterns.year, PatternTable::english().year);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_then_load() {
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).expect("scratch dir should be created");
        let path = dir.join(CONFIG_FILE_NAME);

        Config::create_config_at(&path).expect("config should be written");
        let loaded = Config::load_from(&path).expect("written config should load");
        assert_eq!(loaded, Config::default());

        assert!(Config::create_config_at(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = scratch_dir().join(CONFIG_FILE_NAME);
        let err = Config::load_from(&path).err().map(|e| e.to_string());
        assert!(err.is_some_and(|e| e.contains("datespan init")));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_build_extractor() {
        let extractor = Config::default()
            .build_extractor()
            .expect("default config should build");
        let found = extractor.extract_now("from 2010 to 2015");
        assert_eq!(found.len(), 1);
        assert_eq!(
            extractor.config().settings(),
            &Config::default().extractor.settings
        );
    }

    #[test]
    fn test_build_extractor_rejects_bad_pattern() {
        let mut config = Config::default();
        config.extractor.patterns.till = "(to".to_string();
        let err = config.build_extractor().err().map(|e| e.to_string());
        assert!(err.is_some_and(|e| e.contains("till")));
    }
}
