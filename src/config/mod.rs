#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::City;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// 實際執行時使用的設定：TOML 檔提供預設值，命令列參數優先
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub chicago_file: String,
    pub new_york_city_file: String,
    pub washington_file: String,
    pub monitor: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DatasetConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            chicago_file: City::Chicago.default_file().to_string(),
            new_york_city_file: City::NewYorkCity.default_file().to_string(),
            washington_file: City::Washington.default_file().to_string(),
            monitor: false,
        }
    }

    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            data_dir: config.data_dir().to_path_buf(),
            chicago_file: config.city_file(City::Chicago).to_string(),
            new_york_city_file: config.city_file(City::NewYorkCity).to_string(),
            washington_file: config.city_file(City::Washington).to_string(),
            monitor: config.monitor_enabled(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                tracing::debug!("Loaded configuration file {}", path);
                Self::from_toml(&toml)
            }
            None => Self::default(),
        };

        // 命令列覆蓋設定
        if let Some(dir) = &cli.data_dir {
            config.data_dir = PathBuf::from(dir);
        }
        if cli.monitor {
            config.monitor = true;
        }

        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for DatasetConfig {
    fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn city_file(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago_file,
            City::NewYorkCity => &self.new_york_city_file,
            City::Washington => &self.washington_file,
        }
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir.to_string_lossy())
    }
}
