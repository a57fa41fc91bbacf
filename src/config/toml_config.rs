use crate::core::ConfigProvider;
use crate::domain::model::City;
use crate::utils::error::{BikeshareError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub data: Option<DataConfig>,
    pub cities: Option<CityFiles>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub directory: String,
}

/// 城市清單是封閉的，只能改檔名不能新增城市
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CityFiles {
    pub chicago: Option<String>,
    pub new_york_city: Option<String>,
    pub washington: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BikeshareError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BikeshareError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIKESHARE_DATA})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BikeshareError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得資料目錄，未設定時為目前目錄
    pub fn data_directory(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.directory.as_str())
    }

    /// 取得某城市的自訂檔名
    pub fn city_file_override(&self, city: City) -> Option<&str> {
        let cities = self.cities.as_ref()?;
        let file = match city {
            City::Chicago => &cities.chicago,
            City::NewYorkCity => &cities.new_york_city,
            City::Washington => &cities.washington,
        };
        file.as_deref()
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &Path {
        Path::new(self.data_directory().unwrap_or("."))
    }

    fn city_file(&self, city: City) -> &str {
        self.city_file_override(city).unwrap_or(city.default_file())
    }

    fn monitor_enabled(&self) -> bool {
        self.monitoring_enabled()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = self.data_directory() {
            validate_path("data.directory", directory)?;
        }

        for city in City::ALL {
            if let Some(file) = self.city_file_override(city) {
                let field = format!("cities.{}", city.config_key());
                validate_path(&field, file)?;
                validate_file_extension(&field, file, &["csv"])?;
            }
        }
        Ok(())
    }
}
