use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Column '{column}' is missing from {path}")]
    MissingColumnError { path: String, column: String },

    #[error("Invalid timestamp '{value}' in {path} at row {row}")]
    InvalidTimestampError {
        path: String,
        row: usize,
        value: String,
    },

    #[error("Input closed while waiting for {field}")]
    InputClosedError { field: String },
}

impl BikeshareError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BikeshareError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "找不到資料檔案 (data file not found)".to_string()
            }
            BikeshareError::IoError(e) => format!("無法讀寫檔案: {}", e),
            BikeshareError::CsvError(e) => format!("CSV 格式錯誤: {}", e),
            BikeshareError::ConfigError { message } => format!("配置錯誤: {}", message),
            BikeshareError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置欄位 {} 無效: {}", field, reason)
            }
            BikeshareError::MissingColumnError { path, column } => {
                format!("{} 缺少必要欄位 '{}'", path, column)
            }
            BikeshareError::InvalidTimestampError { path, row, value } => {
                format!("{} 第 {} 筆資料的時間格式無法解析: '{}'", path, row, value)
            }
            BikeshareError::InputClosedError { field } => {
                format!("輸入已結束，尚未取得 {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BikeshareError::IoError(_) => {
                "Check that --data-dir points at the directory holding the city CSV files"
            }
            BikeshareError::CsvError(_) | BikeshareError::MissingColumnError { .. } => {
                "Make sure the city file is an unmodified bikeshare export with a header row"
            }
            BikeshareError::InvalidTimestampError { .. } => {
                "Start Time values must look like 2017-01-01 09:07:57"
            }
            BikeshareError::ConfigError { .. } | BikeshareError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            BikeshareError::InputClosedError { .. } => "Run the program from an interactive terminal",
        }
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
