use crate::utils::error::{BikeshareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BikeshareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BikeshareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(BikeshareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(BikeshareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// 去掉換行字元
pub fn strip_line_ending(input: &str) -> &str {
    input.trim_end_matches(['\r', '\n'])
}

/// 不分大小寫與封閉詞彙比對；前後空白不會被忽略
pub fn match_vocabulary<T: Copy>(input: &str, vocabulary: &[(&str, T)]) -> Option<T> {
    let normalized = strip_line_ending(input).to_lowercase();
    vocabulary
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, value)| *value)
}
