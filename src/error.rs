use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Ошибка XLSX: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Ошибка сериализации: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Файл пуст или не содержит строки заголовков")]
    EmptyFile,

    #[error("{0}")]
    Custom(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_message() {
        let err = AppError::Custom("нет данных".to_string());
        assert_eq!(serde_json::to_string(&err).unwrap(), "\"нет данных\"");
    }

    #[test]
    fn test_empty_file_message() {
        assert!(AppError::EmptyFile.to_string().contains("пуст"));
    }
}
