use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub id_column: String,
    pub title_column: String,
    pub operators_column: String,
    /// Разделитель полей CSV. `None` = определить по строке заголовков.
    pub delimiter: Option<char>,
    /// Число токенов в поле операторов, начиная с которого заявка считается совместной.
    pub joint_token_threshold: usize,
    pub all_operators_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            id_column: "ID".into(),
            title_column: "Заголовок".into(),
            operators_column: "Назначено - Специалист".into(),
            delimiter: None,
            joint_token_threshold: 3,
            all_operators_label: "Все".into(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document. Missing keys fall back to defaults, unknown keys are ignored.
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured delimiter as a CSV byte, if it is a single-byte character.
    pub fn delimiter_byte(&self) -> Option<u8> {
        self.delimiter.filter(char::is_ascii).map(|c| c as u8)
    }

    fn validate(&self) -> Result<(), AppError> {
        if let Some(c) = self.delimiter {
            if !c.is_ascii() {
                return Err(AppError::Custom(format!(
                    "Разделитель должен быть ASCII-символом: {:?}",
                    c
                )));
            }
        }
        if self.joint_token_threshold == 0 {
            return Err(AppError::Custom(
                "jointTokenThreshold должен быть больше нуля".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load the configuration from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)?;
            let config = AppConfig::from_toml_str(&text)?;
            log::debug!("Конфигурация загружена из {}", p.display());
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}
