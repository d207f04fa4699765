//! System clipboard access for the statistics report.

use crate::error::AppError;

pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Custom(format!("Буфер обмена недоступен: {}", e)))?;
    clipboard
        .set_text(text)
        .map_err(|e| AppError::Custom(format!("Ошибка при копировании: {}", e)))
}

/// Copy and report the outcome. A failure is logged and never propagated: the
/// caller only prints a confirmation when this returns `true`.
pub fn try_copy(text: &str) -> bool {
    copy_with(text, copy_to_clipboard)
}

fn copy_with<F>(text: &str, copy: F) -> bool
where
    F: FnOnce(&str) -> Result<(), AppError>,
{
    match copy(text) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}
