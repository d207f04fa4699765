use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::error::AppError;
use crate::export::generate_view_report;
use crate::state::Session;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub path: String,
    pub size_bytes: u64,
    pub duration_ms: u64,
}

pub fn run_export(session: &Session, path: &Path) -> Result<ExportResult, AppError> {
    let start = Instant::now();

    let view = session
        .view()
        .ok_or_else(|| AppError::Custom("Файл не загружен".to_string()))?;
    let bytes = generate_view_report(&view, session.operator_label())?;

    std::fs::write(path, &bytes)?;
    log::info!("Отчёт XLSX записан: {} ({} байт)", path.display(), bytes.len());

    Ok(ExportResult {
        path: path.display().to_string(),
        size_bytes: bytes.len() as u64,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
