use serde::Serialize;

use crate::analyzer::stats::{render_report, Statistics};
use crate::error::AppError;
use crate::state::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput {
    pub operator: String,
    pub statistics: Statistics,
    pub operators: Vec<String>,
    pub report: String,
}

pub fn build_stats(session: &Session) -> Result<StatsOutput, AppError> {
    let view = session
        .view()
        .ok_or_else(|| AppError::Custom("Файл не загружен".to_string()))?;
    let operator = session.operator_label().to_string();
    let report = render_report(&operator, &view.statistics);
    Ok(StatsOutput {
        operator,
        statistics: view.statistics,
        operators: view.operators,
        report,
    })
}

/// Text report, or the full statistics snapshot as JSON.
pub fn run_stats(session: &Session, json: bool) -> Result<String, AppError> {
    let output = build_stats(session)?;
    if json {
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(output.report)
    }
}
