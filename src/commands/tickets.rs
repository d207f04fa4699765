use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::analyzer::tickets::{Ticket, COLUMN_LABELS};
use crate::analyzer::view::{MarkFilter, View, ALL_MARKS_LABEL, JOINT_MARK};
use crate::error::AppError;
use crate::state::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketsOutput<'a> {
    columns: [&'static str; 4],
    tickets: &'a [Ticket],
    marks: &'a [String],
    joint_available: bool,
    operators: &'a [String],
}

pub fn render_table(tickets: &[Ticket]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMN_LABELS);
    for t in tickets {
        table.add_row(t.cells());
    }
    table.to_string()
}

/// Filter options line: every mark, the joint pseudo-mark when available.
pub fn render_mark_options(view: &View, selected: &MarkFilter) -> String {
    let mut options: Vec<String> = Vec::with_capacity(view.marks.len() + 2);
    let marker = |active: bool, label: &str| {
        if active {
            format!("[{}]", label)
        } else {
            label.to_string()
        }
    };
    options.push(marker(*selected == MarkFilter::All, ALL_MARKS_LABEL));
    for mark in &view.marks {
        options.push(marker(*selected == MarkFilter::Mark(mark.clone()), mark));
    }
    if view.joint_available() {
        options.push(marker(
            *selected == MarkFilter::Joint,
            &format!("{} Совместные заявки (необработанные)", JOINT_MARK),
        ));
    }
    format!("Баллы: {}", options.join(" | "))
}

pub fn run_tickets(session: &Session, json: bool) -> Result<String, AppError> {
    let view = session
        .view()
        .ok_or_else(|| AppError::Custom("Файл не загружен".to_string()))?;

    if json {
        let output = TicketsOutput {
            columns: COLUMN_LABELS,
            tickets: &view.visible,
            marks: &view.marks,
            joint_available: view.joint_available(),
            operators: &view.operators,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(format!(
        "Операторы: {}\n{}\n{}\nЗаявок: {}",
        view.operators.join(" | "),
        render_mark_options(&view, &session.filter().mark),
        render_table(&view.visible),
        view.visible.len()
    ))
}
