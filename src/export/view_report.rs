use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::analyzer::stats::Statistics;
use crate::analyzer::tickets::{Ticket, COLUMN_LABELS};
use crate::analyzer::view::View;
use crate::error::AppError;
use crate::export::{create_header_format, create_integer_format, create_wrap_format};

/// Two-sheet XLSX workbook for one view: statistics, then the visible tickets.
pub fn generate_view_report(view: &View, operator: &str) -> Result<Vec<u8>, AppError> {
    let mut wb = Workbook::new();
    write_statistics(&mut wb, operator, &view.statistics)?;
    write_tickets(&mut wb, &view.visible)?;
    Ok(wb.save_to_buffer()?)
}

// ── Лист 1 : Статистика ───────────────────────────────────────────────────────

fn write_statistics(wb: &mut Workbook, operator: &str, stats: &Statistics) -> Result<(), XlsxError> {
    let ws = wb.add_worksheet();
    ws.set_name("Статистика")?;

    let hdr = create_header_format();
    let int = create_integer_format();

    ws.write_with_format(0, 0, "Оператор", &hdr)?;
    ws.write(0, 1, operator)?;
    ws.write(1, 0, "Общее количество заявок")?;
    ws.write_with_format(1, 1, stats.ticket_count as f64, &int)?;
    ws.write(2, 0, "Сумма баллов")?;
    ws.write_with_format(2, 1, stats.total_sum as f64, &int)?;

    ws.write_with_format(4, 0, "Балл", &hdr)?;
    ws.write_with_format(4, 1, "Заявок", &hdr)?;
    for (i, entry) in stats.distribution.iter().enumerate() {
        let row = 5 + i as u32;
        ws.write(row, 0, entry.mark.as_str())?;
        ws.write_with_format(row, 1, entry.count as f64, &int)?;
    }

    ws.set_column_width(0, 28)?;
    ws.set_column_width(1, 30)?;
    Ok(())
}

// ── Лист 2 : Заявки ───────────────────────────────────────────────────────────

fn write_tickets(wb: &mut Workbook, tickets: &[Ticket]) -> Result<(), XlsxError> {
    let ws = wb.add_worksheet();
    ws.set_name("Заявки")?;

    let hdr = create_header_format();
    for (col, label) in COLUMN_LABELS.iter().enumerate() {
        ws.write_with_format(0, col as u16, *label, &hdr)?;
    }

    let wrap = create_wrap_format();
    for (i, t) in tickets.iter().enumerate() {
        write_ticket_row(ws, (i + 1) as u32, t, &wrap)?;
    }

    if !tickets.is_empty() {
        ws.set_freeze_panes(1, 0)?;
        ws.autofilter(0, 0, tickets.len() as u32, (COLUMN_LABELS.len() - 1) as u16)?;
    }

    ws.set_column_width(0, 12)?;
    ws.set_column_width(1, 60)?;
    ws.set_column_width(2, 30)?;
    ws.set_column_width(3, 8)?;
    Ok(())
}

fn write_ticket_row(
    ws: &mut Worksheet,
    row: u32,
    t: &Ticket,
    wrap: &rust_xlsxwriter::Format,
) -> Result<(), XlsxError> {
    ws.write(row, 0, t.id.as_str())?;
    ws.write_with_format(row, 1, t.header.as_str(), wrap)?;
    ws.write(row, 2, t.operators.as_str())?;
    // Числовой балл, чтобы в Excel работали сортировка и суммы.
    match t.mark.parse::<u64>() {
        Ok(v) => ws.write(row, 3, v as f64)?,
        Err(_) => ws.write(row, 3, t.mark.as_str())?,
    };
    Ok(())
}
