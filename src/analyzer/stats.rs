//! Mark distribution and score totals over a filtered ticket set.
use serde::Serialize;

use crate::analyzer::tickets::Ticket;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkCount {
    pub mark: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// One entry per distinct non-empty mark, in order of first occurrence.
    pub distribution: Vec<MarkCount>,
    pub total_sum: u64,
    /// All tickets in the set, unscored ones included.
    pub ticket_count: usize,
    pub scored_count: usize,
}

impl Statistics {
    pub fn count_for(&self, mark: &str) -> usize {
        self.distribution
            .iter()
            .find(|e| e.mark == mark)
            .map_or(0, |e| e.count)
    }
}

/// Full fold over `tickets`. Empty marks count towards `ticket_count` only.
/// The sum saturates at `u64::MAX`.
pub fn compute_statistics<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Statistics {
    let mut stats = Statistics::default();
    for ticket in tickets {
        stats.ticket_count += 1;
        let Some(value) = ticket.mark_value() else {
            continue;
        };
        stats.scored_count += 1;
        stats.total_sum = stats.total_sum.saturating_add(value);
        match stats.distribution.iter_mut().find(|e| e.mark == ticket.mark) {
            Some(entry) => entry.count += 1,
            None => stats.distribution.push(MarkCount {
                mark: ticket.mark.clone(),
                count: 1,
            }),
        }
    }
    stats
}

/// Fixed-format report handed to the clipboard verbatim.
pub fn render_report(operator: &str, stats: &Statistics) -> String {
    let lines: Vec<String> = stats
        .distribution
        .iter()
        .map(|e| format!("   {} - {} заявок", e.mark, e.count))
        .collect();
    format!(
        "Статистика оператора {}:\nОбщее количество заявок: {}\nСумма баллов: {}\nРаспределение по баллам:\n{}",
        operator,
        stats.ticket_count,
        stats.total_sum,
        lines.join("\n")
    )
}
