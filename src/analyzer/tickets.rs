use std::collections::HashSet;

use serde::Serialize;

use crate::analyzer::mark::extract_mark;
use crate::parser::types::Row;

/// Column labels for tabular display, in field order.
pub const COLUMN_LABELS: [&str; 4] = ["ID", "Заголовок", "Операторы", "Балл"];

/// Normalised ticket. Built fresh from a row on every recomputation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub header: String,
    pub operators: String,
    /// Empty string, or an ASCII digit run.
    pub mark: String,
}

impl Ticket {
    /// Copy the row's fields and extract the mark from its title.
    /// Absent fields become empty strings.
    pub fn from_row(row: &Row) -> Self {
        let header = row.title.clone().unwrap_or_default();
        let mark = extract_mark(&header);
        Ticket {
            id: row.id.clone().unwrap_or_default(),
            header,
            operators: row.operators.clone().unwrap_or_default(),
            mark,
        }
    }

    /// Same fields as `from_row`, but the mark is forced empty.
    pub fn unscored(row: &Row) -> Self {
        Ticket {
            id: row.id.clone().unwrap_or_default(),
            header: row.title.clone().unwrap_or_default(),
            operators: row.operators.clone().unwrap_or_default(),
            mark: String::new(),
        }
    }

    /// Integer value of the mark. Runs too large for `u64` saturate to `u64::MAX`.
    pub fn mark_value(&self) -> Option<u64> {
        if self.mark.is_empty() || !self.mark.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(self.mark.parse().unwrap_or(u64::MAX))
    }

    /// Cells in `COLUMN_LABELS` order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.header.as_str(),
            self.operators.as_str(),
            self.mark.as_str(),
        ]
    }
}

pub fn build_tickets<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Vec<Ticket> {
    rows.into_iter().map(Ticket::from_row).collect()
}

/// Distinct operator strings in order of first appearance.
pub fn unique_operators(tickets: &[Ticket]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    tickets
        .iter()
        .filter(|t| seen.insert(t.operators.as_str()))
        .map(|t| t.operators.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row() {
        let t = Ticket::from_row(&Row::new("2", "Task (7) (12)", "Ivanov Petrov"));
        assert_eq!(t.id, "2");
        assert_eq!(t.header, "Task (7) (12)");
        assert_eq!(t.operators, "Ivanov Petrov");
        assert_eq!(t.mark, "12");
        assert_eq!(t.mark_value(), Some(12));
    }

    #[test]
    fn test_from_row_missing_fields() {
        let row = Row {
            id: None,
            title: Some("Задача (3)".into()),
            operators: None,
        };
        let t = Ticket::from_row(&row);
        assert_eq!(t.id, "");
        assert_eq!(t.operators, "");
        assert_eq!(t.mark, "3");
    }

    #[test]
    fn test_unscored_forces_empty_mark() {
        let t = Ticket::unscored(&Row::new("9", "Совместная (5)", "A B C"));
        assert_eq!(t.mark, "");
        assert_eq!(t.mark_value(), None);
        assert_eq!(t.header, "Совместная (5)");
    }

    #[test]
    fn test_mark_value_saturates() {
        let t = Ticket::from_row(&Row::new("1", "a (123456789012345678901)", "A"));
        assert_eq!(t.mark, "123456789012345678901");
        assert_eq!(t.mark_value(), Some(u64::MAX));
        let hand_built = Ticket {
            mark: "x1".into(),
            ..t
        };
        assert_eq!(hand_built.mark_value(), None);
    }

    #[test]
    fn test_cells_follow_labels() {
        let t = Ticket::from_row(&Row::new("1", "Task (5)", "Ivanov"));
        assert_eq!(t.cells(), ["1", "Task (5)", "Ivanov", "5"]);
        assert_eq!(COLUMN_LABELS.len(), t.cells().len());
    }

    #[test]
    fn test_unique_operators_keeps_first_order() {
        let tickets = build_tickets(&[
            Row::new("1", "a (1)", "Петров"),
            Row::new("2", "b (2)", "Иванов Иван"),
            Row::new("3", "c (3)", "Петров"),
        ]);
        assert_eq!(unique_operators(&tickets), vec!["Петров", "Иванов Иван"]);
    }
}
