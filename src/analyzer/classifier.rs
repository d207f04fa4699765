use serde::Serialize;

use crate::analyzer::mark::has_scored_title;
use crate::analyzer::tickets::{build_tickets, Ticket};
use crate::config::AppConfig;
use crate::parser::types::Row;

/// Result of the Title Filter + Operator Splitter stages.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Scored tickets assigned to one operator, in input order.
    pub single: Vec<Ticket>,
    /// Rows assigned to several operators, in input order. Kept as rows: they are
    /// only rebuilt as (unscored) tickets by the joint cross-reference.
    pub joint: Vec<Row>,
}

/// Operator Splitter output, borrowing from the row source.
#[derive(Debug, Default)]
pub struct OperatorSplit<'a> {
    pub single: Vec<&'a Row>,
    pub joint: Vec<&'a Row>,
}

/// Rows whose title is present and contains `(` followed by a digit.
pub fn filter_scored_titles(rows: &[Row]) -> Vec<&Row> {
    rows.iter()
        .filter(|row| row.title.as_deref().is_some_and(has_scored_title))
        .collect()
}

/// Number of whitespace-separated names in an operator field.
pub fn operator_token_count(operators: &str) -> usize {
    operators.split_whitespace().count()
}

/// Partition rows by operator token count: fewer than `joint_threshold` tokens is a
/// single-operator ticket, otherwise joint. Rows without an operator field are dropped.
pub fn split_by_operators<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
    joint_threshold: usize,
) -> OperatorSplit<'a> {
    let mut split = OperatorSplit::default();
    for row in rows {
        let Some(operators) = row.operators.as_deref() else {
            continue;
        };
        if operator_token_count(operators) < joint_threshold {
            split.single.push(row);
        } else {
            split.joint.push(row);
        }
    }
    split
}

/// Run the title filter and operator splitter, then build the single-operator tickets.
pub fn classify_rows(rows: &[Row], config: &AppConfig) -> Classification {
    let scored = filter_scored_titles(rows);
    let scored_count = scored.len();
    let split = split_by_operators(scored, config.joint_token_threshold);

    log::debug!(
        "Классификация: {} строк, {} с баллом, {} одиночных, {} совместных",
        rows.len(),
        scored_count,
        split.single.len(),
        split.joint.len()
    );

    Classification {
        single: build_tickets(split.single),
        joint: split.joint.into_iter().cloned().collect(),
    }
}
