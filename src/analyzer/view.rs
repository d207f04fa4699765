//! Filter/View layer.
//!
//! Selection state is an immutable [`FilterState`] value; every output a renderer
//! needs is re-derived from it and the current [`Classification`] in one pass by
//! [`derive_view`].

use std::collections::HashSet;

use serde::Serialize;

use crate::analyzer::classifier::Classification;
use crate::analyzer::stats::{compute_statistics, Statistics};
use crate::analyzer::tickets::{unique_operators, Ticket};
use crate::config::AppConfig;

/// UI literal selecting every mark.
pub const ALL_MARKS: &str = "";
/// UI literal selecting the unresolved joint tickets.
pub const JOINT_MARK: &str = "-";
/// Button label for [`ALL_MARKS`].
pub const ALL_MARKS_LABEL: &str = "Все";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
pub enum OperatorFilter {
    #[default]
    All,
    Named(String),
}

impl OperatorFilter {
    /// `all_label` (`"Все"` by default) selects every operator; anything else is an
    /// exact operator string.
    pub fn parse(value: &str, all_label: &str) -> Self {
        if value == all_label {
            OperatorFilter::All
        } else {
            OperatorFilter::Named(value.to_string())
        }
    }

    /// Display name, also used for the joint-ticket containment check.
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            OperatorFilter::All => all_label,
            OperatorFilter::Named(name) => name,
        }
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            OperatorFilter::All => true,
            OperatorFilter::Named(name) => ticket.operators == *name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "mark")]
pub enum MarkFilter {
    #[default]
    All,
    Mark(String),
    Joint,
}

impl MarkFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            ALL_MARKS => MarkFilter::All,
            JOINT_MARK => MarkFilter::Joint,
            mark => MarkFilter::Mark(mark.to_string()),
        }
    }
}

/// Operator and mark selection, always read and replaced as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub operator: OperatorFilter,
    pub mark: MarkFilter,
}

impl FilterState {
    pub fn new(operator: OperatorFilter, mark: MarkFilter) -> Self {
        FilterState { operator, mark }
    }

    pub fn with_operator(&self, operator: OperatorFilter) -> Self {
        FilterState {
            operator,
            mark: self.mark.clone(),
        }
    }

    pub fn with_mark(&self, mark: MarkFilter) -> Self {
        FilterState {
            operator: self.operator.clone(),
            mark,
        }
    }
}

/// Everything a renderer needs for one filter snapshot.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Operator filter options: distinct operators among all single tickets.
    pub operators: Vec<String>,
    /// Single tickets after the operator filter; statistics are computed over these.
    pub operator_tickets: Vec<Ticket>,
    pub statistics: Statistics,
    /// Mark filter options, ascending by numeric value.
    pub marks: Vec<String>,
    /// Joint tickets involving the selected operator, all unscored.
    pub joint_tickets: Vec<Ticket>,
    /// Rows for the ticket table under the current mark filter.
    pub visible: Vec<Ticket>,
}

impl View {
    /// The joint-tickets filter option is offered only when there is something to show.
    pub fn joint_available(&self) -> bool {
        !self.joint_tickets.is_empty()
    }
}

pub fn filter_by_operator(tickets: &[Ticket], operator: &OperatorFilter) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|t| operator.matches(t))
        .cloned()
        .collect()
}

/// Distinct non-empty marks sorted by integer value. Marks with the same value
/// (`"7"`, `"07"`) keep their first-appearance order.
pub fn available_marks(tickets: &[Ticket]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut marks: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| !t.mark.is_empty() && seen.insert(t.mark.as_str()))
        .collect();
    marks.sort_by_key(|t| t.mark_value().unwrap_or(u64::MAX));
    marks.into_iter().map(|t| t.mark.clone()).collect()
}

/// Joint tickets where some whitespace token of the operator field is contained in
/// `operator_label`. Substring containment, so `"Иван"` matches `"Иванов Пётр"`.
/// Each matching ticket appears once, rebuilt with an empty mark.
pub fn joint_tickets_for(classification: &Classification, operator_label: &str) -> Vec<Ticket> {
    classification
        .joint
        .iter()
        .filter(|row| {
            row.operators
                .as_deref()
                .unwrap_or("")
                .split_whitespace()
                .any(|token| operator_label.contains(token))
        })
        .map(Ticket::unscored)
        .collect()
}

pub fn derive_view(classification: &Classification, filter: &FilterState, config: &AppConfig) -> View {
    let operator_tickets = filter_by_operator(&classification.single, &filter.operator);
    let statistics = compute_statistics(&operator_tickets);
    let marks = available_marks(&operator_tickets);
    let joint_tickets = joint_tickets_for(
        classification,
        filter.operator.label(&config.all_operators_label),
    );

    let visible = match &filter.mark {
        MarkFilter::All => operator_tickets.clone(),
        MarkFilter::Joint => joint_tickets.clone(),
        MarkFilter::Mark(mark) => operator_tickets
            .iter()
            .filter(|t| t.mark == *mark)
            .cloned()
            .collect(),
    };

    log::debug!(
        "Представление: {} заявок оператора, {} видимых, {} совместных",
        operator_tickets.len(),
        visible.len(),
        joint_tickets.len()
    );

    View {
        operators: unique_operators(&classification.single),
        operator_tickets,
        statistics,
        marks,
        joint_tickets,
        visible,
    }
}
