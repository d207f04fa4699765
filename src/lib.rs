//! Per-operator mark statistics for GLPI helpdesk ticket exports.
//!
//! Pipeline: CSV rows -> title filter -> operator splitter -> ticket builder ->
//! statistics and filtered views.

pub mod analyzer;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod state;

pub use analyzer::{
    classify_rows, compute_statistics, derive_view, extract_mark, render_report, Classification,
    FilterState, MarkCount, MarkFilter, OperatorFilter, Statistics, Ticket, View, COLUMN_LABELS,
};
pub use config::{load_config, AppConfig};
pub use error::AppError;
pub use parser::{parse_csv, parse_csv_reader, ParseOutput, Row};
pub use state::Session;

// ─── E2E Integration Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXPORT: &str = "ID;Заголовок;Статус;Назначено - Специалист\n\
        1;Task (5);Закрыта;Ivanov Petrov\n\
        2;Task (7) (12);Закрыта;Ivanov Petrov\n\
        3;No mark here;Закрыта;Sidorov Ivanov Petrov Final\n\
        4;Совместная (3);Закрыта;Sidorov Ivanov Petrov Final\n\
        5;Сеть (2);В работе;Sidorov Oleg\n\
        6;Принтер (10);Закрыта;Sidorov Oleg\n\
        7;Без оператора (4);Новая\n\
        8;Сеть (2) повтор;Закрыта;Sidorov Oleg";

    fn classification() -> Classification {
        let parsed = parse_csv_reader(EXPORT.as_bytes(), &AppConfig::default())
            .expect("CSV parsing failed");
        classify_rows(&parsed.rows, &AppConfig::default())
    }

    /// E2E: the reference three-row scenario, end to end through the CSV decoder.
    #[test]
    fn test_e2e_reference_scenario() {
        let csv = "ID,Заголовок,Назначено - Специалист\n\
                   1,Task (5),Ivanov Petrov\n\
                   2,Task (7) (12),Ivanov Petrov\n\
                   3,No mark here,Sidorov Ivanov Petrov Final";
        let parsed = parse_csv_reader(csv.as_bytes(), &AppConfig::default()).unwrap();
        let c = classify_rows(&parsed.rows, &AppConfig::default());

        assert_eq!(c.single.len(), 2);
        assert_eq!(c.single[0].mark, "5");
        assert_eq!(c.single[1].mark, "12");

        let filter = FilterState::new(
            OperatorFilter::Named("Ivanov Petrov".into()),
            MarkFilter::All,
        );
        let view = derive_view(&c, &filter, &AppConfig::default());
        assert_eq!(
            view.statistics.distribution,
            vec![
                MarkCount { mark: "5".into(), count: 1 },
                MarkCount { mark: "12".into(), count: 1 },
            ]
        );
        assert_eq!(view.statistics.total_sum, 17);
        assert_eq!(view.marks, vec!["5", "12"]);
    }

    /// E2E: parse → classify → statistics for "all" and for each operator
    #[test]
    fn test_e2e_statistics_per_operator() {
        let c = classification();
        let config = AppConfig::default();

        let all = derive_view(&c, &FilterState::default(), &config);
        // Row 3 fails the title filter, row 4 is joint, row 7 has no operator field.
        assert_eq!(all.operator_tickets.len(), 5);
        assert_eq!(all.statistics.total_sum, 5 + 12 + 2 + 10 + 2);
        assert_eq!(all.operators, vec!["Ivanov Petrov", "Sidorov Oleg"]);

        let mut per_operator_sum = 0;
        for op in &all.operators {
            let filter = FilterState::default().with_operator(OperatorFilter::Named(op.clone()));
            let view = derive_view(&c, &filter, &config);
            assert!(view.operator_tickets.iter().all(|t| &t.operators == op));
            per_operator_sum += view.statistics.total_sum;
        }
        assert_eq!(per_operator_sum, all.statistics.total_sum);
    }

    /// E2E: the joint pseudo-mark shows the unscored joint tickets of the operator
    #[test]
    fn test_e2e_joint_view() {
        let c = classification();
        let filter = FilterState::new(OperatorFilter::Named("Sidorov Oleg".into()), MarkFilter::Joint);
        let view = derive_view(&c, &filter, &AppConfig::default());

        assert!(view.joint_available());
        let ids: Vec<_> = view.visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
        assert_eq!(view.visible[0].mark, "");
        // Joint tickets never reach the scored statistics.
        assert_eq!(view.statistics.total_sum, 2 + 10 + 2);
        assert_eq!(view.statistics.count_for("2"), 2);
        assert_eq!(view.marks, vec!["2", "10"]);
    }

    /// E2E: session → report text → xlsx bytes
    #[test]
    fn test_e2e_session_report_and_export() {
        let mut session = Session::new(AppConfig::default());
        let parsed = session.load_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(parsed.total_rows_processed, 8);

        session.select_operator(OperatorFilter::Named("Sidorov Oleg".into()));
        let report = session.report().unwrap();
        assert_eq!(
            report,
            "Статистика оператора Sidorov Oleg:\n\
             Общее количество заявок: 3\n\
             Сумма баллов: 14\n\
             Распределение по баллам:\n   \
             2 - 2 заявок\n   \
             10 - 1 заявок"
        );

        let view = session.view().unwrap();
        let bytes = export::generate_view_report(&view, session.operator_label()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    /// E2E: an export without the operators column yields no tickets, not an error
    #[test]
    fn test_e2e_missing_operator_column() {
        let csv = "ID;Заголовок\n1;Task (5)\n2;Task (6)";
        let parsed = parse_csv_reader(csv.as_bytes(), &AppConfig::default()).unwrap();
        assert_eq!(parsed.missing_columns, vec!["Назначено - Специалист".to_string()]);
        let c = classify_rows(&parsed.rows, &AppConfig::default());
        assert!(c.single.is_empty());
        assert!(c.joint.is_empty());
        let view = derive_view(&c, &FilterState::default(), &AppConfig::default());
        assert_eq!(view.statistics, Statistics::default());
    }

    /// E2E: renamed columns via configuration
    #[test]
    fn test_e2e_custom_columns() {
        let config = AppConfig::from_toml_str(
            "idColumn = \"Номер\"\ntitleColumn = \"Тема\"\noperatorsColumn = \"Специалист\"\n",
        )
        .unwrap();
        let csv = "Номер;Тема;Специалист\n10;Тема (4);Кузнецов";
        let parsed = parse_csv_reader(csv.as_bytes(), &config).unwrap();
        let c = classify_rows(&parsed.rows, &config);
        assert_eq!(c.single.len(), 1);
        assert_eq!(c.single[0].id, "10");
        assert_eq!(c.single[0].mark, "4");
    }
}
