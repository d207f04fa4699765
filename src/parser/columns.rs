use std::collections::HashMap;

use crate::config::AppConfig;

/// Maps column names to their index in a CSV record.
pub struct ColumnMap {
    indices: HashMap<String, usize>,
    headers: Vec<String>,
}

impl ColumnMap {
    /// Build a ColumnMap from the CSV header record.
    /// Header fields are trimmed of surrounding whitespace; on duplicate names the first
    /// occurrence wins.
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut indices = HashMap::new();
        let mut header_list = Vec::new();
        for (i, field) in headers.iter().enumerate() {
            let name = field.trim().to_string();
            indices.entry(name.clone()).or_insert(i);
            header_list.push(name);
        }
        ColumnMap {
            indices,
            headers: header_list,
        }
    }

    /// Get the value of a named column from a record.
    /// `None` when the column is unknown or the record is too short to reach it.
    pub fn get<'a>(&self, record: &'a csv::StringRecord, col: &str) -> Option<&'a str> {
        self.indices.get(col).and_then(|&i| record.get(i))
    }

    pub fn has(&self, col: &str) -> bool {
        self.indices.contains_key(col)
    }

    /// All header names in order.
    pub fn all_headers(&self) -> &[String] {
        &self.headers
    }
}

/// Which of the expected columns the CSV actually carries.
#[derive(Debug)]
pub struct ColumnReport {
    pub present: Vec<String>,
    /// Expected columns absent from the header. Rows then simply drop out of the
    /// buckets that need those fields.
    pub missing: Vec<String>,
}

pub fn check_columns(col_map: &ColumnMap, config: &AppConfig) -> ColumnReport {
    let expected = [
        config.id_column.as_str(),
        config.title_column.as_str(),
        config.operators_column.as_str(),
    ];
    let missing = expected
        .iter()
        .filter(|&&c| !col_map.has(c))
        .map(|c| c.to_string())
        .collect();

    ColumnReport {
        present: col_map.all_headers().to_vec(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_headers(cols: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(cols.to_vec())
    }

    #[test]
    fn test_column_map_get() {
        let headers = make_headers(&["ID", "Заголовок"]);
        let cm = ColumnMap::from_headers(&headers);
        let record = csv::StringRecord::from(vec!["42", "Принтер (3)"]);
        assert_eq!(cm.get(&record, "ID"), Some("42"));
        assert_eq!(cm.get(&record, "Заголовок"), Some("Принтер (3)"));
        assert_eq!(cm.get(&record, "Назначено - Специалист"), None);
    }

    #[test]
    fn test_short_record_yields_none() {
        let headers = make_headers(&["ID", "Заголовок", "Назначено - Специалист"]);
        let cm = ColumnMap::from_headers(&headers);
        let record = csv::StringRecord::from(vec!["1"]);
        assert_eq!(cm.get(&record, "ID"), Some("1"));
        assert_eq!(cm.get(&record, "Заголовок"), None);
    }

    #[test]
    fn test_trim_whitespace() {
        let headers = make_headers(&[" ID ", " Заголовок "]);
        let cm = ColumnMap::from_headers(&headers);
        assert!(cm.has("ID"));
        assert!(cm.has("Заголовок"));
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let headers = make_headers(&["ID", "ID"]);
        let cm = ColumnMap::from_headers(&headers);
        let record = csv::StringRecord::from(vec!["first", "second"]);
        assert_eq!(cm.get(&record, "ID"), Some("first"));
    }

    #[test]
    fn test_check_columns_all_present() {
        let headers = make_headers(&["ID", "Заголовок", "Назначено - Специалист", "Статус"]);
        let cm = ColumnMap::from_headers(&headers);
        let report = check_columns(&cm, &AppConfig::default());
        assert!(report.missing.is_empty());
        assert_eq!(report.present.len(), 4);
    }

    #[test]
    fn test_check_columns_reports_missing() {
        let headers = make_headers(&["ID"]);
        let cm = ColumnMap::from_headers(&headers);
        let report = check_columns(&cm, &AppConfig::default());
        assert_eq!(
            report.missing,
            vec!["Заголовок".to_string(), "Назначено - Специалист".to_string()]
        );
    }
}
