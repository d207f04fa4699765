use serde::Serialize;

/// One decoded CSV record. A field is `None` when its column is absent from the
/// header or the record is shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: Option<String>,
    pub title: Option<String>,
    pub operators: Option<String>,
}

impl Row {
    pub fn new(id: &str, title: &str, operators: &str) -> Self {
        Row {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            operators: Some(operators.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseWarning {
    pub line: usize,
    pub message: String,
}
