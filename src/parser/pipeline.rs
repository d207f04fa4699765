use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::parser::columns::{check_columns, ColumnMap};
use crate::parser::types::{ParseWarning, Row};

const UTF8_BOM: &str = "\u{FEFF}";

/// Output of `parse_csv`: the Row Source plus import metadata.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub rows: Vec<Row>,
    pub warnings: Vec<ParseWarning>,
    pub total_rows_processed: usize,
    pub skipped_rows: usize,
    pub detected_columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub parse_duration_ms: u64,
}

/// Parse a helpdesk CSV export from `path`.
pub fn parse_csv(path: impl AsRef<Path>, config: &AppConfig) -> Result<ParseOutput, AppError> {
    let file = std::fs::File::open(path)?;
    parse_csv_reader(std::io::BufReader::new(file), config)
}

/// Core parsing logic. Accepts any `Read` source, useful for tests.
pub fn parse_csv_reader<R: Read>(mut reader: R, config: &AppConfig) -> Result<ParseOutput, AppError> {
    let start = Instant::now();

    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let input = buf.strip_prefix(UTF8_BOM.as_bytes()).unwrap_or(&buf);

    let delimiter = match config.delimiter_byte() {
        Some(d) => d,
        None => detect_delimiter(first_line(input)),
    };
    log::debug!("Разделитель CSV: {:?}", delimiter as char);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .double_quote(true)
        .quoting(true)
        .from_reader(input);

    // Phase 1: header row
    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::EmptyFile);
    }
    let col_map = ColumnMap::from_headers(&headers);
    let report = check_columns(&col_map, config);
    if !report.missing.is_empty() {
        log::warn!("Отсутствуют столбцы: {}", report.missing.join(", "));
    }

    // Phase 2: records
    let mut rows: Vec<Row> = Vec::new();
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let mut skipped = 0usize;
    let mut row_idx = 0usize;

    for result in rdr.records() {
        row_idx += 1;
        match result {
            Ok(record) => rows.push(record_to_row(&col_map, &record, config)),
            Err(err) => {
                log::warn!("Строка {} пропущена: {}", row_idx + 1, err);
                warnings.push(ParseWarning {
                    line: row_idx + 1, // +1 for the header row
                    message: err.to_string(),
                });
                skipped += 1;
            }
        }
    }

    let parse_duration_ms = start.elapsed().as_millis() as u64;
    log::info!(
        "Импорт CSV: {} строк, {} пропущено, {} мс",
        row_idx,
        skipped,
        parse_duration_ms
    );

    Ok(ParseOutput {
        rows,
        warnings,
        total_rows_processed: row_idx,
        skipped_rows: skipped,
        detected_columns: report.present,
        missing_columns: report.missing,
        parse_duration_ms,
    })
}

fn record_to_row(col_map: &ColumnMap, record: &csv::StringRecord, config: &AppConfig) -> Row {
    Row {
        id: col_map.get(record, &config.id_column).map(str::to_string),
        title: col_map.get(record, &config.title_column).map(str::to_string),
        operators: col_map
            .get(record, &config.operators_column)
            .map(str::to_string),
    }
}

fn first_line(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == b'\n').unwrap_or(buf.len());
    std::str::from_utf8(&buf[..end]).unwrap_or("")
}

/// Pick the most frequent of `,` `;` and tab in the header line. Ties go to `,`.
pub fn detect_delimiter(header_line: &str) -> u8 {
    let mut best = b',';
    let mut best_count = header_line.matches(',').count();
    for candidate in [b';', b'\t'] {
        let count = header_line.bytes().filter(|&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

// ─── Tests ────────────────────────────────────────────────────────────────────
