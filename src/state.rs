use std::io::Read;
use std::path::Path;

use crate::analyzer::classifier::{classify_rows, Classification};
use crate::analyzer::stats::render_report;
use crate::analyzer::view::{derive_view, FilterState, MarkFilter, OperatorFilter, View};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::parser::{parse_csv, parse_csv_reader, ParseOutput};

/// The loaded Row Source and the current filter snapshot.
///
/// Loading a new source replaces everything derived from the old one. The filter
/// snapshot survives a reload, so an operator chosen before re-importing stays selected.
#[derive(Debug, Default)]
pub struct Session {
    config: AppConfig,
    source: Option<LoadedSource>,
    filter: FilterState,
}

#[derive(Debug)]
struct LoadedSource {
    parse: ParseOutput,
    classification: Classification,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Session {
            config,
            source: None,
            filter: FilterState::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&ParseOutput, AppError> {
        self.source = None;
        let parse = parse_csv(path, &self.config)?;
        Ok(self.install(parse))
    }

    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<&ParseOutput, AppError> {
        self.source = None;
        let parse = parse_csv_reader(reader, &self.config)?;
        Ok(self.install(parse))
    }

    fn install(&mut self, parse: ParseOutput) -> &ParseOutput {
        let classification = classify_rows(&parse.rows, &self.config);
        log::info!(
            "Загружено: {} одиночных заявок, {} совместных",
            classification.single.len(),
            classification.joint.len()
        );
        let loaded = self.source.insert(LoadedSource {
            parse,
            classification,
        });
        &loaded.parse
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn select_operator(&mut self, operator: OperatorFilter) {
        self.filter = self.filter.with_operator(operator);
    }

    pub fn select_mark(&mut self, mark: MarkFilter) {
        self.filter = self.filter.with_mark(mark);
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.source.as_ref().map(|s| &s.classification)
    }

    /// Derive the view for the current snapshot; `None` until a source is loaded.
    pub fn view(&self) -> Option<View> {
        let source = self.source.as_ref()?;
        Some(derive_view(&source.classification, &self.filter, &self.config))
    }

    pub fn operator_label(&self) -> &str {
        self.filter.operator.label(&self.config.all_operators_label)
    }

    pub fn report(&self) -> Option<String> {
        let view = self.view()?;
        Some(render_report(self.operator_label(), &view.statistics))
    }
}
